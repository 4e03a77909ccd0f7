use crate::types::Message;
use serde::Serialize;

/// Body of a `POST /chat/completions` request.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionsRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

/// Body of a `POST /images/generations` request. Count and size are fixed
/// by the adapter, not caller input.
#[derive(Debug, Serialize)]
pub(crate) struct ImageGenerationsRequest<'a> {
    pub prompt: &'a str,
    pub n: u32,
    pub size: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_body_shape() {
        let messages = vec![Message::user("hi")];
        let request = ChatCompletionsRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "hi"}],
            })
        );
    }

    #[test]
    fn test_image_request_body_shape() {
        let request = ImageGenerationsRequest {
            prompt: "a cat",
            n: 1,
            size: "512x512",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"prompt": "a cat", "n": 1, "size": "512x512"})
        );
    }
}
