mod types;

use self::types::{ChatCompletionsRequest, ImageGenerationsRequest};
use crate::provider::ModelProvider;
use crate::types::{AudioSource, Message, RequestResult};
use crate::Error;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fallback message returned when the transport fails or the response body
/// is not JSON. The underlying error is logged, never surfaced to callers.
pub const SERVICE_UNSTABLE_MESSAGE: &str = "OpenAI API 系統不穩定，請稍後再試";

/// Generated image count and resolution are fixed policy, not caller input.
const IMAGE_COUNT: u32 = 1;
const IMAGE_SIZE: &str = "512x512";

/// OpenAI adapter for the [`ModelProvider`] capability set.
///
/// Holds only the credential and a pooled HTTP client; request headers are
/// assembled fresh on every call, so concurrent calls share no mutable
/// state and two instances never cross-contaminate credentials.
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIProvider {
    /// Create a new OpenAI adapter holding the given API key.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::new_with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new OpenAI adapter against a custom base URL
    /// (mock servers, proxies).
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Start a request against `base_url + path` with a fresh bearer header.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    /// One round trip, normalized. Send and JSON-parse failures fail closed
    /// with the fixed fallback message; a non-null `error` field in the body
    /// is a semantic failure carrying the provider's own message; anything
    /// else is a success with the entire body as payload.
    ///
    /// The body is parsed regardless of HTTP status: OpenAI reports errors
    /// as JSON on non-2xx responses and those messages are surfaced verbatim.
    async fn dispatch(&self, request: RequestBuilder) -> RequestResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "request to OpenAI failed");
                return RequestResult::failure(SERVICE_UNSTABLE_MESSAGE);
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!(status = %status, error = %e, "OpenAI response was not valid JSON");
                return RequestResult::failure(SERVICE_UNSTABLE_MESSAGE);
            }
        };

        match body.get("error") {
            Some(provider_error) if !provider_error.is_null() => {
                let message = provider_error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                debug!(status = %status, provider_message = message, "OpenAI reported an error");
                RequestResult::failure(message)
            }
            _ => RequestResult::success(body),
        }
    }
}

#[async_trait::async_trait]
impl ModelProvider for OpenAIProvider {
    /// Probe `GET /models` to confirm the key is accepted.
    async fn validate_credential(&self) -> RequestResult {
        self.dispatch(self.request(Method::GET, "/models")).await
    }

    async fn chat_completion(
        &self,
        conversation: &[Message],
        model_engine: &str,
    ) -> RequestResult {
        let body = ChatCompletionsRequest {
            model: model_engine,
            messages: conversation,
        };

        self.dispatch(
            self.request(Method::POST, "/chat/completions")
                .header(CONTENT_TYPE, "application/json")
                .json(&body),
        )
        .await
    }

    /// Multipart upload: the audio bytes under `file`, the engine name under
    /// `model`. No JSON content type; the client sets the multipart boundary
    /// header itself.
    async fn transcribe_audio(&self, audio: AudioSource, model_engine: &str) -> RequestResult {
        let (file_name, bytes) = audio.into_parts();
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("model", model_engine.to_string());

        self.dispatch(
            self.request(Method::POST, "/audio/transcriptions")
                .multipart(form),
        )
        .await
    }

    async fn generate_image(&self, prompt: &str) -> RequestResult {
        let body = ImageGenerationsRequest {
            prompt,
            n: IMAGE_COUNT,
            size: IMAGE_SIZE,
        };

        self.dispatch(
            self.request(Method::POST, "/images/generations")
                .header(CONTENT_TYPE, "application/json")
                .json(&body),
        )
        .await
    }
}
