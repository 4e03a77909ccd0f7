use serde::{Deserialize, Serialize};

/// A single turn in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// An ordered conversation history, oldest message first.
///
/// The adapter is stateless across calls: the caller owns the history and
/// passes the whole conversation on every chat request.
pub type Conversation = Vec<Message>;

impl Message {
    /// Create a new message with role and text content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::new(Role::Assistant, content)
    }

    /// Get the role of this message.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Get the text content of this message.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_serializes_lowercase() {
        let message = Message::user("hi");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn test_conversation_preserves_order() {
        let conversation: Conversation = vec![
            Message::system("You are terse."),
            Message::user("hello"),
            Message::assistant("hi"),
        ];
        let value = serde_json::to_value(&conversation).unwrap();
        assert_eq!(
            value,
            json!([
                {"role": "system", "content": "You are terse."},
                {"role": "user", "content": "hello"},
                {"role": "assistant", "content": "hi"},
            ])
        );
    }
}
