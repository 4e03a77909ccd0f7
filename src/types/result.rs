use serde_json::Value;

/// The normalized outcome of a provider operation.
///
/// Network failures, unparseable responses and provider-reported errors all
/// end up as [`RequestResult::Failure`]; the variant structure guarantees
/// that exactly one of payload/error message exists for any outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestResult {
    /// The provider answered with well-formed JSON carrying no error marker.
    /// The payload is the entire response body, unfiltered.
    Success { payload: Value },
    /// The call failed; `message` is either the provider's own error message
    /// or a fixed fallback when the transport or parsing failed.
    Failure { message: String },
}

impl RequestResult {
    pub fn success(payload: Value) -> Self {
        RequestResult::Success { payload }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        RequestResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestResult::Success { .. })
    }

    /// The response body, if the call succeeded.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            RequestResult::Success { payload } => Some(payload),
            RequestResult::Failure { .. } => None,
        }
    }

    /// The human-readable error message, if the call failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestResult::Success { .. } => None,
            RequestResult::Failure { message } => Some(message),
        }
    }

    /// Consume the result, keeping the payload on success.
    pub fn into_payload(self) -> Result<Value, String> {
        match self {
            RequestResult::Success { payload } => Ok(payload),
            RequestResult::Failure { message } => Err(message),
        }
    }
}
