//! Provider implementations for concrete model services.

pub mod openai;

// Re-export commonly used provider types
pub use openai::OpenAIProvider;
