//! A uniform capability interface over a remote LLM provider.
//!
//! This library exposes a single trait, [`ModelProvider`], covering four
//! capabilities — credential validation, chat completion, audio transcription
//! and image generation — and one concrete adapter for the OpenAI API.
//! Every operation returns a [`RequestResult`]: transport failures, malformed
//! responses and provider-reported errors all collapse into the same
//! success/failure value, so callers branch once and never catch anything.

pub mod error;
pub mod factory;
pub mod provider;
pub mod providers;
pub mod types;

// Re-export core types for easy usage
pub use error::Error;
pub use factory::{ProviderConfig, ProviderFactory, ProviderType};
pub use provider::ModelProvider;
pub use providers::*;
pub use types::*;
