use crate::{Error, ModelProvider, OpenAIProvider};
use std::env;

/// Supported model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    OpenAI,
}

/// Configuration for creating providers.
///
/// The credential is carried here explicitly and handed to the adapter at
/// construction; it is never written into the process environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub provider_type: ProviderType,
    pub api_key: String,
}

impl ProviderConfig {
    /// Create configuration for the OpenAI provider.
    pub fn openai(api_key: String) -> Self {
        Self {
            provider_type: ProviderType::OpenAI,
            api_key,
        }
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            Error::config("OPENAI_API_KEY environment variable is required for OpenAI provider")
        })?;
        Ok(Self::openai(api_key))
    }
}

/// Factory for creating model providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn ModelProvider>, Error> {
        match config.provider_type {
            ProviderType::OpenAI => {
                let provider = OpenAIProvider::new(config.api_key.clone())?;
                Ok(Box::new(provider))
            }
        }
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Box<dyn ModelProvider>, Error> {
        let config = ProviderConfig::from_env()?;
        Self::create(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_config() {
        let config = ProviderConfig::openai("test-api-key".to_string());
        assert_eq!(config.provider_type, ProviderType::OpenAI);
        assert_eq!(config.api_key, "test-api-key");
    }

    #[test]
    fn test_create_openai_provider() {
        let config = ProviderConfig::openai("test-api-key".to_string());
        let provider = ProviderFactory::create(&config);
        assert!(provider.is_ok());
    }
}
