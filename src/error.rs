use thiserror::Error;

/// Errors that can occur while constructing or configuring a provider.
///
/// The four capability operations never return this type: their outcomes,
/// including transport failures, are [`crate::RequestResult`] values.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
