use crate::types::{AudioSource, Message, RequestResult};

/// The capability set any model provider must expose.
///
/// Callers hold a `dyn ModelProvider` and never depend on a concrete
/// adapter, so providers can be swapped without touching call sites.
/// No method fails with an `Err` or a panic as its normal contract:
/// every outcome, including transport failure, is a [`RequestResult`].
#[async_trait::async_trait]
pub trait ModelProvider: Send + Sync + 'static {
    /// Confirm the held credential is accepted by the provider.
    /// Read-only probe, no side effects.
    async fn validate_credential(&self) -> RequestResult;

    /// Submit the full conversation and a model engine identifier,
    /// returning the provider's completion payload.
    async fn chat_completion(
        &self,
        conversation: &[Message],
        model_engine: &str,
    ) -> RequestResult;

    /// Submit binary audio for transcription with the given model engine.
    async fn transcribe_audio(&self, audio: AudioSource, model_engine: &str) -> RequestResult;

    /// Submit a text prompt and get back an image reference payload.
    /// Image count and resolution are fixed by the adapter.
    async fn generate_image(&self, prompt: &str) -> RequestResult;
}
