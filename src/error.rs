use thiserror::Error;

/// Failures raised by the remote service clients.
///
/// Every variant carries a human readable message; the orchestrator converts
/// these into a line appended to the conversation rather than escalating.
#[derive(Debug, Error)]
pub enum VoiceLoopError {
    /// The chat completion service returned an error or malformed payload.
    #[error("chat completion failed: {0}")]
    Chat(String),

    /// The embedding service returned an error or malformed payload.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Speech-to-text transcription failed.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// Text-to-speech synthesis failed.
    #[error("speech synthesis failed: {0}")]
    Speech(String),

    /// Prompt template rendering failed.
    #[error("template render failed: {0}")]
    Template(#[from] tinytemplate::error::Error),

    /// Underlying HTTP transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
