use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::VoiceLoopError;

/// Abstraction over a speech-to-text service.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Convert captured audio into a transcript.
    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String, VoiceLoopError>;
}

/// [`Transcriber`] backed by an OpenAI Whisper-compatible endpoint.
#[derive(Clone)]
pub struct WhisperTranscriber {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl WhisperTranscriber {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio: Vec<u8>, filename: &str) -> Result<String, VoiceLoopError> {
        let url = format!("{}/v1/audio/transcriptions", self.base_url);
        debug!(%url, bytes = audio.len(), "transcription request");
        let part = reqwest::multipart::Part::bytes(audio).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", part);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VoiceLoopError::Transcription(format!("{status}: {body}")));
        }
        let parsed: TranscriptionResponse = resp
            .json()
            .await
            .map_err(|e| VoiceLoopError::Transcription(e.to_string()))?;
        Ok(parsed.text)
    }
}
