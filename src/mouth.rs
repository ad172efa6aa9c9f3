use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::error::VoiceLoopError;

/// Abstraction for speaking a reply out loud.
///
/// Implementations may route text to a TTS service, a console log or any
/// other speaking mechanism.
#[async_trait]
pub trait Mouth: Send + Sync {
    /// Speak the provided phrase.
    async fn say(&self, phrase: &str) -> Result<(), VoiceLoopError>;
}

/// [`Mouth`] that logs phrases via [`tracing`].
///
/// Used when no TTS service is configured and as the degradation path when
/// synthesis fails mid-session.
pub struct FallbackMouth;

#[async_trait]
impl Mouth for FallbackMouth {
    async fn say(&self, phrase: &str) -> Result<(), VoiceLoopError> {
        info!("say: {phrase}");
        Ok(())
    }
}

/// [`Mouth`] that stores spoken phrases for later inspection in tests.
#[derive(Clone, Default)]
pub struct LoggingMouth {
    log: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl LoggingMouth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every phrase spoken so far, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.log.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mouth for LoggingMouth {
    async fn say(&self, phrase: &str) -> Result<(), VoiceLoopError> {
        if let Ok(mut log) = self.log.lock() {
            log.push(phrase.to_string());
        }
        Ok(())
    }
}

/// [`Mouth`] backed by an ElevenLabs-compatible text-to-speech API.
#[derive(Clone)]
pub struct ElevenLabsMouth {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    voice_id: String,
}

impl ElevenLabsMouth {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        voice_id: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            voice_id: voice_id.into(),
        }
    }

    /// Synthesize `text` and return the raw audio bytes.
    pub async fn synthesize(&self, text: &str) -> Result<Vec<u8>, VoiceLoopError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, self.voice_id);
        debug!(%url, "synthesis request");
        let resp = self
            .http
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .json(&json!({
                "text": text,
                "model_id": "eleven_monolingual_v1",
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VoiceLoopError::Speech(format!("{status}: {body}")));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Mouth for ElevenLabsMouth {
    async fn say(&self, phrase: &str) -> Result<(), VoiceLoopError> {
        let audio = self.synthesize(phrase).await?;
        // Playback devices are outside this crate; downstream consumers pull
        // the bytes through `synthesize` directly when they need them.
        debug!(bytes = audio.len(), "synthesized phrase");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logging_mouth_records_in_order() {
        let mouth = LoggingMouth::new();
        mouth.say("first").await.unwrap();
        mouth.say("second").await.unwrap();
        assert_eq!(mouth.spoken(), vec!["first", "second"]);
    }
}
