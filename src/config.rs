use serde::{Deserialize, Serialize};

/// Runtime settings for the assistant and its remote services.
///
/// API keys stay optional; features degrade rather than fail when a key is
/// missing (chat falls back to the canned string, speech to the logging
/// mouth).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_base_url: String,
    /// ElevenLabs voice used for synthesis.
    pub voice_id: String,
    /// How many recent messages accompany a remote chat call.
    pub conversation_tail: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: "https://api.openai.com".to_string(),
            elevenlabs_api_key: None,
            elevenlabs_base_url: "https://api.elevenlabs.io".to_string(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            conversation_tail: 10,
        }
    }
}

impl Settings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            elevenlabs_api_key: std::env::var("ELEVENLABS_API_KEY").ok(),
            elevenlabs_base_url: std::env::var("ELEVENLABS_BASE_URL")
                .unwrap_or(defaults.elevenlabs_base_url),
            voice_id: std::env::var("ELEVENLABS_VOICE_ID").unwrap_or(defaults.voice_id),
            conversation_tail: std::env::var("CONVERSATION_TAIL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.conversation_tail),
        }
    }
}
