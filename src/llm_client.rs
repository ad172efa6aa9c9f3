use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::VoiceLoopError;

/// Role attached to a message sent to the chat completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Common interface for chat-based LLM services.
///
/// The dashboard only ever needs a single completion string per call; there
/// is no streaming, no retry and no cancellation once a call is in flight.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Request one completion for the ordered message list.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, VoiceLoopError>;

    /// Generate an embedding vector for the provided text.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, VoiceLoopError>;
}
