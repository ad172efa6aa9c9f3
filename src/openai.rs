use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::VoiceLoopError;
use crate::llm_client::{ChatClient, ChatMessage};

/// [`ChatClient`] backed by an OpenAI-compatible HTTP API.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    chat_model: String,
    embedding_model: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

impl OpenAiClient {
    /// Create a client for `base_url` using `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            chat_model: "gpt-4o-mini".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
        }
    }

    /// Override the chat model name.
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Override the embedding model name.
    pub fn embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, VoiceLoopError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(%url, count = messages.len(), "chat completion request");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.chat_model,
                "messages": messages,
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VoiceLoopError::Chat(format!("{status}: {body}")));
        }
        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| VoiceLoopError::Chat(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| VoiceLoopError::Chat("response had no choices".into()))
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, VoiceLoopError> {
        let url = format!("{}/v1/embeddings", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.embedding_model,
                "input": text,
            }))
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(VoiceLoopError::Embedding(format!("{status}: {body}")));
        }
        let parsed: EmbeddingResponse = resp
            .json()
            .await
            .map_err(|e| VoiceLoopError::Embedding(e.to_string()))?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| VoiceLoopError::Embedding("response had no data".into()))
    }
}
