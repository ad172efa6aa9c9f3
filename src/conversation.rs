use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatMessage, ChatRole};

/// Who produced a conversation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn in the on-screen conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation history.
///
/// The full insertion-ordered history backs the on-screen transcript while
/// [`tail`](Conversation::tail) exposes a sliding window passed as context
/// to the chat completion service. Messages are never edited after they are
/// appended; [`clear`](Conversation::clear) wipes the whole log and is the
/// only way to remove entries.
#[derive(Debug, Default)]
pub struct Conversation {
    history: Vec<ConversationMessage>,
    max_tail_len: usize,
}

impl Conversation {
    /// Create a conversation keeping `max_tail_len` messages in the tail.
    pub fn new(max_tail_len: usize) -> Self {
        Self {
            history: Vec::new(),
            max_tail_len,
        }
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content.into());
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content.into());
    }

    fn push(&mut self, role: Role, content: String) {
        self.history.push(ConversationMessage {
            role,
            content,
            timestamp: Utc::now(),
        });
    }

    /// The most recent messages, up to the configured limit, converted for a
    /// remote chat call.
    pub fn tail(&self) -> Vec<ChatMessage> {
        let start = self.history.len().saturating_sub(self.max_tail_len);
        self.history[start..]
            .iter()
            .map(|m| ChatMessage {
                role: match m.role {
                    Role::User => ChatRole::User,
                    Role::Assistant => ChatRole::Assistant,
                },
                content: m.content.clone(),
            })
            .collect()
    }

    /// Full insertion-ordered history.
    pub fn full(&self) -> &[ConversationMessage] {
        &self.history
    }

    /// Drop every message. There is no undo.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
