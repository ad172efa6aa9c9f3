//! Core logic for the VoiceLoop HR assistant.
//!
//! This crate hosts the transcript-to-action dispatch flow (command table,
//! matcher, parameter extractor, executor), the conversation log, the
//! in-memory knowledge base and calendar, and thin clients for the hosted
//! chat/transcription/speech services. The web UI, auth and persistence
//! layers live elsewhere.

mod assistant;
mod calendar;
mod chunker;
mod command;
mod config;
mod conversation;
mod dashboard;
mod error;
mod executor;
mod extractor;
mod knowledge;
mod llm_client;
mod matcher;
mod mouth;
mod openai;
mod transcriber;

pub use assistant::{Assistant, AssistantState};
pub use calendar::{
    CalendarAction, CalendarEvent, EventDetails, EventStore, ParsedIntent, parse_intent,
};
pub use chunker::{Chunk, ChunkKind, chunk_text};
pub use command::{COMMANDS, CommandCategory, VoiceCommand};
pub use config::Settings;
pub use conversation::{Conversation, ConversationMessage, Role};
pub use dashboard::{Activity, DashboardData, TrainingProgress};
pub use error::VoiceLoopError;
pub use executor::{FALLBACK_RESPONSE, execute_action};
pub use extractor::extract_parameters;
pub use knowledge::{
    DocumentMetadata, KnowledgeBase, SearchHit, SearchMode, StoredChunk, extract_key_terms,
};
pub use llm_client::{ChatClient, ChatMessage, ChatRole};
pub use matcher::{match_command, normalize};
pub use mouth::{ElevenLabsMouth, FallbackMouth, LoggingMouth, Mouth};
pub use openai::OpenAiClient;
pub use transcriber::{Transcriber, WhisperTranscriber};
