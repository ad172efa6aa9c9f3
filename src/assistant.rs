use std::sync::Arc;

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::{debug, warn};

use crate::command::{COMMANDS, VoiceCommand};
use crate::conversation::Conversation;
use crate::dashboard::DashboardData;
use crate::error::VoiceLoopError;
use crate::executor::{FALLBACK_RESPONSE, execute_action};
use crate::extractor::extract_parameters;
use crate::llm_client::{ChatClient, ChatMessage};
use crate::matcher::match_command;
use crate::mouth::{FallbackMouth, Mouth};
use crate::transcriber::Transcriber;

/// Default system prompt template for the remote chat fallback.
const SYSTEM_PROMPT: &str = "You are VoiceLoop, a voice-driven HR assistant. \
The dashboard currently shows {total_employees} employees, {open_positions} open positions \
and {employee_satisfaction}% satisfaction. Answer briefly and conversationally.";

/// Dashboard snapshot interpolated into the system prompt.
#[derive(Serialize)]
struct PromptContext {
    total_employees: u32,
    open_positions: u32,
    employee_satisfaction: u8,
}

impl From<&DashboardData> for PromptContext {
    fn from(data: &DashboardData) -> Self {
        Self {
            total_employees: data.total_employees,
            open_positions: data.open_positions,
            employee_satisfaction: data.employee_satisfaction,
        }
    }
}

/// Render the system prompt template against the current dashboard.
///
/// Template variables use `TinyTemplate`'s `{name}` syntax and draw from
/// [`PromptContext`].
fn render_system_prompt(
    template: &str,
    dashboard: &DashboardData,
) -> Result<String, VoiceLoopError> {
    let mut tt = TinyTemplate::new();
    tt.add_template("system", template)?;
    Ok(tt.render("system", &PromptContext::from(dashboard))?)
}

/// Where the assistant currently is in its turn cycle.
///
/// Transitions run `Idle → Listening → Matching → Executing → Responding →
/// Idle` for a voice turn; typed turns skip `Listening`. Turns never
/// overlap: each one runs to completion under the exclusive `&mut self`
/// borrow, with no queue and no cancellation once a remote call is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantState {
    Idle,
    Listening,
    Matching,
    Executing,
    Responding,
}

/// Drives an utterance through match, extract, execute and respond.
///
/// All state the dispatcher reads lives here explicitly; there are no
/// module-level singletons. Remote failures are converted to user readable
/// lines appended to the conversation and never escalate.
pub struct Assistant {
    commands: &'static [VoiceCommand],
    conversation: Conversation,
    dashboard: DashboardData,
    chat: Option<Arc<dyn ChatClient>>,
    transcriber: Option<Arc<dyn Transcriber>>,
    mouth: Arc<dyn Mouth>,
    system_prompt: String,
    state: AssistantState,
}

impl Assistant {
    /// Create an assistant keeping `conversation_tail` messages of chat
    /// context, with no remote services attached.
    pub fn new(conversation_tail: usize) -> Self {
        Self {
            commands: &COMMANDS,
            conversation: Conversation::new(conversation_tail),
            dashboard: DashboardData::sample(),
            chat: None,
            transcriber: None,
            mouth: Arc::new(FallbackMouth),
            system_prompt: SYSTEM_PROMPT.to_string(),
            state: AssistantState::Idle,
        }
    }

    /// Attach a chat completion client used when no command matches.
    pub fn chat_client(mut self, chat: Arc<dyn ChatClient>) -> Self {
        self.chat = Some(chat);
        self
    }

    /// Attach a speech-to-text service for voice turns.
    pub fn transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Replace the mouth used to speak replies.
    pub fn mouth(mut self, mouth: Arc<dyn Mouth>) -> Self {
        self.mouth = mouth;
        self
    }

    /// Override the system prompt template.
    pub fn system_prompt(mut self, template: impl Into<String>) -> Self {
        self.system_prompt = template.into();
        self
    }

    pub fn state(&self) -> AssistantState {
        self.state
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Wipe the conversation history. There is no undo.
    pub fn clear_conversation(&mut self) {
        self.conversation.clear();
    }

    pub fn dashboard(&self) -> &DashboardData {
        &self.dashboard
    }

    /// Replace the dashboard data wholesale.
    pub fn set_dashboard(&mut self, data: DashboardData) {
        self.dashboard = data;
    }

    /// Handle a typed or transcribed utterance and return the reply.
    ///
    /// Returns `None` for blank input, mirroring the original UI's
    /// disabled-submit behavior; that is not an error.
    pub async fn handle_utterance(&mut self, utterance: &str) -> Option<String> {
        if utterance.trim().is_empty() {
            return None;
        }
        self.conversation.push_user(utterance.trim());

        self.state = AssistantState::Matching;
        let reply = match match_command(self.commands, utterance) {
            Some(cmd) => {
                debug!(action = %cmd.action, "command matched");
                self.state = AssistantState::Executing;
                let params = extract_parameters(cmd.action, utterance);
                execute_action(cmd.action, &params, &mut self.dashboard)
            }
            None => self.remote_reply().await,
        };
        self.conversation.push_assistant(&reply);

        self.state = AssistantState::Responding;
        if let Err(e) = self.mouth.say(&reply).await {
            warn!(?e, "speech failed, degrading to fallback mouth");
            let _ = FallbackMouth.say(&reply).await;
        }

        self.state = AssistantState::Idle;
        Some(reply)
    }

    /// Handle a captured audio clip: transcribe, then dispatch the text.
    pub async fn handle_audio(&mut self, audio: Vec<u8>, filename: &str) -> Option<String> {
        let Some(transcriber) = self.transcriber.clone() else {
            return Some("Voice input isn't available right now.".to_string());
        };
        self.state = AssistantState::Listening;
        let transcript = match transcriber.transcribe(audio, filename).await {
            Ok(text) => text,
            Err(e) => {
                warn!(?e, "transcription failed");
                self.state = AssistantState::Idle;
                let line = "Sorry, I couldn't make out that recording.".to_string();
                self.conversation.push_assistant(&line);
                return Some(line);
            }
        };
        self.handle_utterance(&transcript).await
    }

    /// Fall through to the remote chat service, or the canned fallback when
    /// none is configured or the call fails.
    async fn remote_reply(&mut self) -> String {
        let Some(chat) = self.chat.clone() else {
            return FALLBACK_RESPONSE.to_string();
        };

        let system =
            render_system_prompt(&self.system_prompt, &self.dashboard).unwrap_or_else(|e| {
                warn!(?e, "system prompt render failed");
                self.system_prompt.clone()
            });

        let mut msgs = vec![ChatMessage::system(system)];
        msgs.extend(self.conversation.tail());
        match chat.complete(&msgs).await {
            Ok(text) => text,
            Err(e) => {
                warn!(?e, "chat completion failed");
                "Sorry, I couldn't reach the assistant service. Please try again.".to_string()
            }
        }
    }
}
