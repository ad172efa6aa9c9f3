use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Broad grouping used by the dashboard to organize commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Navigation,
    Query,
    Action,
    Assistant,
}

/// A single entry in the voice command table.
///
/// Commands are immutable and declared once at process start. Pattern and
/// declaration order are significant: the matcher returns the first command
/// whose pattern appears in the utterance, so earlier entries shadow later
/// ones with overlapping substrings.
#[derive(Debug, Clone)]
pub struct VoiceCommand {
    /// Substrings that trigger this command, in priority order.
    pub patterns: &'static [&'static str],
    /// Identifier dispatched to the executor.
    pub action: &'static str,
    /// Short human readable description shown in help output.
    pub description: &'static str,
    pub category: CommandCategory,
}

/// The built-in command table, in declaration order.
///
/// Assistant small talk sits last so that the short greeting patterns do not
/// shadow the more specific query and action entries.
pub static COMMANDS: Lazy<Vec<VoiceCommand>> = Lazy::new(|| {
    use CommandCategory::*;
    vec![
        VoiceCommand {
            patterns: &["go to dashboard", "show dashboard", "open dashboard"],
            action: "nav_dashboard",
            description: "Navigate to the dashboard overview",
            category: Navigation,
        },
        VoiceCommand {
            patterns: &["go to employees", "show employees", "employee list"],
            action: "nav_employees",
            description: "Navigate to the employee directory",
            category: Navigation,
        },
        VoiceCommand {
            patterns: &["go to reports", "show reports", "open reports"],
            action: "nav_reports",
            description: "Navigate to the reports page",
            category: Navigation,
        },
        VoiceCommand {
            patterns: &["go to settings", "open settings"],
            action: "nav_settings",
            description: "Navigate to settings",
            category: Navigation,
        },
        VoiceCommand {
            patterns: &["how many employees", "employee count", "total employees"],
            action: "query_employee_count",
            description: "Report the current headcount",
            category: Query,
        },
        VoiceCommand {
            patterns: &["open positions", "open roles", "how many openings"],
            action: "query_open_positions",
            description: "Report open positions",
            category: Query,
        },
        VoiceCommand {
            patterns: &["time to hire", "hiring time"],
            action: "query_time_to_hire",
            description: "Report the average time to hire",
            category: Query,
        },
        VoiceCommand {
            patterns: &["satisfaction", "how happy"],
            action: "query_satisfaction",
            description: "Report employee satisfaction",
            category: Query,
        },
        VoiceCommand {
            patterns: &["training progress", "training status"],
            action: "query_training",
            description: "Report training program progress",
            category: Query,
        },
        VoiceCommand {
            patterns: &["recent activity", "recent activities", "what happened"],
            action: "query_recent_activity",
            description: "Summarize recent activity",
            category: Query,
        },
        VoiceCommand {
            patterns: &["generate", "create a report", "report"],
            action: "action_generate_report",
            description: "Generate a report",
            category: Action,
        },
        VoiceCommand {
            patterns: &["add employee", "new employee", "onboard"],
            action: "action_add_employee",
            description: "Add an employee record",
            category: Action,
        },
        VoiceCommand {
            patterns: &["schedule a meeting", "schedule meeting", "book a meeting"],
            action: "action_schedule_meeting",
            description: "Schedule a meeting",
            category: Action,
        },
        VoiceCommand {
            patterns: &["send a message", "message", "notify", "announce"],
            action: "action_send_message",
            description: "Send a message to the team",
            category: Action,
        },
        VoiceCommand {
            patterns: &["hello", "hey there", "hi"],
            action: "assistant_greeting",
            description: "Greet the assistant",
            category: Assistant,
        },
        VoiceCommand {
            patterns: &["help", "what can you do", "capabilities"],
            action: "assistant_help",
            description: "List available commands",
            category: Assistant,
        },
        VoiceCommand {
            patterns: &["thank you", "thanks"],
            action: "assistant_thanks",
            description: "Acknowledge thanks",
            category: Assistant,
        },
    ]
});
