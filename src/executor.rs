use std::collections::HashMap;

use tracing::debug;

use crate::command::COMMANDS;
use crate::dashboard::DashboardData;

/// Reply used when no command matches and no remote assistant is reachable.
pub const FALLBACK_RESPONSE: &str =
    "I'm not sure how to help with that. Try asking about headcount, open positions, or say 'help'.";

/// Produce the canned response for a matched action.
///
/// Each branch formats a string from the current dashboard data or returns a
/// static line. Most action commands only acknowledge; `action_add_employee`
/// is the exception and updates the metrics in place. Unknown action ids
/// fall through to [`FALLBACK_RESPONSE`] rather than erroring.
pub fn execute_action(
    action: &str,
    params: &HashMap<String, String>,
    data: &mut DashboardData,
) -> String {
    debug!(%action, ?params, "executing action");
    match action {
        "nav_dashboard" => "Taking you to the dashboard.".to_string(),
        "nav_employees" => "Opening the employee directory.".to_string(),
        "nav_reports" => "Opening reports.".to_string(),
        "nav_settings" => "Opening settings.".to_string(),
        "query_employee_count" => format!(
            "We currently have {} employees on the team.",
            data.total_employees
        ),
        "query_open_positions" => format!(
            "There are {} open positions right now.",
            data.open_positions
        ),
        "query_time_to_hire" => format!(
            "Average time to hire is {} days.",
            data.avg_time_to_hire_days
        ),
        "query_satisfaction" => format!(
            "Employee satisfaction is at {}%.",
            data.employee_satisfaction
        ),
        "query_training" => {
            if data.training_progress.is_empty() {
                "No training programs are being tracked yet.".to_string()
            } else {
                let lines: Vec<String> = data
                    .training_progress
                    .iter()
                    .map(|t| format!("{} at {}%", t.name, t.percent))
                    .collect();
                format!("Training progress: {}.", lines.join(", "))
            }
        }
        "query_recent_activity" => match data.recent_activities.first() {
            Some(activity) => format!("Most recently: {}.", activity.description),
            None => "No recent activity recorded.".to_string(),
        },
        "action_generate_report" => match params.get("reportType") {
            Some(kind) => format!(
                "Generating {} report now. It will appear under Reports shortly.",
                kind
            ),
            None => "Generating a summary report now.".to_string(),
        },
        "action_add_employee" => {
            data.total_employees += 1;
            let line = match params.get("employeeName") {
                Some(name) => {
                    data.record_activity(format!("{} was added to the directory", name));
                    format!("Added {} to the directory.", name)
                }
                None => {
                    data.record_activity("A new employee record was created");
                    "Added a new employee record.".to_string()
                }
            };
            format!("{} Headcount is now {}.", line, data.total_employees)
        }
        "action_schedule_meeting" => {
            "I can set that up. Which day and time works for the meeting?".to_string()
        }
        "action_send_message" => match params.get("message") {
            Some(body) => format!("I'll send this to the team: \"{}\".", body),
            None => "What would you like the message to say?".to_string(),
        },
        "assistant_greeting" => "Hi! Ask me about your team's metrics or say 'help'.".to_string(),
        "assistant_help" => {
            let lines: Vec<String> = COMMANDS
                .iter()
                .map(|c| format!("- {}", c.description))
                .collect();
            format!("Here's what I can do:\n{}", lines.join("\n"))
        }
        "assistant_thanks" => "Any time!".to_string(),
        _ => FALLBACK_RESPONSE.to_string(),
    }
}
