use crate::command::VoiceCommand;

/// Lowercase and trim an utterance before matching.
#[inline]
pub fn normalize(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Find the first command triggered by `utterance`.
///
/// Commands are scanned in declaration order and each command's patterns in
/// declaration order; the first pattern contained in the normalized utterance
/// wins. Matching is plain substring containment with no word boundary
/// check, so a pattern like `"hi"` fires inside `"shipment"`. Absence of a
/// match is a normal outcome, not an error.
///
/// # Examples
///
/// ```
/// use voiceloop::{COMMANDS, match_command};
///
/// let cmd = match_command(&COMMANDS, "How many employees do we have?").unwrap();
/// assert_eq!(cmd.action, "query_employee_count");
/// assert!(match_command(&COMMANDS, "asdkjasd").is_none());
/// ```
pub fn match_command<'a>(
    commands: &'a [VoiceCommand],
    utterance: &str,
) -> Option<&'a VoiceCommand> {
    let normalized = normalize(utterance);
    if normalized.is_empty() {
        return None;
    }
    commands.iter().find(|cmd| {
        cmd.patterns
            .iter()
            .any(|p| normalized.contains(&p.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::COMMANDS;

    #[test]
    fn normalizes_case_and_whitespace() {
        let cmd = match_command(&COMMANDS, "  TOTAL EMPLOYEES please  ").unwrap();
        assert_eq!(cmd.action, "query_employee_count");
    }

    #[test]
    fn empty_utterance_never_matches() {
        assert!(match_command(&COMMANDS, "").is_none());
        assert!(match_command(&COMMANDS, "   ").is_none());
    }

    #[test]
    fn miss_is_none() {
        assert!(match_command(&COMMANDS, "asdkjasd").is_none());
    }

    #[test]
    fn first_declared_command_wins_on_overlap() {
        // "show reports" carries both the nav pattern and the bare "report"
        // substring of the generate action; the earlier nav entry shadows it.
        let cmd = match_command(&COMMANDS, "show reports").unwrap();
        assert_eq!(cmd.action, "nav_reports");
    }

    #[test]
    fn substring_collisions_are_deliberate() {
        // "shipment" contains "hi", so the greeting fires without any word
        // boundary in sight.
        let cmd = match_command(&COMMANDS, "the shipment arrived").unwrap();
        assert_eq!(cmd.action, "assistant_greeting");
    }

    #[test]
    fn match_against_fixed_corpus() {
        let corpus: &[(&str, Option<&str>)] = &[
            ("how many employees do we have", Some("query_employee_count")),
            ("generate a headcount report", Some("action_generate_report")),
            ("asdkjasd", None),
            ("open positions this quarter", Some("query_open_positions")),
            ("schedule a meeting with Dana", Some("action_schedule_meeting")),
            ("this is a test", Some("assistant_greeting")),
            ("xyzzy qwrt", None),
        ];
        for (utterance, expected) in corpus {
            let got = match_command(&COMMANDS, utterance).map(|c| c.action);
            assert_eq!(got, *expected, "utterance {utterance:?}");
        }
    }
}
