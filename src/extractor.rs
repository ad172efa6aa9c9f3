use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMPLOYEE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:for|about|employee)\s+([a-zA-Z\s]+)").unwrap());
static REPORT_TYPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:generate|create)\s+([a-zA-Z\s]+)\s+report").unwrap());
static MESSAGE_BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:message|notify|announce)\s+(.+)").unwrap());

/// Pull free-text parameters out of an utterance for a matched action.
///
/// The action id selects which fixed regex runs against the original,
/// un-normalized utterance. Values are trimmed but otherwise unvalidated;
/// an extracted "employee name" can be any free text. Running the same
/// extraction twice yields the same mapping.
///
/// # Examples
///
/// ```
/// use voiceloop::extract_parameters;
///
/// let params = extract_parameters("action_generate_report", "generate a headcount report");
/// assert_eq!(params.get("reportType").map(String::as_str), Some("a headcount"));
/// ```
pub fn extract_parameters(action: &str, utterance: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if action.contains("employee") {
        if let Some(cap) = EMPLOYEE_NAME.captures(utterance) {
            params.insert("employeeName".to_string(), cap[1].trim().to_string());
        }
    }
    if action.contains("report") {
        if let Some(cap) = REPORT_TYPE.captures(utterance) {
            params.insert("reportType".to_string(), cap[1].trim().to_string());
        }
    }
    if action.contains("message") {
        if let Some(cap) = MESSAGE_BODY.captures(utterance) {
            params.insert("message".to_string(), cap[1].trim().to_string());
        }
    }
    params
}
