use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

static TIME_EXPRESSIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(?:today|tomorrow|yesterday)\b",
        r"\b(?:next|last)\s+(?:week|month|year|monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        r"\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\b",
        r"\b(?:morning|afternoon|evening|night)\b",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
    .collect()
});

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:meeting|call|appointment)\s+with\s+([^,.]+)").unwrap());
static LOCATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bin\s+([^,.]+)").unwrap());
static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(hour|hr|minute|min)s?").unwrap());
static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*(am|pm)\b").unwrap());

/// What a natural-language calendar command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarAction {
    Create,
    Read,
    Update,
    Delete,
}

/// Event fields recovered from the command text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: Option<i64>,
}

/// Structured result of rule-based calendar parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub action: CalendarAction,
    pub details: EventDetails,
    pub time_expressions: Vec<String>,
    pub priority: String,
    pub event_type: String,
    pub confidence: f32,
}

/// Parse a calendar command with fixed word lists and regexes.
///
/// This mirrors the rule-based fallback the original service used when the
/// AI parser was unavailable: action words pick the verb, fixed regexes pull
/// time expressions and event details, and priority/type/confidence take
/// their default values.
pub fn parse_intent(command: &str) -> ParsedIntent {
    let lower = command.to_lowercase();
    let word = |w: &str| lower.contains(w);

    let action = if word("create") || word("add") || word("schedule") || word("book") {
        CalendarAction::Create
    } else if word("update") || word("change") || word("modify") {
        CalendarAction::Update
    } else if word("delete") || word("remove") || word("cancel") {
        CalendarAction::Delete
    } else {
        CalendarAction::Read
    };

    let mut time_expressions = Vec::new();
    for re in TIME_EXPRESSIONS.iter() {
        for m in re.find_iter(command) {
            time_expressions.push(m.as_str().to_string());
        }
    }

    let details = EventDetails {
        title: TITLE
            .captures(command)
            .map(|c| c[1].trim().to_string()),
        location: LOCATION
            .captures(command)
            .map(|c| c[1].trim().to_string()),
        duration_minutes: DURATION.captures(command).and_then(|c| {
            let value: i64 = c[1].parse().ok()?;
            let unit = c[2].to_lowercase();
            Some(if unit.starts_with("hour") || unit == "hr" {
                value * 60
            } else {
                value
            })
        }),
    };

    debug!(?action, ?time_expressions, "parsed calendar intent");
    ParsedIntent {
        action,
        details,
        time_expressions,
        priority: "medium".to_string(),
        event_type: "meeting".to_string(),
        confidence: 0.7,
    }
}

/// A scheduled calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
}

/// In-memory calendar storage.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an event from a parsed intent.
    ///
    /// The default slot is today at 09:00. Time expressions shift it in the
    /// order they were extracted: "tomorrow", "next week" and "next monday"
    /// move the day (back to 09:00), day parts pin the hour (morning 9,
    /// afternoon 14, evening 18), and an explicit am/pm clock time wins
    /// last, with 12am meaning midnight. The default duration is one hour.
    pub fn create_from_intent(
        &mut self,
        intent: &ParsedIntent,
        now: DateTime<Utc>,
    ) -> CalendarEvent {
        let mut start = at_hour(now, 9);
        for expr in &intent.time_expressions {
            let expr = expr.to_lowercase();
            if expr.contains("tomorrow") {
                start = at_hour(now + Duration::days(1), 9);
            } else if expr.contains("next week") {
                start = at_hour(now + Duration::weeks(1), 9);
            } else if expr.contains("next monday") {
                let days_ahead = 7 - i64::from(now.weekday().num_days_from_monday());
                start = at_hour(now + Duration::days(days_ahead), 9);
            } else if expr.contains("morning") {
                start = at_hour(start, 9);
            } else if expr.contains("afternoon") {
                start = at_hour(start, 14);
            } else if expr.contains("evening") {
                start = at_hour(start, 18);
            }
        }
        let joined = intent.time_expressions.join(" ").to_lowercase();
        if let Some(cap) = CLOCK.captures(&joined) {
            if let Ok(hour) = cap[1].parse::<u32>() {
                let hour = match (hour, cap[2].eq_ignore_ascii_case("pm")) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, true) if h < 12 => h + 12,
                    (h, _) => h,
                };
                start = start.with_hour(hour % 24).unwrap_or(start);
            }
        }
        let minutes = intent.details.duration_minutes.unwrap_or(60);
        let event = CalendarEvent {
            id: Uuid::new_v4(),
            title: intent
                .details
                .title
                .clone()
                .unwrap_or_else(|| "Untitled meeting".to_string()),
            start,
            end: start + Duration::minutes(minutes),
            location: intent.details.location.clone(),
        };
        self.events.push(event.clone());
        event
    }

    /// Events starting within `[from, to)`, in insertion order.
    pub fn events_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<&CalendarEvent> {
        self.events
            .iter()
            .filter(|e| e.start >= from && e.start < to)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn at_hour(t: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    t.with_hour(hour)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn schedule_words_mean_create() {
        assert_eq!(
            parse_intent("schedule a meeting with Dana tomorrow at 3pm").action,
            CalendarAction::Create
        );
        assert_eq!(parse_intent("cancel my 1:1").action, CalendarAction::Delete);
        assert_eq!(
            parse_intent("change the standup time").action,
            CalendarAction::Update
        );
        assert_eq!(
            parse_intent("show my meetings this week").action,
            CalendarAction::Read
        );
    }

    #[test]
    fn extracts_time_expressions() {
        let intent = parse_intent("book a call with legal tomorrow morning at 9am");
        let joined = intent.time_expressions.join(" ");
        assert!(joined.contains("tomorrow"));
        assert!(joined.contains("morning"));
        assert!(joined.contains("9am"));
    }

    #[test]
    fn extracts_event_details() {
        let intent = parse_intent("schedule a meeting with Dana Reyes for 30 minutes");
        assert_eq!(intent.details.title.as_deref(), Some("Dana Reyes for 30 minutes"));
        assert_eq!(intent.details.duration_minutes, Some(30));
    }

    #[test]
    fn created_event_lands_tomorrow_at_the_spoken_hour() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 20, 0).unwrap();
        let intent = parse_intent("schedule a meeting with Dana tomorrow at 3pm");
        let mut store = EventStore::new();
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 11, 15, 0, 0).unwrap());
        assert_eq!(event.end - event.start, Duration::minutes(60));
        // The title regex captures up to the next comma or period, trailing
        // time words included.
        assert_eq!(event.title, "Dana tomorrow at 3pm");
    }

    #[test]
    fn day_parts_pin_the_hour() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 20, 0).unwrap();
        let mut store = EventStore::new();

        let intent = parse_intent("schedule a meeting with Dana tomorrow morning");
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 11, 9, 0, 0).unwrap());

        let intent = parse_intent("book a review next week in the afternoon");
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 17, 14, 0, 0).unwrap());
    }

    #[test]
    fn default_slot_is_today_at_nine() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 20, 0).unwrap();
        let mut store = EventStore::new();
        let event = store.create_from_intent(&parse_intent("schedule a sync"), now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
    }

    #[test]
    fn next_monday_lands_on_the_following_monday() {
        // 2025-03-10 is itself a Monday; "next monday" means a week out.
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        let mut store = EventStore::new();
        let intent = parse_intent("schedule a planning review next monday");
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 17, 9, 0, 0).unwrap());
    }

    #[test]
    fn twelve_am_is_midnight_and_twelve_pm_is_noon() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let mut store = EventStore::new();

        let intent = parse_intent("schedule a maintenance window tomorrow at 12am");
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap());

        let intent = parse_intent("schedule lunch tomorrow at 12pm");
        let event = store.create_from_intent(&intent, now);
        assert_eq!(event.start, Utc.with_ymd_and_hms(2025, 3, 11, 12, 0, 0).unwrap());
    }

    #[test]
    fn events_between_filters_by_start() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let mut store = EventStore::new();
        store.create_from_intent(&parse_intent("schedule a sync"), now);
        let hits = store.events_between(now, now + Duration::days(1));
        assert_eq!(hits.len(), 1);
        assert!(store.events_between(now + Duration::days(2), now + Duration::days(3)).is_empty());
    }
}
