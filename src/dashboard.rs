use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A line in the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    pub when: DateTime<Utc>,
}

/// Completion state of one training program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingProgress {
    pub name: String,
    pub percent: u8,
}

/// In-memory HR metrics backing the query and action commands.
///
/// This stands in for persisted data: it is replaced wholesale by update
/// calls and carries no invariants beyond its shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_employees: u32,
    pub open_positions: u32,
    pub avg_time_to_hire_days: u32,
    /// Percentage in `0..=100`.
    pub employee_satisfaction: u8,
    pub recent_activities: Vec<Activity>,
    pub training_progress: Vec<TrainingProgress>,
}

impl DashboardData {
    /// Sample metrics used until a real data source replaces them.
    pub fn sample() -> Self {
        Self {
            total_employees: 247,
            open_positions: 12,
            avg_time_to_hire_days: 23,
            employee_satisfaction: 87,
            recent_activities: vec![
                Activity {
                    description: "Sarah Chen joined the design team".into(),
                    when: Utc::now(),
                },
                Activity {
                    description: "Q3 engagement survey closed".into(),
                    when: Utc::now(),
                },
            ],
            training_progress: vec![
                TrainingProgress {
                    name: "Security awareness".into(),
                    percent: 92,
                },
                TrainingProgress {
                    name: "Manager essentials".into(),
                    percent: 64,
                },
            ],
        }
    }

    /// Record a new activity line at the head of the feed.
    pub fn record_activity(&mut self, description: impl Into<String>) {
        self.recent_activities.insert(
            0,
            Activity {
                description: description.into(),
                when: Utc::now(),
            },
        );
    }
}

impl Default for DashboardData {
    fn default() -> Self {
        Self::sample()
    }
}
