use serde::Serialize;
use sqlx::FromRow;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CompletionCounts {
    pub total: i64,
    pub completed: i64,
}

/// Per-resource totals shown on the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub tasks: CompletionCounts,
    pub goals: CompletionCounts,
    pub habits: i64,
    pub notes: i64,
    pub events: i64,
    pub files: i64,
}

/// One day of task activity inside the trailing 30-day window. Completed
/// counts rows of that day's cohort currently marked done.
#[derive(Debug, Serialize, FromRow)]
pub struct DailyTaskActivity {
    pub day: Date,
    pub created: i64,
    pub completed: i64,
}

#[derive(Debug, Serialize)]
pub struct TaskAnalytics {
    pub total: i64,
    pub completed: i64,
    pub completion_rate: f64,
    pub per_day: Vec<DailyTaskActivity>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct GoalStatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct HabitStats {
    pub habit_id: Uuid,
    pub name: String,
    pub entries: i64,
    pub average_count: Option<f64>,
}

pub fn completion_rate(total: i64, completed: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_rate_of_empty_set_is_zero() {
        assert_eq!(completion_rate(0, 0), 0.0);
    }

    #[test]
    fn completion_rate_is_a_fraction() {
        assert_eq!(completion_rate(4, 1), 0.25);
        assert_eq!(completion_rate(3, 3), 1.0);
    }
}
