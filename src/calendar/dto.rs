use serde::Deserialize;
use time::{Date, OffsetDateTime};

/// Body for event create and update (full-field replace).
#[derive(Debug, Deserialize)]
pub struct EventPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: OffsetDateTime,
    pub end_time: OffsetDateTime,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Optional date window for the event list. Bounds are inclusive and apply
/// to the event's start day.
#[derive(Debug, Deserialize)]
pub struct EventWindow {
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub end_date: Option<Date>,
}

fn default_category() -> String {
    "general".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_defaults_to_general() {
        let json = serde_json::json!({
            "title": "Standup",
            "start_time": time::macros::datetime!(2026-08-07 09:00 UTC),
            "end_time": time::macros::datetime!(2026-08-07 09:15 UTC),
        });
        let payload: EventPayload = serde_json::from_value(json).unwrap();
        assert_eq!(payload.category, "general");
        assert!(payload.location.is_none());
    }

    #[test]
    fn empty_window_is_unbounded() {
        let window: EventWindow = serde_json::from_str("{}").unwrap();
        assert!(window.start_date.is_none());
        assert!(window.end_date.is_none());
    }
}
