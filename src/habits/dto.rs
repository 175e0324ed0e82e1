use serde::Deserialize;
use time::Date;

/// Body for habit create and update (full-field replace).
#[derive(Debug, Deserialize)]
pub struct HabitPayload {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_frequency")]
    pub frequency: String,
    #[serde(default = "default_target_count")]
    pub target_count: i32,
}

/// Body for tracking a habit on one date. Tracking the same date again
/// overwrites the stored count.
#[derive(Debug, Deserialize)]
pub struct TrackRequest {
    pub date: Date,
    #[serde(default = "default_count")]
    pub count: i32,
}

fn default_frequency() -> String {
    "daily".into()
}

fn default_target_count() -> i32 {
    1
}

fn default_count() -> i32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let payload: HabitPayload = serde_json::from_str(r#"{"name":"Stretch"}"#).unwrap();
        assert_eq!(payload.frequency, "daily");
        assert_eq!(payload.target_count, 1);
    }

    #[test]
    fn track_count_defaults_to_one() {
        let req: TrackRequest = serde_json::from_str(r#"{"date":"2026-08-07"}"#).unwrap();
        assert_eq!(req.count, 1);
    }
}
