use serde::Deserialize;
use time::Date;

/// Body for goal create and update (full-field replace). The UI clamps
/// progress increments to [0,100] before calling; the server stores what it
/// is given.
#[derive(Debug, Deserialize)]
pub struct GoalPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_target")]
    pub target_value: i32,
    #[serde(default)]
    pub current_value: i32,
    #[serde(default)]
    pub deadline: Option<Date>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_target() -> i32 {
    100
}

fn default_category() -> String {
    "personal".into()
}

fn default_status() -> String {
    "active".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let payload: GoalPayload = serde_json::from_str(r#"{"title":"Read 12 books"}"#).unwrap();
        assert_eq!(payload.category, "personal");
        assert_eq!(payload.status, "active");
        assert_eq!(payload.target_value, 100);
        assert_eq!(payload.current_value, 0);
        assert!(payload.deadline.is_none());
    }
}
