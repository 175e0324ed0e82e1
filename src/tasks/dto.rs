use serde::Deserialize;
use time::Date;

/// Body for task create and update. Updates are a full-field replace, so
/// both operations share one payload; omitted optional fields fall back to
/// the documented defaults.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<Date>,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_priority() -> String {
    "medium".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let payload: TaskPayload = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.priority, "medium");
        assert!(!payload.completed);
        assert!(payload.description.is_none());
        assert!(payload.due_date.is_none());
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let payload: TaskPayload = serde_json::from_str(
            r#"{"title":"Ship release","priority":"high","completed":true}"#,
        )
        .unwrap();
        assert_eq!(payload.priority, "high");
        assert!(payload.completed);
    }
}
