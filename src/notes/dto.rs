use serde::Deserialize;

/// Body for note create and update (full-field replace).
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let payload: NotePayload = serde_json::from_str(r#"{"title":"Scratch"}"#).unwrap();
        assert_eq!(payload.content, "");
        assert!(payload.category.is_none());
        assert!(payload.tags.is_empty());
    }

    #[test]
    fn tags_keep_order() {
        let payload: NotePayload =
            serde_json::from_str(r#"{"title":"T","tags":["b","a","c"]}"#).unwrap();
        assert_eq!(payload.tags, vec!["b", "a", "c"]);
    }
}
