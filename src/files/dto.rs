use serde::Deserialize;

/// Body for registering file metadata. Binary content lives elsewhere; the
/// row only keeps a reference to it.
#[derive(Debug, Deserialize)]
pub struct FilePayload {
    pub name: String,
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
    #[serde(default)]
    pub size: i64,
    pub content_ref: String,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_mime_type() -> String {
    "application/octet-stream".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_gets_defaults() {
        let payload: FilePayload =
            serde_json::from_str(r#"{"name":"notes.pdf","content_ref":"blob:abc"}"#).unwrap();
        assert_eq!(payload.mime_type, "application/octet-stream");
        assert_eq!(payload.size, 0);
        assert!(payload.category.is_none());
    }
}
