use serde::Deserialize;

/// Body for profile update (full replace of the mutable field).
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub full_name: String,
}
