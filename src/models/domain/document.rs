use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque reference to a file the model gateway has ingested. Owned by one
/// quiz session and replaced wholesale on re-upload, never updated in place.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentHandle {
    pub name: String,
    pub uri: String,
    pub display_name: String,
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl DocumentHandle {
    /// Textual form interpolated into prompts. Grounding comes from the
    /// file part attached to the same request, not from this string.
    pub fn reference(&self) -> &str {
        &self.uri
    }
}
