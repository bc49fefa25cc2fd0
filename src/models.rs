use serde::Serialize;

/// Outcome of persisting one uploaded file to the storage directory.
#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    pub name: String,
    pub original_name: String,
    pub size: usize,
    pub content_type: String,
}
