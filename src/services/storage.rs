use std::io;
use std::path::{Component, Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use chrono::Utc;
use tokio::fs::{self, File};

use crate::models::StoredFile;

/// Multipart field name uploads arrive under; doubles as the stored-name
/// prefix.
pub const UPLOAD_FIELD: &str = "file";

/// Disk-backed file store rooted at the uploads directory.
///
/// The directory is expected to exist already; it is never created here.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Storage {
        Storage { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persists one multipart temp file under a generated name.
    ///
    /// Names are `file-<millis><ext>`, so two uploads landing in the same
    /// millisecond collide and the later write wins.
    pub fn store(&self, file: TempFile) -> Result<StoredFile, io::Error> {
        let original_name = file.file_name.clone().unwrap_or_default();
        let name = generate_name(&original_name, Utc::now().timestamp_millis());
        let dest = self.root.join(&name);

        file.file.persist(&dest).map_err(|e| e.error)?;

        Ok(StoredFile {
            name,
            original_name,
            size: file.size,
            content_type: file
                .content_type
                .map(|m| m.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string()),
        })
    }

    /// Entry names of the storage directory, unfiltered.
    pub async fn list(&self) -> Result<Vec<String>, io::Error> {
        let mut entries = fs::read_dir(&self.root).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    /// Opens a stored file for streaming, with its byte length.
    pub async fn open(&self, name: &str) -> Option<(u64, File)> {
        open_in_dir(&self.root, name).await
    }
}

/// Opens `name` inside `dir`. `name` must be a single normal path component;
/// anything that could resolve outside the directory is treated as absent.
pub async fn open_in_dir(dir: &Path, name: &str) -> Option<(u64, File)> {
    if !is_plain_name(name) {
        return None;
    }

    let path = dir.join(name);
    let file = File::open(&path).await.ok()?;
    let meta = file.metadata().await.ok()?;
    if !meta.is_file() {
        return None;
    }
    Some((meta.len(), file))
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}

fn generate_name(original_name: &str, millis: i64) -> String {
    let ext = Path::new(original_name)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}-{}{}", UPLOAD_FIELD, millis, ext)
}
