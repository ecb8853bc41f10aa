use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::error::{ProductError, ProductResult};

pub const DEFAULT_UPLOAD_DIR: &str = "/static";

/// Extensions accepted by [`ImageStore::save`], compared case-sensitively.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Writes uploaded product images into a single directory.
///
/// Stored names are `YYYYMMDD_HHMMSS_<original name>`. Two uploads of the same
/// name within one second overwrite each other.
#[derive(Debug, Clone)]
pub struct ImageStore {
    upload_dir: PathBuf,
}

impl ImageStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Check the extension, create the directory if needed, write the bytes.
    /// Returns the path written to.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> ProductResult<String> {
        // client-supplied names may carry directories; keep the last component only
        let basename = Path::new(filename)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ProductError::InvalidImage(filename.to_string()))?;

        if !has_allowed_extension(basename) {
            return Err(ProductError::InvalidImage(filename.to_string()));
        }

        tokio::fs::create_dir_all(&self.upload_dir).await?;

        let stored = format!("{}{}", Utc::now().format("%Y%m%d_%H%M%S_"), basename);
        let path = self.upload_dir.join(stored);
        tokio::fs::write(&path, bytes).await?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "Saved product image");
        Ok(path.to_string_lossy().into_owned())
    }
}

/// Everything after the last dot counts as the extension, so a bare `.png`
/// is accepted.
fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext))
}
