// Documentation store for reading and writing the persisted set.
// Handles JSON serialization and atomic replacement on disk.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{DocsError, Result};
use crate::model::DocumentationSet;

/// Durable persistence for one documentation set under a stable path.
///
/// Absence or corruption of stored data never crashes the caller: `load`
/// reports a typed outcome and leaves the decision upstream.
#[derive(Debug, Clone)]
pub struct DocStore {
    path: PathBuf,
}

impl DocStore {
    /// Create a store persisting to the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the platform default cache location.
    pub fn at_default_location() -> Result<Self> {
        let path = super::paths::props_cache_path().ok_or(DocsError::NoCacheDir)?;
        Ok(Self::new(path))
    }

    /// Path of the persisted cache file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the persisted documentation set.
    ///
    /// A missing file is `Ok(None)`; an unreadable or unparseable file is a
    /// typed error. No default set is fabricated on failure.
    pub async fn load(&self) -> Result<Option<DocumentationSet>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(DocsError::Storage(err)),
        };
        let set: DocumentationSet = serde_json::from_str(&contents)?;
        Ok(Some(set))
    }

    /// Serialize and persist the full set, replacing any previous content.
    ///
    /// The payload is written to a temp file, synced, and renamed into
    /// place, so a crash mid-write cannot leave a truncated file that
    /// `load` would accept.
    pub async fn save(&self, set: &DocumentationSet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(set)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
        fs::rename(&temp_path, &self.path).await?;

        Ok(())
    }
}
