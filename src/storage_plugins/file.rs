// ABOUTME: File-backed storage - one JSON document per key under a data directory
// ABOUTME: Writes go to a temp file first and are renamed into place atomically

//! File-backed storage provider
//!
//! Each key maps to `<root>/<key>.json`. Writes land in a sibling temp file
//! and are renamed over the target, so a crash mid-write never leaves a
//! truncated blob behind; readers either see the previous document or the
//! new one.

use super::StorageProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Storage provider persisting each key as a JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (and create if missing) the backing directory
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub async fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("creating storage directory {}", root.display()))?;
        Ok(Self { root })
    }

    /// The backing directory
    #[must_use]
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Map a key to its on-disk path, sanitizing path-hostile characters
    fn path_for(&self, key: &str) -> PathBuf {
        let sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{sanitized}.json"))
    }
}

#[async_trait]
impl StorageProvider for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => {
                Err(anyhow::Error::from(error).context(format!("reading {}", path.display())))
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value)
            .await
            .with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &path)
            .await
            .with_context(|| format!("renaming {} into place", tmp.display()))?;

        debug!(key = %key, bytes = value.len(), "stored blob");
        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "File (JSON per key)"
    }
}
