// ABOUTME: Storage factory and backend selection from connection URLs
// ABOUTME: Unified interface over file-backed and in-memory stores with runtime selection

//! Storage factory for creating storage providers
//!
//! This module provides automatic backend detection and creation based on
//! connection strings (`file:<dir>` or `memory:`).

use super::file::FileStorage;
use super::memory::MemoryStorage;
use super::StorageProvider;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Supported storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// JSON-file-per-key directory store
    File,
    /// Process-local map, for tests and ephemeral runs
    Memory,
}

/// Storage instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Storage {
    /// File-backed storage
    File(FileStorage),
    /// In-memory storage
    Memory(MemoryStorage),
}

impl Storage {
    /// Get the storage type enum
    #[must_use]
    pub const fn storage_type(&self) -> StorageType {
        match self {
            Self::File(_) => StorageType::File,
            Self::Memory(_) => StorageType::Memory,
        }
    }

    /// Create a new storage instance based on the connection string
    ///
    /// # Errors
    ///
    /// Returns an error if the URL format is unsupported or the file
    /// backend's directory cannot be created.
    pub async fn new(storage_url: &str) -> Result<Self> {
        debug!("Detecting storage type from URL: {}", storage_url);
        let storage_type = detect_storage_type(storage_url)?;
        info!("Detected storage type: {:?}", storage_type);

        match storage_type {
            StorageType::File => {
                let root = storage_url
                    .strip_prefix("file:")
                    .map(PathBuf::from)
                    .ok_or_else(|| anyhow!("Malformed file storage URL: {storage_url}"))?;
                let storage = FileStorage::new(root).await?;
                info!("File storage initialized");
                Ok(Self::File(storage))
            }
            StorageType::Memory => {
                info!("Initializing in-memory storage");
                Ok(Self::Memory(MemoryStorage::new()))
            }
        }
    }
}

/// Automatically detect the storage backend from a connection string
///
/// # Errors
///
/// Returns an error if the URL does not start with `file:` or `memory:`.
pub fn detect_storage_type(storage_url: &str) -> Result<StorageType> {
    if storage_url.starts_with("file:") {
        Ok(StorageType::File)
    } else if storage_url.starts_with("memory:") {
        Ok(StorageType::Memory)
    } else {
        Err(anyhow!(
            "Unsupported storage URL format: {storage_url}. \
             Supported formats: file:path/to/dir, memory:"
        ))
    }
}

// Implement StorageProvider for the enum by delegating to the appropriate implementation
#[async_trait]
impl StorageProvider for Storage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::File(storage) => storage.get(key).await,
            Self::Memory(storage) => storage.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::File(storage) => storage.set(key, value).await,
            Self::Memory(storage) => storage.set(key, value).await,
        }
    }

    fn backend_info(&self) -> &'static str {
        match self {
            Self::File(_) => "File (JSON per key)",
            Self::Memory(_) => "Memory (ephemeral)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_storage_type() {
        assert_eq!(
            detect_storage_type("file:/tmp/macrolog").unwrap(),
            StorageType::File
        );
        assert_eq!(detect_storage_type("memory:").unwrap(), StorageType::Memory);
        assert!(detect_storage_type("postgres://nope").is_err());
    }
}
