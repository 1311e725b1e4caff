// ABOUTME: In-memory storage provider backed by a concurrent map
// ABOUTME: Ephemeral backend for tests and throwaway runs, with a write counter

//! In-memory storage provider
//!
//! Keeps blobs in a process-local concurrent map. Used by tests (where the
//! write counter makes debounce coalescing observable) and for ephemeral
//! runs that should not touch the filesystem.

use super::StorageProvider;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Storage provider holding all blobs in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
    writes: Arc<AtomicU64>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `set` calls observed since creation
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn backend_info(&self) -> &'static str {
        "Memory (ephemeral)"
    }
}
