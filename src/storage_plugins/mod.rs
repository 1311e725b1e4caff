// ABOUTME: Storage abstraction layer for the macrolog engine
// ABOUTME: Plugin architecture for persistence with file-backed and in-memory backends

//! Storage abstraction layer
//!
//! Persistence is a string-keyed blob store with exactly two operations.
//! The state layer talks only to [`StorageProvider`]; nothing above this
//! module branches on backend identity, so the backing store can be swapped
//! without touching business logic.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod file;
pub mod memory;

pub use factory::{detect_storage_type, Storage, StorageType};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the state layer.
#[async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    /// Read the blob stored under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Durably store `value` under `key`, replacing any previous blob
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Descriptive string for the current backend
    fn backend_info(&self) -> &'static str;
}
