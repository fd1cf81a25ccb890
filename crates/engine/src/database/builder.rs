//! Database builder for fluent configuration
//!
//! Mirrors every knob in [`DatabaseConfig`] so callers that do not want a
//! config file can still pick the store implementation and sizing.

use std::sync::Arc;

use docstore_core::Result;

use super::{Database, DatabaseConfig, StorageKind};

/// Builder for Database configuration
///
/// ```
/// use docstore_engine::Database;
///
/// let db = Database::builder()
///     .sharded()
///     .capacity(1024)
///     .shard_amount(16)
///     .open()
///     .unwrap();
/// assert!(db.storage().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatabaseBuilder {
    config: DatabaseConfig,
}

impl DatabaseBuilder {
    /// Create new builder with defaults (sharded storage, no pre-allocation)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config
    pub fn from_config(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Select the store implementation
    pub fn storage(mut self, kind: StorageKind) -> Self {
        self.config.storage = kind.as_str().to_string();
        self
    }

    /// Use the lock-striped `ShardedStore` (default)
    pub fn sharded(self) -> Self {
        self.storage(StorageKind::Sharded)
    }

    /// Use the single-lock `UnifiedStore`
    pub fn unified(self) -> Self {
        self.storage(StorageKind::Unified)
    }

    /// Pre-allocate room for `capacity` documents
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the shard amount for sharded storage (power of two > 1)
    pub fn shard_amount(mut self, shards: usize) -> Self {
        self.config.shard_amount = Some(shards);
        self
    }

    /// Open the database
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the collected settings fail validation.
    pub fn open(self) -> Result<Arc<Database>> {
        Database::from_config(self.config)
    }
}
