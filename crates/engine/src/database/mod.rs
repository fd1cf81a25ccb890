//! Database struct and open logic
//!
//! The Database owns the record store chosen by its [`DatabaseConfig`] and
//! hands it out as `Arc<dyn Storage>`. Primitives hold an `Arc<Database>`
//! and never keep state of their own.

mod builder;
pub mod config;

pub use builder::DatabaseBuilder;
pub use config::{DatabaseConfig, StorageKind, CONFIG_FILE_NAME};

use std::fmt;
use std::sync::Arc;

use docstore_core::{Result, Storage};
use docstore_storage::{ShardedStore, UnifiedStore};
use tracing::{info, warn};

/// Volatile document database
///
/// # Example
///
/// ```
/// use docstore_engine::Database;
///
/// let db = Database::ephemeral();
/// assert!(db.storage().is_empty());
/// ```
pub struct Database {
    storage: Arc<dyn Storage>,
    config: DatabaseConfig,
}

impl Database {
    /// Open a database with default settings (sharded storage)
    pub fn ephemeral() -> Arc<Self> {
        let config = DatabaseConfig::default();
        info!(target: "docstore::engine", storage = %config.storage, "Database opened");
        Arc::new(Self {
            storage: Arc::new(ShardedStore::new()),
            config,
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Open a database from a validated config
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn from_config(config: DatabaseConfig) -> Result<Arc<Self>> {
        config.validate()?;
        let kind = config.storage_kind()?;
        let capacity = config.initial_capacity;

        let storage: Arc<dyn Storage> = match (kind, config.shard_amount) {
            (StorageKind::Sharded, Some(shards)) => {
                Arc::new(ShardedStore::with_capacity_and_shard_amount(capacity, shards))
            }
            (StorageKind::Sharded, None) => Arc::new(ShardedStore::with_capacity(capacity)),
            (StorageKind::Unified, shards) => {
                if shards.is_some() {
                    warn!(
                        target: "docstore::engine",
                        "shard_amount is ignored for unified storage"
                    );
                }
                Arc::new(UnifiedStore::with_capacity(capacity))
            }
        };

        info!(
            target: "docstore::engine",
            storage = kind.as_str(),
            capacity,
            shard_amount = ?config.shard_amount,
            "Database opened"
        );

        Ok(Arc::new(Self { storage, config }))
    }

    /// The record store
    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// The config this database was opened with
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("config", &self.config)
            .field("documents", &self.storage.len())
            .finish()
    }
}
