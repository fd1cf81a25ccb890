//! Database configuration via `docstore.toml`
//!
//! Nothing is persisted by the database itself, so the file is purely an
//! input: an embedding service can ship one next to its own config and load
//! it with [`DatabaseConfig::from_file`].

use serde::{Deserialize, Serialize};
use std::path::Path;

use docstore_core::{Error, Result};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "docstore.toml";

/// Record store implementation selected by `storage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Lock-striped DashMap (`ShardedStore`)
    Sharded,
    /// Single RwLock around an FxHashMap (`UnifiedStore`)
    Unified,
}

impl StorageKind {
    /// Config-file spelling of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Sharded => "sharded",
            StorageKind::Unified => "unified",
        }
    }
}

/// Database configuration loaded from `docstore.toml`.
///
/// # Example
///
/// ```toml
/// storage = "sharded"
/// initial_capacity = 1024
/// shard_amount = 32
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store implementation: `"sharded"` or `"unified"`.
    #[serde(default = "default_storage_str")]
    pub storage: String,
    /// Documents to pre-allocate room for.
    #[serde(default)]
    pub initial_capacity: usize,
    /// DashMap shard amount; only meaningful for `"sharded"`.
    /// Must be a power of two greater than one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shard_amount: Option<usize>,
}

fn default_storage_str() -> String {
    StorageKind::Sharded.as_str().to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            storage: default_storage_str(),
            initial_capacity: 0,
            shard_amount: None,
        }
    }
}

impl DatabaseConfig {
    /// Parse the storage string into a `StorageKind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"sharded"` or `"unified"`.
    pub fn storage_kind(&self) -> Result<StorageKind> {
        match self.storage.as_str() {
            "sharded" => Ok(StorageKind::Sharded),
            "unified" => Ok(StorageKind::Unified),
            other => Err(Error::invalid_config(format!(
                "Invalid storage '{}'. Expected \"sharded\" or \"unified\".",
                other
            ))),
        }
    }

    /// Check every field can be honoured.
    pub fn validate(&self) -> Result<()> {
        self.storage_kind()?;
        if let Some(shards) = self.shard_amount {
            if shards <= 1 || !shards.is_power_of_two() {
                return Err(Error::invalid_config(format!(
                    "shard_amount must be a power of two greater than 1, got {}",
                    shards
                )));
            }
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Docstore configuration
#
# Record store: "sharded" (default) or "unified"
#   "sharded" = lock-striped map, writers to different shards never contend
#   "unified" = one read/write lock around the whole map
storage = "sharded"

# Documents to pre-allocate room for (default: 0)
initial_capacity = 0

# Shard amount for "sharded" storage, power of two > 1.
# Omit to use the default (4 x available parallelism).
# shard_amount = 16
"#
    }

    /// Parse and validate config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DatabaseConfig = toml::from_str(content)
            .map_err(|e| Error::Serialization(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or holds
    /// a value that fails [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Serialization(msg) => {
                Error::Serialization(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Serialize this config to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize config: {}", e)))
    }
}
