//! Database engine for Docstore
//!
//! This crate owns the record store and its configuration:
//! - Database: holds the store selected by configuration
//! - DatabaseConfig: `docstore.toml`-style settings
//! - DatabaseBuilder: fluent alternative to a config file
//!
//! There is no global instance. Every `Database` is an independent,
//! volatile repository; its contents are lost when the last handle drops.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;

pub use database::{Database, DatabaseBuilder, DatabaseConfig, StorageKind, CONFIG_FILE_NAME};
