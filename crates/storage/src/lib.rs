//! Storage layer for Docstore
//!
//! This crate implements the record stores behind the `Storage` trait:
//! - ShardedStore: DashMap, lock-striped (default)
//! - UnifiedStore: FxHashMap behind a single RwLock
//!
//! # Concurrency
//!
//! Both stores give per-key atomicity: a document is always written and
//! read as a whole. Neither offers whole-store snapshot isolation; scans see
//! a live view.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;
pub mod unified;

pub use sharded::ShardedStore;
pub use unified::UnifiedStore;
