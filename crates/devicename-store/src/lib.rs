//! Persistent storage for devicename
//!
//! This crate provides the small amount of durable state the resolvers need:
//!
//! - **Key-value stores**: a JSON-file [`PreferenceStore`] and an in-memory
//!   [`MemoryStore`] behind the [`KeyValueStore`] trait
//! - **Lookup cache**: [`DeviceCache`], which keeps resolved devices under
//!   `codename:model` keys with optional LRU eviction
//! - **Path locks**: process-wide mutual exclusion keyed by file path, used to
//!   guard first-time extraction and cache population

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod kv;
pub mod lock;
pub mod preferences;

pub use cache::{CacheStats, DeviceCache, SharedDeviceCache};
pub use kv::{KeyValueStore, MemoryStore};
pub use lock::path_lock;
pub use preferences::PreferenceStore;
