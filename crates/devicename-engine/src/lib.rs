//! Layered device name resolution for devicename
//!
//! This crate composes the resolver layers into a single entry point:
//!
//! - **Static table**: compiled-in popular devices, no I/O
//! - **Database**: the bundled SQLite snapshot, extracted on first use
//! - **Network**: the legacy per-codename catalog with a persistent cache,
//!   opt-in through `network.enabled`
//!
//! Each layer is consulted in that order until one produces a market name;
//! otherwise the caller's fallback is returned unchanged.
//!
//! # Examples
//!
//! ```rust,no_run
//! use devicename_config::Config;
//! use devicename_engine::DeviceNames;
//! use devicename_types::CurrentDevice;
//!
//! let current = CurrentDevice::new("samsung", "zerolte", "SM-G925I");
//! let names = DeviceNames::with_config(Config::default(), current)?;
//!
//! let name = names.resolve(Some("clark"), None, "Unknown")?;
//! assert_eq!(name, "Moto X Style");
//! # Ok::<(), devicename_types::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod dispatch;
pub mod engine;
pub mod request;

pub use dispatch::{ForegroundLoop, MainThread, Task};
pub use engine::{DeviceNames, DeviceNamesBuilder};
pub use request::Request;
