//! Core type system and error handling for devicename
//!
//! This crate provides the foundational types shared by every resolver layer:
//!
//! - **Error handling**: Structured error types with severity levels
//! - **Core types**: Device records, lookup queries and resolution results
//! - **Traits**: The lookup seam implemented by each resolver layer
//! - **Configuration**: Validated configuration values
//!
//! # Features
//!
//! - `std` (default): Enable standard library features
//! - `serde`: Enable serialization support
//!
//! # Examples
//!
//! ```rust
//! use devicename_types::{capitalize, DeviceInfo};
//!
//! let info = DeviceInfo::unknown("zerolte", "sm-g925i");
//! assert_eq!(info.name(), "Sm-g925i");
//! assert_eq!(capitalize("galaxy s6 edge"), "Galaxy S6 Edge");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod text;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{CacheCapacity, TimeoutConfig};
pub use error::{Error, ErrorKind, ErrorSeverity};
pub use result::Result;
pub use text::capitalize;
pub use traits::DeviceLookup;
pub use types::*;
