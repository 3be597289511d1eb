//! Legacy network resolver for devicename
//!
//! Before the device database was bundled, unknown devices were looked up in
//! per-codename JSON files published on a static file server. This crate keeps
//! that path available:
//!
//! - [`CatalogSource`] fetches the raw JSON for a codename ([`HttpCatalogSource`]
//!   over `ureq`)
//! - [`Connectivity`] reports whether fetching is worth trying
//! - [`LegacyResolver`] runs cache check, fetch, match and cache write, and
//!   degrades to a fallback record when anything on the network side fails
//!
//! Resolution is blocking; callers are expected to run it off the foreground
//! thread.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod connectivity;
pub mod resolver;
pub mod source;

pub use connectivity::{Connectivity, NetworkState, StaticConnectivity};
pub use resolver::{parse_catalog, LegacyResolver, ResolutionState};
pub use source::{CatalogSource, HttpCatalogSource};
