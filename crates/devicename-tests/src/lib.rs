//! devicename integration test support
//!
//! Shared fixtures for the end-to-end tests in `tests/`.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Fixtures shared by the integration tests
pub mod test_utils;
