//! Result type alias for devicename operations

use crate::Error;

/// Result type alias for devicename operations
pub type Result<T> = std::result::Result<T, Error>;
