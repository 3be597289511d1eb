//! Configuration types for devicename
//!
//! Type-safe configuration values with validation and serialization support.

// Serde is imported conditionally through cfg_attr
use std::time::Duration;

/// Upper bound on the number of entries the lookup cache keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheCapacity(usize);

impl CacheCapacity {
    /// Minimum capacity
    pub const MIN: usize = 1;
    /// Maximum capacity
    pub const MAX: usize = 1_000_000;

    /// Create a new cache capacity with validation
    pub fn new(entries: usize) -> Result<Self, String> {
        if entries < Self::MIN {
            Err(format!(
                "Cache capacity {} is below minimum {}",
                entries,
                Self::MIN
            ))
        } else if entries > Self::MAX {
            Err(format!(
                "Cache capacity {} exceeds maximum {}",
                entries,
                Self::MAX
            ))
        } else {
            Ok(Self(entries))
        }
    }

    /// Get the capacity value
    pub fn get(self) -> usize {
        self.0
    }
}

/// Timeout configuration for remote lookups
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeoutConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Read timeout
    pub read_timeout: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(10),
        }
    }
}
