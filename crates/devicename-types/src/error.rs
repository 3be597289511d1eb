//! Error types and handling for devicename
//!
//! Every resolver layer reports failures through [`Error`]. Callers decide how
//! to degrade by looking at [`Error::kind`] and [`Error::is_recoverable`]: a
//! recoverable error on the network path means "no match", while asset and
//! storage errors are surfaced.

use std::path::PathBuf;

// Serde is imported conditionally through cfg_attr

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Low severity - lookup degrades to the fallback name
    Low,
    /// Medium severity - operation may be retried
    Medium,
    /// High severity - operation should be aborted
    High,
}

/// Main error type for devicename operations
#[derive(thiserror::Error, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Bundled asset could not be found
    #[error("Asset not found: {path}")]
    AssetNotFound {
        /// Path to the missing asset
        path: PathBuf,
    },

    /// Bundled asset exists but cannot be unpacked or read
    #[error("Corrupt asset {path}: {message}")]
    AssetCorrupt {
        /// Path to the broken asset
        path: PathBuf,
        /// What went wrong while reading it
        message: String,
    },

    /// Database query or open failed
    #[error("Database error: {message}")]
    Database {
        /// Error message from the database layer
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Payload could not be parsed
    #[error("Parse error: {message}")]
    Parse {
        /// Error message describing the malformed input
        message: String,
    },

    /// Persistent key-value storage failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage issue
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// I/O related errors
    Io,
    /// Bundled asset errors
    Asset,
    /// Database errors
    Database,
    /// Network errors
    Network,
    /// Parse errors
    Parse,
    /// Storage errors
    Storage,
    /// Configuration errors
    Config,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::AssetNotFound { .. } | Self::AssetCorrupt { .. } => ErrorKind::Asset,
            Self::Database { .. } => ErrorKind::Database,
            Self::Network { .. } => ErrorKind::Network,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Config { .. } => ErrorKind::Config,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Get the error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::Medium,
            Self::AssetNotFound { .. } | Self::AssetCorrupt { .. } => ErrorSeverity::High,
            Self::Database { .. } => ErrorSeverity::High,
            Self::Network { .. } => ErrorSeverity::Medium,
            Self::Parse { .. } => ErrorSeverity::Low,
            Self::Storage { .. } => ErrorSeverity::High,
            Self::Config { .. } => ErrorSeverity::High,
            Self::Other { .. } => ErrorSeverity::Medium,
        }
    }

    /// Check if this error is recoverable
    ///
    /// Recoverable errors are the ones a resolver may swallow and treat as
    /// "no match".
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { message } => {
                message.contains("Interrupted")
                    || message.contains("WouldBlock")
                    || message.contains("TimedOut")
                    || message.contains("timed out")
            }
            Self::Network { .. } | Self::Parse { .. } | Self::Other { .. } => true,
            Self::AssetNotFound { .. }
            | Self::AssetCorrupt { .. }
            | Self::Database { .. }
            | Self::Storage { .. }
            | Self::Config { .. } => false,
        }
    }

    /// Check if this error should trigger a retry
    pub fn should_retry(&self) -> bool {
        self.is_recoverable() && self.severity() <= ErrorSeverity::Medium
    }

    /// Create a new asset-not-found error
    pub fn asset_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    /// Create a new corrupt-asset error
    pub fn asset_corrupt<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::AssetCorrupt {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_error_kind_consistency(message in ".*") {
            let errors = vec![
                Error::Io { message: message.clone() },
                Error::Database { message: message.clone() },
                Error::Network { message: message.clone() },
                Error::Parse { message: message.clone() },
                Error::Storage { message: message.clone() },
                Error::Config { message: message.clone() },
                Error::Other { message: message.clone() },
            ];

            for error in errors {
                let kind = error.kind();
                match error {
                    Error::Io { .. } => prop_assert_eq!(kind, ErrorKind::Io),
                    Error::Database { .. } => prop_assert_eq!(kind, ErrorKind::Database),
                    Error::Network { .. } => prop_assert_eq!(kind, ErrorKind::Network),
                    Error::Parse { .. } => prop_assert_eq!(kind, ErrorKind::Parse),
                    Error::Storage { .. } => prop_assert_eq!(kind, ErrorKind::Storage),
                    Error::Config { .. } => prop_assert_eq!(kind, ErrorKind::Config),
                    Error::Other { .. } => prop_assert_eq!(kind, ErrorKind::Other),
                    _ => {}
                }
            }
        }

        #[test]
        fn test_should_retry_implies_recoverable(message in ".*") {
            for error in [Error::network(message.clone()), Error::storage(message.clone())] {
                if error.should_retry() {
                    prop_assert!(error.is_recoverable());
                    prop_assert!(error.severity() <= ErrorSeverity::Medium);
                }
            }
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "android-devices.db");
        let error = Error::from(io_error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("android-devices.db"));
    }

    #[test]
    fn test_network_and_parse_errors_degrade() {
        assert!(Error::network("connection refused").is_recoverable());
        assert!(Error::parse("expected `[`").is_recoverable());
        assert!(!Error::storage("read-only file system").is_recoverable());
        assert!(!Error::asset_not_found("android-devices.zip").is_recoverable());
    }

    #[test]
    fn test_asset_error_display() {
        let error = Error::asset_not_found("assets/android-devices.zip");
        assert_eq!(error.kind(), ErrorKind::Asset);
        assert_eq!(
            error.to_string(),
            "Asset not found: assets/android-devices.zip"
        );
    }
}
