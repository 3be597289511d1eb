//! Where the supported devices CSV comes from

use devicename_types::{Error, Result, TimeoutConfig};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

/// Largest CSV body accepted from the network
pub const MAX_DOWNLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// Input of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    /// Download over HTTP(S)
    Url(String),
    /// Read a local file
    File(PathBuf),
    /// Bytes already in memory
    Bytes(Vec<u8>),
}

impl CsvSource {
    /// Pick [`CsvSource::Url`] for `http(s)://` locations, else a file path
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    /// Raw bytes of the document
    pub fn load(&self, timeouts: &TimeoutConfig) -> Result<Vec<u8>> {
        match self {
            Self::Url(url) => download(url, timeouts),
            Self::File(path) => {
                debug!("Reading {}", path.display());
                fs::read(path).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        Error::asset_not_found(path)
                    } else {
                        e.into()
                    }
                })
            }
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

fn download(url: &str, timeouts: &TimeoutConfig) -> Result<Vec<u8>> {
    info!("Downloading {}", url);
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(timeouts.connect_timeout)
        .timeout_read(timeouts.read_timeout)
        .build();

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(Error::network(format!("{} returned status {}", url, code)))
        }
        Err(e) => return Err(Error::network(format!("Request to {} failed: {}", url, e))),
    };

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_DOWNLOAD_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::network(format!("Failed to read {}: {}", url, e)))?;
    debug!("Downloaded {} bytes", bytes.len());
    Ok(bytes)
}
