//! Remote per-codename catalog files

use devicename_config::{NetworkConfig, CODENAME_PLACEHOLDER};
use devicename_types::{Error, Result};
use tracing::debug;

/// Fetches the published JSON document for a codename
pub trait CatalogSource: Send + Sync {
    /// Raw body of the document for `codename`
    fn fetch(&self, codename: &str) -> Result<String>;
}

/// [`CatalogSource`] over HTTP
pub struct HttpCatalogSource {
    agent: ureq::Agent,
    url_template: String,
}

impl HttpCatalogSource {
    /// Create a source from network settings
    pub fn new(config: &NetworkConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(config.timeouts.connect_timeout)
            .timeout_read(config.timeouts.read_timeout)
            .build();

        Self {
            agent,
            url_template: config.url_template.clone(),
        }
    }

    /// URL of the document for `codename`
    ///
    /// The codename is lowercased; the published files use lowercase names.
    pub fn url_for(&self, codename: &str) -> String {
        self.url_template
            .replace(CODENAME_PLACEHOLDER, &codename.to_lowercase())
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch(&self, codename: &str) -> Result<String> {
        let url = self.url_for(codename);
        debug!("Fetching {}", url);

        match self.agent.get(&url).call() {
            Ok(response) if response.status() == 200 => response
                .into_string()
                .map_err(|e| Error::network(format!("Failed to read {}: {}", url, e))),
            Ok(response) => Err(Error::network(format!(
                "{} returned status {}",
                url,
                response.status()
            ))),
            Err(ureq::Error::Status(code, _)) => Err(Error::network(format!(
                "{} returned status {}",
                url, code
            ))),
            Err(e) => Err(Error::network(format!("Request to {} failed: {}", url, e))),
        }
    }
}

impl std::fmt::Debug for HttpCatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCatalogSource")
            .field("url_template", &self.url_template)
            .finish_non_exhaustive()
    }
}
