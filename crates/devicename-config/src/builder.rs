//! Configuration builder for layered configuration loading

use crate::{Config, ConfigError, ConfigResult, CODENAME_PLACEHOLDER};
use config::{ConfigBuilder as ConfigBuilderInner, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Configuration builder for loading configuration from multiple sources
#[derive(Debug)]
pub struct ConfigBuilder {
    inner: ConfigBuilderInner<config::builder::DefaultState>,
    sources: Vec<ConfigSource>,
    env_separator: String,
}

#[derive(Debug, Clone)]
enum ConfigSource {
    File { path: PathBuf, format: FileFormat },
    Defaults,
    Environment { prefix: String },
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            inner: config::Config::builder(),
            sources: Vec::new(),
            env_separator: "__".to_string(),
        }
    }

    /// Add default configuration values
    pub fn add_defaults(mut self) -> Self {
        self.sources.push(ConfigSource::Defaults);
        self
    }

    /// Add a configuration file source; missing files are skipped
    pub fn add_source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = Self::detect_format(&path);
        self.sources.push(ConfigSource::File { path, format });
        self
    }

    /// Add environment variable source with prefix
    pub fn add_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.sources.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Set environment variable separator (default: "__")
    pub fn env_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.env_separator = separator.into();
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> ConfigResult<Config> {
        // Defaults are always the base layer
        let defaults_value = serde_yaml::to_value(Config::default())
            .map_err(|e| ConfigError::other(format!("Failed to serialize defaults: {}", e)))?;
        self.inner = self
            .inner
            .add_source(config::Config::try_from(&defaults_value)?);

        for source in &self.sources {
            match source {
                ConfigSource::File { path, format } => {
                    if path.exists() {
                        self.inner = self
                            .inner
                            .add_source(File::from(path.clone()).format(*format));
                    }
                }
                ConfigSource::Environment { prefix } => {
                    self.inner = self.inner.add_source(
                        Environment::with_prefix(prefix).separator(&self.env_separator),
                    );
                }
                ConfigSource::Defaults => {}
            }
        }

        let config = self.inner.build()?;
        let result: Config = config.try_deserialize()?;

        Self::validate(&result)?;

        Ok(result)
    }

    /// Try to build the configuration, returning defaults on error
    pub fn build_or_default(self) -> Config {
        self.build().unwrap_or_default()
    }

    /// Detect file format from extension
    fn detect_format(path: &Path) -> FileFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => FileFormat::Toml,
            Some("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }

    /// Validate the configuration
    pub fn validate(config: &Config) -> ConfigResult<()> {
        if config.database.schema_version == 0 {
            return Err(ConfigError::validation(
                "Database schema version must be at least 1",
            ));
        }

        if config.database.database_name.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "database.database_name",
                "must not be empty",
            ));
        }

        if !config.network.url_template.contains(CODENAME_PLACEHOLDER) {
            return Err(ConfigError::invalid_value(
                "network.url_template",
                format!("must contain {}", CODENAME_PLACEHOLDER),
            ));
        }

        let timeouts = &config.network.timeouts;
        if timeouts.connect_timeout.is_zero() || timeouts.read_timeout.is_zero() {
            return Err(ConfigError::validation(
                "Network timeouts must be greater than 0",
            ));
        }

        if let Some(capacity) = config.cache.max_entries {
            if capacity.get() == 0 {
                return Err(ConfigError::validation(
                    "Cache capacity must be greater than 0",
                ));
            }
        }

        if !["trace", "debug", "info", "warn", "error"].contains(&config.logging.level.as_str()) {
            return Err(ConfigError::validation(
                "Log level must be one of: trace, debug, info, warn, error",
            ));
        }

        Ok(())
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new()
            .suffix(&format!(".{}", extension))
            .tempfile()
            .unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().add_defaults().build().unwrap();
        assert!(config.catalog.enabled);
        assert!(config.database.enabled);
        assert!(!config.network.enabled);
        assert_eq!(config.database.database_name, "android-devices.db");
    }

    #[test]
    fn test_builder_yaml_file() {
        let file = temp_config(
            "yaml",
            r#"
network:
  enabled: true
cache:
  max_entries: 64
logging:
  level: debug
"#,
        );

        let config = ConfigBuilder::new()
            .add_defaults()
            .add_source_file(file.path())
            .build()
            .unwrap();

        assert!(config.network.enabled);
        assert_eq!(config.cache.max_entries.map(|c| c.get()), Some(64));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.database.schema_version, 1);
    }

    #[test]
    fn test_builder_toml_file() {
        let file = temp_config(
            "toml",
            r#"
[database]
schema_version = 2
"#,
        );

        let config = ConfigBuilder::new()
            .add_defaults()
            .add_source_file(file.path())
            .build()
            .unwrap();

        assert_eq!(config.database.schema_version, 2);
        assert!(config.catalog.enabled);
    }

    #[test]
    fn test_builder_rejects_template_without_placeholder() {
        let file = temp_config(
            "yaml",
            r#"
network:
  url_template: "https://example.com/devices.json"
"#,
        );

        let result = ConfigBuilder::new()
            .add_defaults()
            .add_source_file(file.path())
            .build();

        assert!(result.unwrap_err().to_string().contains("{codename}"));
    }

    #[test]
    fn test_builder_validation() {
        let file = temp_config(
            "yaml",
            r#"
database:
  schema_version: 0
"#,
        );

        let result = ConfigBuilder::new()
            .add_defaults()
            .add_source_file(file.path())
            .build();

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("schema version must be at least 1"));
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let config = ConfigBuilder::new()
            .add_defaults()
            .add_source_file("/nonexistent/devicename.yaml")
            .build()
            .unwrap();
        assert!(config.catalog.enabled);
    }
}
