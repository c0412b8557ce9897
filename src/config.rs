//! Configuration loading
//!
//! Configuration is a TOML file describing the Azure DevOps integrations and
//! the processor options:
//!
//! ```toml
//! [[integrations.azure]]
//! host = "example.com"
//! credentials = [{ personalAccessToken = "..." }]
//!
//! [processor]
//! kinds = ["API", "Component"]
//! ```
//!
//! Every section is optional. Sections owned by other tools (top-level
//! tables, integrations other than `azure`) are ignored. Inside the
//! `integrations.azure` entries and the `processor` table, unknown keys and
//! values of the wrong shape are rejected at load time with a
//! [`ConfigError`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{AllowedKinds, DEFAULT_HOST, HostRegistry};
use crate::core::services::ProcessorOptions;
use crate::paths;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Source-control integrations
    #[serde(default)]
    pub integrations: IntegrationsConfig,

    /// Annotator options
    #[serde(default)]
    pub processor: ProcessorConfig,
}

/// Source-control integrations
///
/// Integrations other than `azure` belong to other tools and are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntegrationsConfig {
    /// Azure DevOps instances
    #[serde(default)]
    pub azure: Vec<AzureIntegrationConfig>,
}

/// One Azure DevOps instance
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AzureIntegrationConfig {
    /// Instance host, e.g. `example.com`; `dev.azure.com` when absent
    #[serde(default)]
    pub host: Option<String>,

    /// Credentials for the instance; never used for matching
    #[serde(default)]
    pub credentials: Option<toml::Value>,
}

/// Annotator options
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessorConfig {
    /// Entity kinds to annotate; every kind when absent
    #[serde(default)]
    pub kinds: Option<Vec<String>>,
}

impl AzureIntegrationConfig {
    /// The configured host, or `dev.azure.com` when none is given
    #[must_use]
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}

impl Config {
    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        log::debug!(
            "loaded config from {} ({} azure integration(s))",
            path.display(),
            config.integrations.azure.len()
        );
        Ok(config)
    }

    /// Load configuration from `path`, or from the default location
    ///
    /// An explicitly given path must exist. When no path is given the
    /// default location is used if it exists, otherwise the empty
    /// configuration.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = paths::config_file();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            log::debug!("no config at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    /// Build the host registry: `dev.azure.com` plus every configured host
    #[must_use]
    pub fn host_registry(&self) -> HostRegistry {
        HostRegistry::from_hosts(self.integrations.azure.iter().map(AzureIntegrationConfig::host))
    }

    /// Build the processor options
    #[must_use]
    pub fn processor_options(&self) -> ProcessorOptions {
        ProcessorOptions {
            kinds: AllowedKinds::from(self.processor.kinds.clone()),
        }
    }
}
