//! Service configuration with documented constants
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then the `LOL_API_URL` environment variable.

use crate::core::error::{Result, SimError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Base URL used when neither the config file nor the environment names one
pub const DEFAULT_BASE_URL: &str = "https://1tier.xyz";

/// Environment variable selecting the simulation service base URL
pub const BASE_URL_ENV: &str = "LOL_API_URL";

/// Sub-path of the match simulation endpoint, appended to the base URL
pub const SIMULATION_PATH: &str = "/vs4";

/// Upper bound on a single simulation call, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how long to talk to the remote simulation service
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the simulation service, without the `/vs4` sub-path
    pub base_url: String,

    /// Wait limit for one outbound call
    ///
    /// Covers connect, send, and reading the body. Exceeding it surfaces as
    /// a transport error for that call only.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// On-disk shape of the optional TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ServiceConfig {
    /// Defaults overridden by `LOL_API_URL` when it is set
    pub fn from_env() -> Self {
        Self::default().with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Full layered load: defaults, optional TOML file, environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => Some(std::fs::read_to_string(path)?),
            None => None,
        };
        Self::layered(content.as_deref(), std::env::var(BASE_URL_ENV).ok())
    }

    /// Apply the file contents, then the environment value, over the defaults
    fn layered(file: Option<&str>, env_base_url: Option<String>) -> Result<Self> {
        let config = match file {
            Some(content) => Self::from_toml_str(content)?,
            None => Self::default(),
        };
        Ok(config.with_base_url_override(env_base_url))
    }

    /// Parse a TOML document on top of the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| SimError::Config(e.to_string()))?;

        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(secs) = file.timeout_secs {
            if secs == 0 {
                return Err(SimError::Config("timeout_secs must be positive".into()));
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Replace the base URL when an override is present and non-empty
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        self
    }

    /// Builder-style timeout setter
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the simulation endpoint
    pub fn simulation_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SIMULATION_PATH)
    }
}
