//! Configuration types for portable-report

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default endpoint the user list is fetched from
pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "portable_reports";

/// Where the user list comes from and how the request is made
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint URL (default: jsonplaceholder `/users`)
    #[serde(default = "default_url")]
    pub url: String,

    /// Whole-request timeout, serialized as seconds (default: 10)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Where the rendered report is written
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, created if missing (default: "./portable_reports")
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
        }
    }
}

/// Main configuration for a report run
///
/// Every field has a default, so `Config::default()` reproduces the fixed
/// behavior of the tool and a config file only needs the keys it changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source endpoint settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Output location settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load a configuration from a JSON file
    ///
    /// Keys missing from the file take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::Config {
            message: format!("invalid config file {}: {}", path.display(), e),
            key: None,
        })
    }

    /// Check the configuration before any network or filesystem work
    pub fn validate(&self) -> Result<()> {
        let url = self.source.url.trim();
        if url.is_empty() {
            return Err(Error::config("source.url", "URL cannot be empty"));
        }

        let parsed = url::Url::parse(url)
            .map_err(|e| Error::config("source.url", format!("invalid URL {url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(
                "source.url",
                "URL must start with http:// or https://",
            ));
        }

        if self.source.timeout.is_zero() {
            return Err(Error::config("source.timeout", "timeout must be at least 1 second"));
        }

        if self.output.directory.as_os_str().is_empty() {
            return Err(Error::config(
                "output.directory",
                "output directory cannot be empty",
            ));
        }

        Ok(())
    }
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_user_agent() -> String {
    format!("portable-report/{}", env!("CARGO_PKG_VERSION"))
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

// Duration serialization helper (whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
