//! Process-wide client configuration.
//!
//! Resolved once at startup from, in increasing precedence: built-in
//! defaults, a TOML file, `MANGO_PROJECTS_*` environment variables, and
//! command-line flags. The resulting [`Config`] is read-only afterwards.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_ENV: &str = "MANGO_PROJECTS_CONFIG";
pub const API_URL_ENV: &str = "MANGO_PROJECTS_API_URL";
pub const TIMEOUT_ENV: &str = "MANGO_PROJECTS_TIMEOUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: Url,
    pub timeout: Duration,
}

/// One source of settings. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Layer {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml(&content)
    }

    /// Reads the `MANGO_PROJECTS_*` variables through `var`, so callers can
    /// substitute the process environment.
    pub fn from_env_with(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timeout_secs = match var(TIMEOUT_ENV) {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout(raw))?),
            None => None,
        };

        Ok(Self { api_url: var(API_URL_ENV), timeout_secs })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Applies `layers` over the defaults, later layers winning.
    pub fn from_layers(layers: &[Layer]) -> Result<Self, ConfigError> {
        let mut api_url = DEFAULT_API_URL.to_string();
        let mut timeout_secs = DEFAULT_TIMEOUT_SECS;

        for layer in layers {
            if let Some(url) = &layer.api_url {
                api_url.clone_from(url);
            }
            if let Some(secs) = layer.timeout_secs {
                timeout_secs = secs;
            }
        }

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_secs.to_string()));
        }

        Ok(Self { api_url: parse_api_url(&api_url)?, timeout: Duration::from_secs(timeout_secs) })
    }

    /// Full startup resolution. `explicit_path` comes from `--config`; a file
    /// named there or in `MANGO_PROJECTS_CONFIG` must exist, the default
    /// location is optional.
    pub fn load(explicit_path: Option<&Path>, flags: Layer) -> Result<Self, ConfigError> {
        Self::load_with(explicit_path, flags, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with environment lookups going through `var`.
    pub fn load_with(
        explicit_path: Option<&Path>,
        flags: Layer,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let explicit = explicit_path.map(Path::to_path_buf).or_else(|| var(CONFIG_ENV).map(PathBuf::from));

        let file = match explicit {
            Some(path) => Layer::from_file(&path)?,
            None => match var("HOME").map(|home| default_config_path(Path::new(&home))) {
                Some(path) if path.is_file() => Layer::from_file(&path)?,
                _ => Layer::default(),
            },
        };

        let config = Self::from_layers(&[file, Layer::from_env_with(var)?, flags])?;
        tracing::debug!(api_url = %config.api_url, timeout = ?config.timeout, "configuration resolved");
        Ok(config)
    }
}

pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config").join("mango-projects").join("config.toml")
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl { url: raw.to_string(), reason };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
