//! Application configuration module
//!
//! Provides configuration types for the application. Values are layered:
//! built-in defaults, then an optional TOML file, then the `CLIENT_API_URL`
//! environment variable for the server address.
//!
//! ```toml
//! server_url = "http://127.0.0.1:3000"
//! identifier = "email"
//! refresh_on_start = true
//! request_timeout_secs = 5
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "CLIENT_API_URL";

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "CINERATE_CONFIG";

/// Which pattern the login identifier is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// 6-20 letters or digits
    #[default]
    Username,
    /// An email-shaped string
    Email,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL, without trailing slash
    pub server_url: String,
    /// Login identifier rule
    pub identifier: IdentifierKind,
    /// Where the session token is kept; `None` uses the platform data dir
    pub token_path: Option<PathBuf>,
    /// Fetch the catalog from the server once at startup
    pub refresh_on_start: bool,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            identifier: IdentifierKind::default(),
            token_path: None,
            refresh_on_start: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server_url(&self.server_url)?;
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Load defaults, the config file (if any) and environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = AppConfigBuilder::default();

        if let Some(path) = config_file_path() {
            if path.exists() {
                tracing::info!("Loading configuration from {}", path.display());
                builder = builder.merge_file(&FileConfig::read(&path)?);
            }
        }

        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            builder = builder.server_url(url);
        }

        builder.build()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    identifier: Option<IdentifierKind>,
    token_path: Option<PathBuf>,
    refresh_on_start: Option<bool>,
    request_timeout: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the identifier rule
    pub fn identifier(mut self, kind: IdentifierKind) -> Self {
        self.identifier = Some(kind);
        self
    }

    /// Set the token file location
    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Fetch the catalog once at startup
    pub fn refresh_on_start(mut self, enabled: bool) -> Self {
        self.refresh_on_start = Some(enabled);
        self
    }

    /// Set the HTTP request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Apply values present in a parsed config file
    pub fn merge_file(mut self, file: &FileConfig) -> Self {
        if let Some(ref url) = file.server_url {
            self.server_url = Some(url.clone());
        }
        if let Some(kind) = file.identifier {
            self.identifier = Some(kind);
        }
        if let Some(ref path) = file.token_path {
            self.token_path = Some(path.clone());
        }
        if let Some(enabled) = file.refresh_on_start {
            self.refresh_on_start = Some(enabled);
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let server_url = self
            .server_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.server_url);

        let config = AppConfig {
            server_url,
            identifier: self.identifier.unwrap_or(defaults.identifier),
            token_path: self.token_path,
            refresh_on_start: self.refresh_on_start.unwrap_or(defaults.refresh_on_start),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        };
        config.validate()?;
        Ok(config)
    }
}

/// On-disk shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub identifier: Option<IdentifierKind>,
    pub token_path: Option<PathBuf>,
    pub refresh_on_start: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&text)
    }
}

/// `CINERATE_CONFIG` if set, otherwise `<config_dir>/cinerate/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("cinerate").join("config.toml"))
}

fn validate_server_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("failed to parse config file: {0}")]
    Parse(String),
}
