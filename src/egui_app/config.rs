use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::egui_app::token_store::{default_token_path, FileTokenStore, MemoryTokenStore, TokenStore};
use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError, IdentifierKind};

/// Client configuration: the loaded `AppConfig` plus the session token cell.
///
/// Clones share the token cell, so a login or logout through one clone is
/// seen by every HTTP client holding another.
#[derive(Clone)]
pub struct Config {
    app: AppConfig,
    token: Arc<RwLock<Option<String>>>,
    tokens: Arc<dyn TokenStore>,
}

impl Default for Config {
    fn default() -> Self {
        let app = match AppConfig::load() {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!("Ignoring invalid configuration, using defaults: {}", e);
                AppConfig::default()
            }
        };
        let tokens = token_store_for(&app);
        Self::with_store(app, tokens)
    }
}

fn token_store_for(app: &AppConfig) -> Arc<dyn TokenStore> {
    match app.token_path.clone().or_else(default_token_path) {
        Some(path) => {
            let store = FileTokenStore::new(path);
            tracing::debug!("Session token file: {}", store.path().display());
            Arc::new(store)
        }
        None => {
            tracing::warn!("No data directory available, session token will not survive restarts");
            Arc::new(MemoryTokenStore::new())
        }
    }
}

impl Config {
    /// Create a new configuration from defaults, config file and environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        let tokens = token_store_for(&app);
        Ok(Self::with_store(app, tokens))
    }

    /// Use an explicit token store; the stored token (if any) is loaded now
    pub fn with_store(app: AppConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let token = match tokens.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Could not read stored session token: {}", e);
                None
            }
        };
        Self {
            app,
            token: Arc::new(RwLock::new(token)),
            tokens,
        }
    }

    /// Set the session token and persist it
    pub fn set_token(&self, token: Option<String>) {
        let persisted = match token {
            Some(ref token) => self.tokens.save(token),
            None => self.tokens.clear(),
        };
        if let Err(e) = persisted {
            tracing::error!("Failed to persist session token: {}", e);
        }
        match self.token.write() {
            Ok(mut cell) => *cell = token,
            Err(_) => tracing::error!("Session token cell poisoned, token not updated"),
        }
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|cell| cell.clone())
    }

    /// Clear the token (logout)
    pub fn clear_token(&self) {
        self.set_token(None);
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        &self.app.server_url
    }

    pub fn identifier_kind(&self) -> IdentifierKind {
        self.app.identifier
    }

    pub fn refresh_on_start(&self) -> bool {
        self.app.refresh_on_start
    }

    pub fn request_timeout(&self) -> Duration {
        self.app.request_timeout
    }
}
