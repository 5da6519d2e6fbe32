/**
 * Authentication Module
 *
 * Session state shown by the header, and the HTTP client functions for
 * login/logout. Each call is attempted once; there is no retry.
 */

use crate::egui_app::config::Config;
use crate::egui_app::http::{block_on, client, rejection, send_error};
use crate::egui_app::types::{AuthResponse, LoginRequest, UserInfo};
use crate::shared::ClientError;

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: Option<UserInfo>) {
        self.authenticated = true;
        self.user = user;
    }

    pub fn sign_out(&mut self) {
        *self = Self::new();
    }

    /// Name used for the header and as comment author
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .and_then(UserInfo::display_name)
            .unwrap_or("anonymous")
    }
}

/// The outbound side of login/logout
///
/// The app talks to the server through this trait so tests can swap in a
/// fake; `HttpAuthGateway` is the real implementation.
pub trait AuthGateway: Send + Sync {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;
    fn logout(&self, token: &str) -> Result<(), ClientError>;
}

/// Auth gateway backed by the HTTP API
#[derive(Clone)]
pub struct HttpAuthGateway {
    config: Config,
}

impl HttpAuthGateway {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl AuthGateway for HttpAuthGateway {
    fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        login(&self.config, request.identifier.clone(), request.password.clone())
    }

    fn logout(&self, token: &str) -> Result<(), ClientError> {
        logout(&self.config, token)
    }
}

/// Login with identifier and password
pub fn login(config: &Config, identifier: String, password: String) -> Result<AuthResponse, ClientError> {
    let client = client(config)?;
    let url = config.api_url("/auth/login");
    let request = LoginRequest { identifier, password };

    block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        let body = response.text().await.map_err(send_error)?;
        let auth_response: AuthResponse = serde_json::from_str(&body)?;
        Ok(auth_response)
    })
}

/// Tell the server the session is over
pub fn logout(config: &Config, token: &str) -> Result<(), ClientError> {
    let client = client(config)?;
    let url = config.api_url("/auth/logout");

    block_on(async {
        let response = client
            .post(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(send_error)?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    })
}
