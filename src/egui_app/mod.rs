//! egui Native Desktop App Module
//!
//! The film catalog client: a session-wide catalog store, a router with a
//! header shell, the login form, and the routed views built on top of them.
//!
//! # Architecture
//!
//! - **`config`** - Runtime configuration plus the session token
//! - **`token_store`** - Where the session token is kept between runs
//! - **`http`** - Shared reqwest client and error mapping
//! - **`auth`** - Sign-in state and the login/logout gateway
//! - **`catalog_api`** - Remote source for catalog refreshes
//! - **`store`** - The catalog store and its access trait
//! - **`router`** - Routes, history and the scroll reset trigger
//! - **`login_form`** - Field validation and submission
//! - **`rating`** / **`comments`** - Per-card ratings and comment threads
//! - **`debug`** - In-app diagnostics fed by `tracing`
//! - **`state`** - `AppState`, tying the above together
//! - **`views`** / **`components`** / **`theme`** - Rendering
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin cinerate
//! ```

pub mod config;
pub mod token_store;
pub mod http;
pub mod auth;
pub mod types;
pub mod catalog_api;
pub mod store;
pub mod router;
pub mod login_form;
pub mod rating;
pub mod comments;
pub mod state;
pub mod views;
pub mod components;
pub mod debug;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::{AuthGateway, AuthState, HttpAuthGateway};
pub use catalog_api::{CatalogSource, HttpCatalogSource};
pub use store::{CatalogAccess, CatalogStore};
pub use router::{ListFilter, Navigator, Route, ScrollReset};
pub use login_form::{LoginForm, LoginStage, SubmitOutcome};
pub use types::{AuthResponse, LoginRequest, UserInfo};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use state::AppState;
pub use debug::{DiagnosticEntry, DiagnosticsLog};
