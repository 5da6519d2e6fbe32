//! Cinerate - Main Library
//!
//! Cinerate is a small native desktop client for browsing a film catalog,
//! rating films, reading film details and leaving comments, behind a login
//! screen.
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Catalog items and comments
//!   - Application configuration (defaults, TOML file, environment)
//!   - Error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Catalog store and the accessor views use to read it
//!   - Routing, navigation shell and scroll reset
//!   - Login form validation and submission
//!   - HTTP client for the auth and catalog endpoints
//!   - Diagnostics console fed by `tracing`
//!
//! # Usage
//!
//! ```rust,no_run
//! // Run the desktop app:
//! // cargo run --bin cinerate
//! ```
//!
//! # Threading
//!
//! egui is a single-threaded immediate mode GUI. Network calls run on
//! short-lived background threads and hand their result back over an
//! `mpsc` channel that the UI thread polls once per frame.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `thiserror` enums in `shared::error` and `shared::config`

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
