//! Shared Module
//!
//! Types that do not depend on the UI toolkit: catalog data, comments,
//! configuration and errors. Everything here is serializable or plain data so
//! it can be exercised without a window.

/// Catalog item data structure and seed list
pub mod catalog;

/// Film comments
pub mod comment;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use catalog::{CatalogItem, FilmId};
pub use comment::{Comment, CommentError};
pub use error::ClientError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, IdentifierKind};
