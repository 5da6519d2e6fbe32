//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Scripted auth gateway and catalog source fakes
//! - `AppState` builders and a frame pump
//! - Custom assertion macros

pub mod assertions;
pub mod app;

// Re-export commonly used utilities
pub use app::*;
pub use fakes::*;
