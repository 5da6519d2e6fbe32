//! Theme Module
//!
//! Color constants and frame builders shared by every view.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "Heat");
//! });
//! ```

pub mod colors;
pub mod styles;
