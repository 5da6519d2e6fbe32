//! Color Constants
//!
//! Light catalog pages on a deep blue frame, with a bright blue accent and
//! yellow stars.

use eframe::egui::Color32;

/// Page body background
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF4, 0xF7, 0xFB);

/// Header bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1B, 0x28, 0x3F);

/// Film card background
pub const CARD_BG: Color32 = Color32::WHITE;

/// Film card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD6, 0xDE, 0xEA);

/// Poster placeholder fill
pub const POSTER_BG: Color32 = Color32::from_rgb(0x2A, 0x3B, 0x57);

/// Accent color for buttons and links
pub const ACCENT: Color32 = Color32::from_rgb(0x31, 0xA3, 0xEC);

/// Accent used for the active header entry
pub const ACCENT_ACTIVE: Color32 = Color32::from_rgb(0x8F, 0xD3, 0xFF);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF2, 0xF5, 0xFA);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1B, 0x28, 0x3F);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x78, 0x8C);

/// Filled star
pub const STAR_FILLED: Color32 = Color32::from_rgb(0xF5, 0xEB, 0x3B);

/// Empty star
pub const STAR_EMPTY: Color32 = Color32::from_rgb(0xDC, 0xDC, 0xDC);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x48, 0x4D);

/// Warning color - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
