//! Color Constants for the Forum Theme
//!
//! All color constants used by the forum UI. A dark slate scheme with a
//! single blue accent; status colors follow the usual traffic-light
//! convention.

use eframe::egui::Color32;

/// Main background - near-black slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x24);

/// Top bar background - dark slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x23, 0x28, 0x2F);

/// Post card background - raised slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x2A, 0x30, 0x39);

/// Comment strip background - slightly recessed
pub const COMMENT_BG: Color32 = Color32::from_rgb(0x24, 0x29, 0x31);

/// Primary text - off-white
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xEA, 0xED);

/// Secondary text - muted grey
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA3, 0xAD);

/// Accent for primary buttons and highlights - blue
pub const ACCENT: Color32 = Color32::from_rgb(0x3A, 0x6E, 0xA5);

/// Error text
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Warning badge (misleading posts)
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Success / confirmation
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
