//! Color Constants for the Lookup Widget Theme
//!
//! This module defines all the color constants used throughout the lookup UI.
//! Colors follow a warm brown/tan scheme.

use eframe::egui::Color32;

/// Main background - Deep brown
pub const BG_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Widget panel background - Dark brown
pub const PANEL_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Contact card background - Off-white
pub const CARD_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Contact card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Hovered widget background - Lighter brown
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Selection highlight - Medium brown
pub const SELECTION: Color32 = Color32::from_rgb(0x4A, 0x2E, 0x22);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Button primary background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Recent search chip background
pub const BUTTON_SECONDARY: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Profile placeholder background
pub const ACCENT: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);
