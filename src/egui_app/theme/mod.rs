//! Theme Module
//!
//! This module provides the color scheme and styling for the lookup widget.
//! It includes:
//!
//! - Color constants for the brown/tan theme
//! - Frame builders for the panel, contact card and picture placeholder
//!
//! # Usage
//!
//! ```rust,ignore
//! use contact_lookup::egui_app::theme::{colors, styles};
//!
//! // Apply global theme
//! styles::apply_global_theme(ctx);
//!
//! // Use frame builders
//! styles::contact_card_frame().show(ui, |ui| {
//!     // Card content
//! });
//! ```

pub mod colors;
pub mod styles;
