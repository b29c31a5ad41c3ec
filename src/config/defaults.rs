// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for icon generation.
//!
//! This module serves as the single source of truth for the colors,
//! proportions and text used to draw the lettermark. Constants are
//! organized by category.
//!
//! # Categories
//!
//! - **Palette**: Background, lettermark and caption colors
//! - **Geometry**: Proportions of the "T" relative to the icon edge
//! - **Caption**: Text, font family and placement
//! - **Size**: Accepted icon edge lengths

// ==========================================================================
// Palette Defaults
// ==========================================================================

/// Light gray canvas background (`#f0f2f5`).
pub const BACKGROUND_RGB: [u8; 3] = [0xf0, 0xf2, 0xf5];

/// Halabja red used for the lettermark (`#E63946`).
pub const ACCENT_RGB: [u8; 3] = [0xe6, 0x39, 0x46];

/// Blue used for the caption (`#2B4C7E`).
pub const CAPTION_RGB: [u8; 3] = [0x2b, 0x4c, 0x7e];

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Width of the horizontal bar.
pub const BAR_WIDTH_RATIO: f64 = 0.5;

/// Stroke thickness shared by the bar and the stem.
pub const STROKE_RATIO: f64 = 0.12;

/// Left inset of the bar.
pub const BAR_LEFT_RATIO: f64 = 0.25;

/// Distance from the top edge to the bar.
pub const BAR_TOP_RATIO: f64 = 0.2;

/// Height of the stem, measured from the top of the bar.
pub const STEM_HEIGHT_RATIO: f64 = 0.6;

// ==========================================================================
// Caption Defaults
// ==========================================================================

pub const CAPTION_TEXT: &str = "by HTS";

/// Outline font family tried before falling back to the built-in bitmap font.
pub const PREFERRED_FONT_FAMILY: &str = "Arial";

/// Caption font size.
pub const CAPTION_FONT_RATIO: f64 = 0.06;

/// Distance from the top edge to the top of the caption.
pub const CAPTION_TOP_RATIO: f64 = 0.85;

// ==========================================================================
// Size Defaults
// ==========================================================================

/// Smallest accepted icon edge length in pixels.
pub const MIN_ICON_SIZE: u32 = 1;

/// Largest accepted icon edge length in pixels.
pub const MAX_ICON_SIZE: u32 = 8192;
