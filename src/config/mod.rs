// SPDX-License-Identifier: MPL-2.0
//! Styling and output targets for generated icons.
//!
//! There is no settings file: everything is derived from the constants in
//! [`defaults`]. Library callers may build a custom [`IconStyle`] in code.
//!
//! # Examples
//!
//! ```
//! use hts_icons::config::{IconStyle, ACCENT_RGB};
//!
//! let style = IconStyle::default();
//! assert_eq!(style.accent.0, ACCENT_RGB);
//! assert_eq!(style.caption, "by HTS");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use image_rs::Rgb;

/// Colors, caption and preferred font used when drawing an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    pub background: Rgb<u8>,
    pub accent: Rgb<u8>,
    pub caption_color: Rgb<u8>,
    pub caption: String,
    /// Outline font family looked up in the system font database.
    pub preferred_font: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Rgb(BACKGROUND_RGB),
            accent: Rgb(ACCENT_RGB),
            caption_color: Rgb(CAPTION_RGB),
            caption: CAPTION_TEXT.to_string(),
            preferred_font: PREFERRED_FONT_FAMILY.to_string(),
        }
    }
}

/// One icon to produce: edge length and file name inside the icons directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: &'static str,
}

impl IconTarget {
    pub const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }
}

/// Checks that `size` can be rendered.
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] when `size` is zero or larger than
/// [`MAX_ICON_SIZE`].
pub fn validate_size(size: u32) -> Result<u32> {
    if (MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(Error::InvalidSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_uses_palette_constants() {
        let style = IconStyle::default();
        assert_eq!(style.background, Rgb([240, 242, 245]));
        assert_eq!(style.accent, Rgb([230, 57, 70]));
        assert_eq!(style.caption_color, Rgb([43, 76, 126]));
        assert_eq!(style.preferred_font, "Arial");
    }

    #[test]
    fn validate_size_rejects_zero() {
        assert_eq!(validate_size(0), Err(Error::InvalidSize(0)));
    }

    #[test]
    fn validate_size_rejects_oversized() {
        assert!(validate_size(MAX_ICON_SIZE + 1).is_err());
    }

    #[test]
    fn validate_size_accepts_bounds() {
        assert_eq!(validate_size(1), Ok(1));
        assert_eq!(validate_size(MAX_ICON_SIZE), Ok(MAX_ICON_SIZE));
    }
}
