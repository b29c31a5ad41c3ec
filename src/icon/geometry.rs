// SPDX-License-Identifier: MPL-2.0
//! Proportional layout of the "T" lettermark and its caption.
//!
//! Every coordinate is derived from the icon edge length alone, so the same
//! size always yields the same layout and the mark scales across resolutions.

use crate::config::{
    BAR_LEFT_RATIO, BAR_TOP_RATIO, BAR_WIDTH_RATIO, CAPTION_FONT_RATIO, CAPTION_TOP_RATIO,
    STEM_HEIGHT_RATIO, STROKE_RATIO,
};

/// Axis-aligned pixel rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    /// Center pixel, rounded toward the top-left.
    pub fn center(&self) -> (u32, u32) {
        (
            self.left + (self.right - self.left) / 2,
            self.top + (self.bottom - self.top) / 2,
        )
    }
}

/// Layout for one icon size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub size: u32,
    pub stroke: u32,
    pub bar: Rect,
    pub stem: Rect,
    /// Caption font size in pixels, never zero.
    pub caption_font_size: u32,
    /// Row where the top of the caption ink starts.
    pub caption_top: u32,
}

/// `trunc(size * ratio)` as an integer pixel count.
fn scaled(size: u32, ratio: f64) -> u32 {
    (f64::from(size) * ratio) as u32
}

impl GlyphGeometry {
    pub fn for_size(size: u32) -> Self {
        let bar_width = scaled(size, BAR_WIDTH_RATIO);
        let stroke = scaled(size, STROKE_RATIO);

        let bar_left = scaled(size, BAR_LEFT_RATIO);
        let bar_top = scaled(size, BAR_TOP_RATIO);
        let bar = Rect {
            left: bar_left,
            top: bar_top,
            right: bar_left + bar_width,
            bottom: bar_top + stroke,
        };

        let stem_left = (f64::from(size) * 0.5 - f64::from(stroke) / 2.0) as u32;
        let stem = Rect {
            left: stem_left,
            top: bar_top,
            right: stem_left + stroke,
            bottom: bar_top + scaled(size, STEM_HEIGHT_RATIO),
        };

        Self {
            size,
            stroke,
            bar,
            stem,
            caption_font_size: scaled(size, CAPTION_FONT_RATIO).max(1),
            caption_top: scaled(size, CAPTION_TOP_RATIO),
        }
    }

    /// Left edge that centers text of `text_width` pixels on the canvas.
    pub fn caption_left(&self, text_width: u32) -> u32 {
        self.size.saturating_sub(text_width) / 2
    }
}
