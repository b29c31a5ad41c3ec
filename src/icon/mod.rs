// SPDX-License-Identifier: MPL-2.0
//! Rendering of the "T" lettermark icon.
//!
//! An icon is a square RGB canvas holding two accent-colored rectangles that
//! form the letter "T" and a centered caption below it. Layout is derived from
//! the edge length alone, so rendering the same size twice yields the same
//! pixels.
//!
//! # Examples
//!
//! ```no_run
//! use hts_icons::icon::IconRenderer;
//! use std::path::Path;
//!
//! let renderer = IconRenderer::new();
//! renderer
//!     .render(512, Path::new("icons/icon-512x512.png"))
//!     .expect("failed to write icon");
//! ```

pub mod bitmap_font;
pub mod canvas;
pub mod font;
pub mod geometry;

use crate::config::{validate_size, IconStyle};
use crate::error::Result;
use canvas::Canvas;
use font::Caption;
use geometry::GlyphGeometry;
use image_rs::RgbImage;
use resvg::usvg::fontdb;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Draws lettermark icons with a fixed style.
#[derive(Clone)]
pub struct IconRenderer {
    style: IconStyle,
    fonts: Arc<fontdb::Database>,
}

impl fmt::Debug for IconRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRenderer")
            .field("style", &self.style)
            .field("font_faces", &self.fonts.len())
            .finish()
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer {
    /// Renderer with the default style and the system fonts.
    pub fn new() -> Self {
        Self::with_style(IconStyle::default())
    }

    pub fn with_style(style: IconStyle) -> Self {
        Self::with_fonts(style, font::system_fonts())
    }

    /// Renderer that looks up the caption font in `fonts` only.
    pub fn with_fonts(style: IconStyle, fonts: Arc<fontdb::Database>) -> Self {
        Self { style, fonts }
    }

    fn paint(&self, size: u32) -> Result<Canvas> {
        let size = validate_size(size)?;
        let geometry = GlyphGeometry::for_size(size);
        debug!(?geometry, "computed lettermark layout");

        let mut canvas = Canvas::new(size, self.style.background);
        canvas.fill_rect(&geometry.bar, self.style.accent);
        canvas.fill_rect(&geometry.stem, self.style.accent);

        let caption = Caption::resolve(
            &self.fonts,
            &self.style.preferred_font,
            &self.style.caption,
            geometry.caption_font_size,
            self.style.caption_color,
        );
        let (text_width, _) = caption.extent();
        caption.draw(
            &mut canvas,
            geometry.caption_left(text_width),
            geometry.caption_top,
        );

        Ok(canvas)
    }

    /// Draws an icon of `size` × `size` pixels in memory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidSize`] when `size` is zero or
    /// too large.
    pub fn render_image(&self, size: u32) -> Result<RgbImage> {
        self.paint(size).map(Canvas::into_image)
    }

    /// Draws an icon and writes it as a PNG to `output_path`, creating the
    /// parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is invalid or the file cannot be written.
    /// A missing caption font is never an error.
    pub fn render(&self, size: u32, output_path: &Path) -> Result<()> {
        self.paint(size)?.save_png(output_path)?;
        info!("Created {}", output_path.display());
        Ok(())
    }
}

/// Renders one icon with the default style.
///
/// # Errors
///
/// See [`IconRenderer::render`].
pub fn render(size: u32, output_path: &Path) -> Result<()> {
    IconRenderer::new().render(size, output_path)
}
