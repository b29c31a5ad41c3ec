// SPDX-License-Identifier: MPL-2.0
//! RGB drawing surface backed by an `image` buffer.

use super::geometry::Rect;
use crate::error::{Error, Result};
use image_rs::{ImageFormat, Rgb, RgbImage};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Square canvas of `size` pixels filled with `background`.
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, background),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    /// Fills `rect` (inclusive corners), ignoring the part outside the canvas.
    pub fn fill_rect(&mut self, rect: &Rect, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();
        if width == 0 || rect.left >= width || rect.top >= height || rect.left > rect.right {
            return;
        }
        let right = rect.right.min(width - 1);
        let bottom = rect.bottom.min(height - 1);
        for y in rect.top..=bottom {
            for x in rect.left..=right {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Blends a premultiplied RGBA pixmap of the same size over the canvas.
    pub fn composite(&mut self, layer: &tiny_skia::Pixmap) {
        debug_assert_eq!(layer.width(), self.image.width());
        debug_assert_eq!(layer.height(), self.image.height());

        for (dst, src) in self.image.pixels_mut().zip(layer.pixels()) {
            let alpha = src.alpha();
            if alpha == 0 {
                continue;
            }
            let keep = 255 - u32::from(alpha);
            let blend = |s: u8, d: u8| -> u8 {
                let value = u32::from(s) + (u32::from(d) * keep + 127) / 255;
                value.min(255) as u8
            };
            *dst = Rgb([
                blend(src.red(), dst[0]),
                blend(src.green(), dst[1]),
                blend(src.blue(), dst[2]),
            ]);
        }
    }

    /// Encodes the canvas as an 8-bit RGB PNG at `path`, creating the parent
    /// directory when it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] naming the path if the directory or file cannot be
    /// written, or [`Error::Encode`] if PNG encoding fails.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io_at(parent, e))?;
        }
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| match Error::from(e) {
                Error::Io(message) => Error::io_at(path, message),
                Error::Encode(message) => Error::encode_at(path, message),
                other => other,
            })
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
