// SPDX-License-Identifier: MPL-2.0
//! Built-in 5×7 bitmap font.
//!
//! Compiled into the binary so a caption can always be drawn, even on systems
//! without any outline fonts installed. Glyphs are scaled by whole pixels.

use super::canvas::Canvas;
use super::geometry::Rect;
use image_rs::Rgb;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Vertical cell including one row of leading, used to pick the scale.
const CELL_HEIGHT: u32 = 8;
/// Blank columns between two glyphs.
const GLYPH_SPACING: u32 = 1;

const FIRST_CHAR: char = ' ';
const FALLBACK_CHAR: char = '?';

/// Printable ASCII (0x20..=0x7E), one byte per column, least significant bit on top.
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5f, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7f, 0x14, 0x7f, 0x14], // #
    [0x24, 0x2a, 0x7f, 0x2a, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1c, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1c, 0x00], // )
    [0x08, 0x2a, 0x1c, 0x2a, 0x08], // *
    [0x08, 0x08, 0x3e, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3e, 0x51, 0x49, 0x45, 0x3e], // 0
    [0x00, 0x42, 0x7f, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4b, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7f, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3c, 0x4a, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1e], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3e], // @
    [0x7e, 0x11, 0x11, 0x11, 0x7e], // A
    [0x7f, 0x49, 0x49, 0x49, 0x36], // B
    [0x3e, 0x41, 0x41, 0x41, 0x22], // C
    [0x7f, 0x41, 0x41, 0x22, 0x1c], // D
    [0x7f, 0x49, 0x49, 0x49, 0x41], // E
    [0x7f, 0x09, 0x09, 0x01, 0x01], // F
    [0x3e, 0x41, 0x41, 0x51, 0x32], // G
    [0x7f, 0x08, 0x08, 0x08, 0x7f], // H
    [0x00, 0x41, 0x7f, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3f, 0x01], // J
    [0x7f, 0x08, 0x14, 0x22, 0x41], // K
    [0x7f, 0x40, 0x40, 0x40, 0x40], // L
    [0x7f, 0x02, 0x04, 0x02, 0x7f], // M
    [0x7f, 0x04, 0x08, 0x10, 0x7f], // N
    [0x3e, 0x41, 0x41, 0x41, 0x3e], // O
    [0x7f, 0x09, 0x09, 0x09, 0x06], // P
    [0x3e, 0x41, 0x51, 0x21, 0x5e], // Q
    [0x7f, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7f, 0x01, 0x01], // T
    [0x3f, 0x40, 0x40, 0x40, 0x3f], // U
    [0x1f, 0x20, 0x40, 0x20, 0x1f], // V
    [0x7f, 0x20, 0x18, 0x20, 0x7f], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x00, 0x7f, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x41, 0x41, 0x7f, 0x00, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7f, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7f], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7e, 0x09, 0x01, 0x02], // f
    [0x08, 0x14, 0x54, 0x54, 0x3c], // g
    [0x7f, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7d, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3d, 0x00], // j
    [0x00, 0x7f, 0x10, 0x28, 0x44], // k
    [0x00, 0x41, 0x7f, 0x40, 0x00], // l
    [0x7c, 0x04, 0x18, 0x04, 0x78], // m
    [0x7c, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7c, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7c], // q
    [0x7c, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3f, 0x44, 0x40, 0x20], // t
    [0x3c, 0x40, 0x40, 0x20, 0x7c], // u
    [0x1c, 0x20, 0x40, 0x20, 0x1c], // v
    [0x3c, 0x40, 0x30, 0x40, 0x3c], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0c, 0x50, 0x50, 0x50, 0x3c], // y
    [0x44, 0x64, 0x54, 0x4c, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7f, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x10, 0x08, 0x08, 0x10, 0x08], // ~
];

fn glyph(c: char) -> &'static [u8; 5] {
    let index = |c: char| (c as usize).wrapping_sub(FIRST_CHAR as usize);
    GLYPHS
        .get(index(c))
        .unwrap_or(&GLYPHS[index(FALLBACK_CHAR)])
}

/// The bitmap font at an integer magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Picks the magnification closest to `font_size` pixels per line.
    pub fn for_font_size(font_size: u32) -> Self {
        let scale = (f64::from(font_size) / f64::from(CELL_HEIGHT)).round() as u32;
        Self {
            scale: scale.max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Ink width and height of `text`, without trailing spacing.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, 0);
        }
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) * self.scale;
        (
            chars * advance - GLYPH_SPACING * self.scale,
            GLYPH_HEIGHT * self.scale,
        )
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: u32, y: u32, color: Rgb<u8>) {
        let advance = (GLYPH_WIDTH + GLYPH_SPACING) * self.scale;
        let mut pen_x = x;
        for c in text.chars() {
            for (col, bits) in glyph(c).iter().enumerate() {
                for row in 0..GLYPH_HEIGHT {
                    if bits & (1 << row) == 0 {
                        continue;
                    }
                    let left = pen_x + col as u32 * self.scale;
                    let top = y + row * self.scale;
                    canvas.fill_rect(
                        &Rect {
                            left,
                            top,
                            right: left + self.scale - 1,
                            bottom: top + self.scale - 1,
                        },
                        color,
                    );
                }
            }
            pen_x += advance;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const INK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn scale_tracks_font_size() {
        assert_eq!(BitmapFont::for_font_size(1).scale(), 1);
        assert_eq!(BitmapFont::for_font_size(11).scale(), 1);
        assert_eq!(BitmapFont::for_font_size(12).scale(), 2);
        assert_eq!(BitmapFont::for_font_size(30).scale(), 4);
    }

    #[test]
    fn measure_excludes_trailing_spacing() {
        let font = BitmapFont::for_font_size(8);
        assert_eq!(font.measure(""), (0, 0));
        assert_eq!(font.measure("A"), (5, 7));
        assert_eq!(font.measure("by HTS"), (35, 7));

        let big = BitmapFont::for_font_size(24);
        assert_eq!(big.measure("by HTS"), (105, 21));
    }

    #[test]
    fn unknown_characters_use_question_mark() {
        assert_eq!(glyph('é'), glyph('?'));
        assert_eq!(glyph('\n'), glyph('?'));
        assert_ne!(glyph('T'), glyph('?'));
    }

    #[test]
    fn draw_sets_expected_pixels_of_t() {
        let mut canvas = Canvas::new(10, WHITE);
        BitmapFont::for_font_size(8).draw(&mut canvas, "T", 1, 1, INK);
        let image = canvas.into_image();

        // Top row is the full bar, the stem runs down the middle column.
        for x in 1..=5 {
            assert_eq!(*image.get_pixel(x, 1), INK);
        }
        for y in 1..=7 {
            assert_eq!(*image.get_pixel(3, y), INK);
        }
        assert_eq!(*image.get_pixel(1, 2), WHITE);
        assert_eq!(*image.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn draw_clips_at_canvas_edge() {
        let mut canvas = Canvas::new(4, WHITE);
        BitmapFont::for_font_size(16).draw(&mut canvas, "HTS", 2, 2, INK);
        assert_eq!(canvas.into_image().dimensions(), (4, 4));
    }
}
