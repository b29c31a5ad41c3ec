// SPDX-License-Identifier: MPL-2.0
//! Caption font resolution and text drawing.
//!
//! The caption is drawn with an outline font from the system font database
//! when the preferred family is installed, and with the built-in bitmap font
//! otherwise. Resolution never fails: any problem on the outline path is
//! logged and the bitmap font takes over.

use super::bitmap_font::BitmapFont;
use super::canvas::Canvas;
use image_rs::Rgb;
use quick_xml::escape::escape;
use resvg::usvg::{self, fontdb};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads every font installed on the system.
pub fn system_fonts() -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    debug!(faces = db.len(), "loaded system fonts");
    Arc::new(db)
}

/// Why the outline font could not be used.
#[derive(Debug)]
enum Unavailable {
    MissingFamily(String),
    Parse(usvg::Error),
    NoGlyphs,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::MissingFamily(family) => write!(f, "font family '{}' not installed", family),
            Unavailable::Parse(e) => write!(f, "caption text could not be laid out: {}", e),
            Unavailable::NoGlyphs => write!(f, "no glyphs were shaped for the caption"),
        }
    }
}

/// Caption text shaped with an outline font.
pub struct OutlineCaption {
    tree: usvg::Tree,
    ink: usvg::Rect,
}

impl fmt::Debug for OutlineCaption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineCaption").field("ink", &self.ink).finish()
    }
}

impl OutlineCaption {
    fn layout(
        fonts: &Arc<fontdb::Database>,
        family: &str,
        text: &str,
        font_size: u32,
        color: Rgb<u8>,
    ) -> Result<Self, Unavailable> {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family)],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        if fonts.query(&query).is_none() {
            return Err(Unavailable::MissingFamily(family.to_string()));
        }

        let Rgb([r, g, b]) = color;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}"><text x="0" y="{font_size}" font-family="{family}" font-size="{font_size}" fill="rgb({r},{g},{b})">{text}</text></svg>"#,
            canvas = font_size * text.chars().count().max(1) as u32 * 2,
            family = escape(family),
            text = escape(text),
        );

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(fonts);
        options.font_family = family.to_string();

        let tree = usvg::Tree::from_str(&svg, &options).map_err(Unavailable::Parse)?;
        if !tree.root().has_children() {
            return Err(Unavailable::NoGlyphs);
        }
        let ink = tree.root().abs_bounding_box();
        if ink.width() <= 0.0 || ink.height() <= 0.0 {
            return Err(Unavailable::NoGlyphs);
        }
        Ok(Self { tree, ink })
    }

    fn width(&self) -> u32 {
        self.ink.width().ceil() as u32
    }

    fn height(&self) -> u32 {
        self.ink.height().ceil() as u32
    }

    fn draw(&self, canvas: &mut Canvas, x: u32, y: u32) {
        let size = canvas.size();
        let Some(mut layer) = tiny_skia::Pixmap::new(size, size) else {
            warn!(size, "could not allocate caption layer, caption skipped");
            return;
        };
        let transform = tiny_skia::Transform::from_translate(
            x as f32 - self.ink.x(),
            y as f32 - self.ink.y(),
        );
        resvg::render(&self.tree, transform, &mut layer.as_mut());
        canvas.composite(&layer);
    }
}

/// A caption ready to be measured and drawn.
#[derive(Debug)]
pub enum Caption {
    Outline(OutlineCaption),
    Bitmap {
        font: BitmapFont,
        text: String,
        color: Rgb<u8>,
    },
}

impl Caption {
    /// Lays out `text` in `preferred_family`, or in the bitmap font when that
    /// family cannot be used.
    pub fn resolve(
        fonts: &Arc<fontdb::Database>,
        preferred_family: &str,
        text: &str,
        font_size: u32,
        color: Rgb<u8>,
    ) -> Self {
        match OutlineCaption::layout(fonts, preferred_family, text, font_size, color) {
            Ok(outline) => {
                debug!(family = preferred_family, font_size, "caption uses outline font");
                Caption::Outline(outline)
            }
            Err(reason) => {
                debug!(%reason, font_size, "caption falls back to bitmap font");
                Caption::Bitmap {
                    font: BitmapFont::for_font_size(font_size),
                    text: text.to_string(),
                    color,
                }
            }
        }
    }

    pub fn is_outline(&self) -> bool {
        matches!(self, Caption::Outline(_))
    }

    /// Ink width and height in pixels.
    pub fn extent(&self) -> (u32, u32) {
        match self {
            Caption::Outline(outline) => (outline.width(), outline.height()),
            Caption::Bitmap { font, text, .. } => font.measure(text),
        }
    }

    /// Draws the caption with the top-left of its ink box at (`x`, `y`).
    pub fn draw(&self, canvas: &mut Canvas, x: u32, y: u32) {
        match self {
            Caption::Outline(outline) => outline.draw(canvas, x, y),
            Caption::Bitmap { font, text, color } => font.draw(canvas, text, x, y, *color),
        }
    }
}

/// A family from `fonts` that can shape Latin text, preferring common sans faces.
#[cfg(test)]
pub(crate) fn installed_family(fonts: &fontdb::Database) -> Option<String> {
    const COMMON: [&str; 5] = ["Arial", "DejaVu Sans", "Liberation Sans", "Noto Sans", "Helvetica"];
    let names: Vec<&str> = fonts
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();
    COMMON
        .iter()
        .find(|common| names.contains(common))
        .map(|name| name.to_string())
        .or_else(|| names.first().map(|name| name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgb<u8> = Rgb([43, 76, 126]);

    fn empty_fonts() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    #[test]
    fn missing_family_falls_back_to_bitmap() {
        let caption = Caption::resolve(&empty_fonts(), "Arial", "by HTS", 30, BLUE);
        assert!(!caption.is_outline());
        assert_eq!(caption.extent(), BitmapFont::for_font_size(30).measure("by HTS"));
    }

    #[test]
    fn unknown_family_in_system_fonts_falls_back_to_bitmap() {
        let caption = Caption::resolve(
            &system_fonts(),
            "No Such Family 7f3e1c",
            "by HTS",
            11,
            BLUE,
        );
        assert!(!caption.is_outline());
    }

    #[test]
    fn bitmap_caption_draws_in_its_color() {
        let caption = Caption::resolve(&empty_fonts(), "Arial", "HTS", 8, BLUE);
        let mut canvas = Canvas::new(32, Rgb([255, 255, 255]));
        caption.draw(&mut canvas, 2, 2);
        assert!(canvas.image().pixels().any(|p| *p == BLUE));
    }

    #[test]
    fn caption_markup_is_escaped() {
        assert_eq!(escape("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape("by HTS"), "by HTS");
    }

    #[test]
    fn markup_in_caption_does_not_break_layout() {
        let fonts = system_fonts();
        let Some(family) = installed_family(&fonts) else {
            return;
        };
        let caption = Caption::resolve(&fonts, &family, "<by> & \"HTS\"", 30, BLUE);
        assert!(caption.is_outline());
    }

    #[test]
    fn installed_family_produces_outline_caption() {
        // Pick whatever family the host has; skip when no fonts are installed.
        let fonts = system_fonts();
        let Some(family) = installed_family(&fonts) else {
            return;
        };
        let caption = Caption::resolve(&fonts, &family, "by HTS", 30, BLUE);
        assert!(caption.is_outline(), "'{family}' is installed but was not used");
        let (width, height) = caption.extent();
        assert!(width > 0 && height > 0);
    }
}
