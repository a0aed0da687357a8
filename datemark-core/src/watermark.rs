use std::sync::OnceLock;

use ab_glyph::{Font, FontRef, GlyphId, PxScale, ScaleFont};
use image::RgbaImage;
use imageproc::drawing::draw_text_mut;

use crate::config::{Position, WatermarkConfig};

/// Embedded bold sans face; the stamp never reads system fonts.
const FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

static FONT: OnceLock<FontRef<'static>> = OnceLock::new();

fn font() -> &'static FontRef<'static> {
    FONT.get_or_init(|| {
        FontRef::try_from_slice(FONT_DATA).expect("embedded font data is a valid TTF")
    })
}

/// Glyph metrics for one line of text at a given pixel size.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Kerning-aware advance width of the whole string.
    pub width: f32,
    pub line_height: f32,
    pub ascent: f32,
    /// Distance from baseline to the bottom of the line box (positive).
    pub descent: f32,
}

pub fn measure(text: &str, font_size: u32) -> TextMetrics {
    let scaled = font().as_scaled(PxScale::from(font_size as f32));

    let mut width = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }

    TextMetrics {
        width,
        line_height: scaled.height(),
        ascent: scaled.ascent(),
        descent: -scaled.descent(),
    }
}

/// Stamp size scales with the photo: a tenth of the short side, 10px floor.
pub fn auto_font_size(width: u32, height: u32) -> u32 {
    (width / 10).min(height / 10).max(10)
}

/// Baseline anchor for the stamp, 10px margins from the chosen corner.
pub fn anchor(position: Position, img_w: u32, img_h: u32, m: &TextMetrics) -> (i32, i32) {
    let (w, h) = (img_w as f32, img_h as f32);
    let (x, baseline) = match position {
        Position::TopLeft => (10.0, m.line_height + 10.0),
        Position::Center => (
            (w - m.width) / 2.0,
            (h + m.line_height) / 2.0 - m.ascent / 2.0,
        ),
        Position::BottomRight => (w - m.width - 10.0, h - 10.0 + m.descent),
    };
    (x.round() as i32, baseline.round() as i32)
}

/// Draw the date stamp onto the canvas in place.
pub fn draw(canvas: &mut RgbaImage, text: &str, config: &WatermarkConfig) {
    let size = config
        .font_size
        .unwrap_or_else(|| auto_font_size(canvas.width(), canvas.height()));
    let metrics = measure(text, size);
    let (x, baseline) = anchor(config.position, canvas.width(), canvas.height(), &metrics);
    // draw_text_mut addresses the top of the glyph box; the anchor is a baseline
    let y = baseline - metrics.ascent.round() as i32;
    draw_text_mut(
        canvas,
        config.color.rgba(),
        x,
        y,
        PxScale::from(size as f32),
        font(),
        text,
    );
}
