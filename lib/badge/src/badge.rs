use crate::{
    BadgeResult,
    font::{FontChain, TextBox},
    geometry::{Geometry, Layout},
    palette::{ACCENT_GREEN, DARK_GREEN, ENVELOPE_WHITE, LIGHT_GREEN, TRANSPARENT},
    shapes,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

/// Glyph drawn in the middle of the envelope.
pub const GLYPH: &str = "$";

/// Badge rendering configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BadgeConfig {
    #[derivative(Default(value = "256"))]
    size: u32,

    #[derivative(Default(value = "Layout::Padded(0.1)"))]
    layout: Layout,
}

impl BadgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Render onto a fresh transparent `size x size` canvas.
    pub fn render(&self, fonts: &FontChain) -> BadgeResult<RgbaImage> {
        let geometry = Geometry::new(self.size, self.layout)?;
        log::debug!("render badge {}px {:?}", self.size, self.layout);

        let mut canvas = RgbaImage::from_pixel(self.size, self.size, TRANSPARENT);
        draw(&mut canvas, &geometry, fonts);
        Ok(canvas)
    }
}

/// Store-style badge with `padding_ratio` of each edge left empty.
pub fn render_badge(size: u32, padding_ratio: f64, fonts: &FontChain) -> BadgeResult<RgbaImage> {
    BadgeConfig::new()
        .with_size(size)
        .with_layout(Layout::Padded(padding_ratio))
        .render(fonts)
}

/// App-icon badge with the fixed 1/16 margin.
pub fn render_icon(size: u32, fonts: &FontChain) -> BadgeResult<RgbaImage> {
    BadgeConfig::new()
        .with_size(size)
        .with_layout(Layout::Icon)
        .render(fonts)
}

fn draw(canvas: &mut RgbaImage, g: &Geometry, fonts: &FontChain) {
    shapes::fill_gradient_disc(canvas, (g.center, g.center), g.circle_radius);
    shapes::fill_rounded_rect(canvas, g.envelope, g.corner_radius, ENVELOPE_WHITE);
    shapes::stroke_polyline(canvas, &g.flap, g.flap_width, LIGHT_GREEN);

    let font = fonts.resolve(g.font_size);
    if let Some(bbox) = font.text_bbox(GLYPH) {
        font.draw_text(canvas, glyph_origin(g.center, bbox), GLYPH, DARK_GREEN);
    }

    for segment in g.accents {
        shapes::stroke_segment(canvas, segment, g.accent_width, ACCENT_GREEN);
    }
}

/// Line-top origin for a glyph with ink box `bbox`.
///
/// The ink is centred horizontally on `center`. Vertically the line top sits
/// a quarter of the ink height above `center`.
fn glyph_origin(center: i32, bbox: TextBox) -> (i32, i32) {
    (
        center - bbox.left - bbox.width().div_euclid(2),
        center - bbox.height().div_euclid(4),
    )
}
