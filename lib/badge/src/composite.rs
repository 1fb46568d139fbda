//! Badges placed on canvases that are not square.

use crate::{BadgeResult, badge::render_badge, font::FontChain, palette};
use image::RgbaImage;

/// Padding used for badges inside composites.
pub const COMPOSITE_PADDING: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeLayout {
    /// 310x150 tile, badge at 70% of the height, anchored at 15% of the width.
    WideTile,

    /// 620x300 splash, badge at half the shorter edge, centred.
    Splash,
}

impl CompositeLayout {
    pub fn canvas_size(&self) -> (u32, u32) {
        match self {
            CompositeLayout::WideTile => (310, 150),
            CompositeLayout::Splash => (620, 300),
        }
    }

    pub fn badge_size(&self) -> u32 {
        let (w, h) = self.canvas_size();
        match self {
            CompositeLayout::WideTile => (h as f64 * 0.7) as u32,
            CompositeLayout::Splash => w.min(h) / 2,
        }
    }

    /// Top-left corner of the badge on the canvas.
    pub fn badge_origin(&self) -> (i64, i64) {
        let (w, h) = self.canvas_size();
        let badge = self.badge_size();
        let y = (h - badge) as i64 / 2;

        match self {
            CompositeLayout::WideTile => ((w as f64 * 0.15) as i64, y),
            CompositeLayout::Splash => ((w - badge) as i64 / 2, y),
        }
    }
}

/// Render the badge and paste it onto a transparent canvas, masked by its
/// own alpha channel.
pub fn render_composite(layout: CompositeLayout, fonts: &FontChain) -> BadgeResult<RgbaImage> {
    let (w, h) = layout.canvas_size();
    let badge = render_badge(layout.badge_size(), COMPOSITE_PADDING, fonts)?;

    let (x, y) = layout.badge_origin();
    log::debug!("composite {layout:?}: {w}x{h}, badge at ({x}, {y})");

    let mut canvas = RgbaImage::new(w, h);
    paste_masked(&mut canvas, &badge, x, y);
    Ok(canvas)
}

fn paste_masked(canvas: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);

    for (sx, sy, px) in src.enumerate_pixels() {
        let (cx, cy) = (x + sx as i64, y + sy as i64);
        if cx < 0 || cy < 0 || cx >= w || cy >= h {
            continue;
        }
        palette::mask_blend(canvas.get_pixel_mut(cx as u32, cy as u32), *px);
    }
}
