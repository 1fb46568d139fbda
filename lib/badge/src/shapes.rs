//! Flat-fill shape primitives.
//!
//! Everything here replaces pixels instead of blending them; later shapes
//! overwrite earlier ones. Shapes that fall partly or fully outside the canvas
//! are clipped.

use crate::{
    geometry::{Bounds, Segment},
    palette,
};
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{
        draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
    },
    point::Point,
    rect::Rect,
};

/// Radial gradient approximated by nested discs, largest first.
///
/// Each disc of radius `i` gets the gradient colour at `i / radius`, so the
/// rim is light and the centre dark. The banding this produces at small sizes
/// is part of the look.
pub fn fill_gradient_disc(canvas: &mut RgbaImage, center: (i32, i32), radius: i32) {
    for i in (1..=radius).rev() {
        let color = palette::gradient_at(i as f32 / radius as f32);
        draw_filled_circle_mut(canvas, center, i, color);
    }
}

/// Filled axis-aligned box with quarter-circle corners.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, bounds: Bounds, radius: i32, color: Rgba<u8>) {
    let (w, h) = (bounds.width(), bounds.height());
    if w <= 0 || h <= 0 {
        return;
    }

    let r = radius.clamp(0, w.min(h) / 2);
    if r == 0 {
        fill_rect(canvas, bounds.left, bounds.top, w, h, color);
        return;
    }

    fill_rect(canvas, bounds.left + r, bounds.top, w - 2 * r, h, color);
    fill_rect(canvas, bounds.left, bounds.top + r, w, h - 2 * r, color);

    for (cx, cy) in [
        (bounds.left + r, bounds.top + r),
        (bounds.right - r, bounds.top + r),
        (bounds.left + r, bounds.bottom - r),
        (bounds.right - r, bounds.bottom - r),
    ] {
        draw_filled_circle_mut(canvas, (cx, cy), r, color);
    }
}

/// Stroke a connected polyline, one segment at a time (no joins).
pub fn stroke_polyline(canvas: &mut RgbaImage, points: &[(i32, i32)], width: u32, color: Rgba<u8>) {
    for pair in points.windows(2) {
        stroke_segment(
            canvas,
            Segment {
                start: pair[0],
                end: pair[1],
            },
            width,
            color,
        );
    }
}

pub fn stroke_segment(canvas: &mut RgbaImage, segment: Segment, width: u32, color: Rgba<u8>) {
    let ((x0, y0), (x1, y1)) = (segment.start, segment.end);
    let w = width.max(1) as i32;

    if w == 1 {
        draw_line_segment_mut(
            canvas,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
        return;
    }

    // Axis-aligned strokes are exact boxes centred on the line.
    if y0 == y1 {
        fill_rect(canvas, x0.min(x1), y0 - w / 2, (x1 - x0).abs() + 1, w, color);
        return;
    }
    if x0 == x1 {
        fill_rect(canvas, x0 - w / 2, y0.min(y1), w, (y1 - y0).abs() + 1, color);
        return;
    }

    let (dx, dy) = ((x1 - x0) as f32, (y1 - y0) as f32);
    let len = (dx * dx + dy * dy).sqrt();
    let half = w as f32 / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);

    let corner = |x: i32, y: i32, sign: f32| {
        Point::new(
            (x as f32 + nx * sign).round() as i32,
            (y as f32 + ny * sign).round() as i32,
        )
    };
    let poly = [
        corner(x0, y0, 1.0),
        corner(x1, y1, 1.0),
        corner(x1, y1, -1.0),
        corner(x0, y0, -1.0),
    ];

    if poly[0] == poly[3] {
        draw_line_segment_mut(
            canvas,
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            color,
        );
    } else {
        draw_polygon_mut(canvas, &poly, color);
    }
}

fn fill_rect(canvas: &mut RgbaImage, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
    if w <= 0 || h <= 0 {
        return;
    }
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(w as u32, h as u32), color);
}
