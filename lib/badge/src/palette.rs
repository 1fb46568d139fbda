use image::Rgba;

/// Gradient centre and glyph colour (#2E7D32).
pub const DARK_GREEN: Rgba<u8> = Rgba([46, 125, 50, 255]);

/// Gradient rim and flap colour (#4CAF50).
pub const LIGHT_GREEN: Rgba<u8> = Rgba([76, 175, 80, 255]);

/// Accent row colour (#81C784).
pub const ACCENT_GREEN: Rgba<u8> = Rgba([129, 199, 132, 255]);

/// Envelope body, slightly translucent.
pub const ENVELOPE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 245]);

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Colour of the gradient ring at `ratio` (0 = centre, 1 = rim).
///
/// Channels are truncated, not rounded, so the ring colours match the
/// reference assets exactly.
pub fn gradient_at(ratio: f32) -> Rgba<u8> {
    let ratio = ratio.clamp(0.0, 1.0);
    let mut out = [0u8; 4];

    for i in 0..3 {
        let from = DARK_GREEN[i] as f32;
        let to = LIGHT_GREEN[i] as f32;
        out[i] = (from + (to - from) * ratio) as u8;
    }
    out[3] = 255;

    Rgba(out)
}

/// Blend `ink` onto `dst` by `coverage` in `[0, 1]`, alpha included.
#[inline]
pub fn blend_coverage(dst: &mut Rgba<u8>, ink: Rgba<u8>, coverage: f32) {
    let c = coverage.clamp(0.0, 1.0);
    for i in 0..4 {
        let v = dst[i] as f32 * (1.0 - c) + ink[i] as f32 * c;
        dst[i] = v.round() as u8;
    }
}

/// Mix `src` into `dst` with the source alpha as the mask, alpha included.
///
/// A translucent source pasted on a transparent canvas keeps its colour
/// scaled by its alpha and ends up with alpha `a * a / 255`.
#[inline]
pub fn mask_blend(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let m = src[3] as u32;
    for i in 0..4 {
        let v = dst[i] as u32 * (255 - m) + src[i] as u32 * m;
        dst[i] = div255(v) as u8;
    }
}

/// `v / 255` rounded to nearest, for `v <= 255 * 255`.
#[inline]
fn div255(v: u32) -> u32 {
    let v = v + 128;
    (v + (v >> 8)) >> 8
}
