//! Badge layout arithmetic.
//!
//! Every coordinate is derived from the canvas size and the layout with integer
//! truncation, so a given `(size, layout)` always yields the same pixels.

use crate::{BadgeError, BadgeResult};

/// How the badge fills its canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    /// App icon layout: a fixed `size / 16` margin around the disc and
    /// size-proportional envelope placement.
    Icon,

    /// Store layout: `size * ratio` is left empty on every edge and the
    /// remaining area is scaled from a 256 px reference drawing.
    Padded(f64),
}

impl Layout {
    pub fn validate(&self) -> BadgeResult<()> {
        match *self {
            Layout::Icon => Ok(()),
            Layout::Padded(ratio) if ratio.is_finite() && (0.0..1.0).contains(&ratio) => Ok(()),
            Layout::Padded(ratio) => Err(BadgeError::InvalidParameter(format!(
                "padding ratio {ratio} outside [0, 1)"
            ))),
        }
    }
}

/// Inclusive pixel box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl Segment {
    fn horizontal(y: i32, x0: i32, x1: i32) -> Self {
        Self {
            start: (x0, y),
            end: (x1, y),
        }
    }
}

/// Resolved positions and sizes for one badge rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub size: u32,
    pub center: i32,
    pub circle_radius: i32,
    pub envelope: Bounds,
    pub corner_radius: i32,
    pub flap: [(i32, i32); 3],
    pub flap_width: u32,
    pub font_size: u32,
    pub accent_width: u32,
    pub accents: [Segment; 2],
}

impl Geometry {
    pub fn new(size: u32, layout: Layout) -> BadgeResult<Self> {
        if size == 0 {
            return Err(BadgeError::InvalidParameter(
                "badge size must be positive".to_string(),
            ));
        }
        if i32::try_from(size).is_err() {
            return Err(BadgeError::InvalidParameter(format!(
                "badge size {size} is too large"
            )));
        }
        layout.validate()?;

        Ok(match layout {
            Layout::Icon => Self::icon(size),
            Layout::Padded(ratio) => Self::padded(size, ratio),
        })
    }

    fn icon(size: u32) -> Self {
        let s = size as i32;
        let margin = s / 16;
        let center = s / 2;

        let envelope = Bounds {
            left: s / 5,
            top: s / 4,
            right: s - s / 5,
            bottom: s - s / 6,
        };
        let flap_y = envelope.top + s / 16;
        let accent_y = (size as f64 * 0.58) as i32;

        Self {
            size,
            center,
            circle_radius: s / 2 - margin,
            envelope,
            corner_radius: s / 20,
            flap: [
                (envelope.left, flap_y),
                (center, center - s / 16),
                (envelope.right, flap_y),
            ],
            flap_width: (s / 40).max(2) as u32,
            font_size: (s / 3) as u32,
            accent_width: (s / 50).max(1) as u32,
            accents: [
                Segment::horizontal(accent_y, envelope.left + s / 10, center - s / 8),
                Segment::horizontal(accent_y, center + s / 8, s - envelope.left - s / 10),
            ],
        }
    }

    fn padded(size: u32, ratio: f64) -> Self {
        let s = size as i32;
        let padding = (size as f64 * ratio) as i32;
        let effective = s - 2 * padding;
        let center = s / 2;

        // Reference drawing is 256 px wide.
        let scale = effective as f64 / 256.0;
        let scaled = |v: f64| (v * scale) as i32;

        let left = scaled(51.0) + padding;
        let envelope = Bounds {
            left,
            top: scaled(64.0) + padding,
            right: s - left,
            bottom: s - scaled(43.0) - padding,
        };
        let flap_offset = scaled(6.0);
        let accent_y = (size as f64 * 0.58) as i32;

        Self {
            size,
            center,
            circle_radius: effective.div_euclid(2),
            envelope,
            corner_radius: scaled(13.0),
            flap: [
                (envelope.left, envelope.top + flap_offset),
                (center, center - flap_offset),
                (envelope.right, envelope.top + flap_offset),
            ],
            flap_width: flap_offset.max(2) as u32,
            font_size: scaled(85.0).max(0) as u32,
            accent_width: scaled(4.0).max(1) as u32,
            accents: [
                Segment::horizontal(accent_y, left + scaled(26.0), center - scaled(32.0)),
                Segment::horizontal(accent_y, center + scaled(32.0), s - left - scaled(26.0)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_geometry_256() {
        let g = Geometry::new(256, Layout::Icon).unwrap();

        assert_eq!(g.center, 128);
        assert_eq!(g.circle_radius, 112);
        assert_eq!(
            g.envelope,
            Bounds {
                left: 51,
                top: 64,
                right: 205,
                bottom: 214
            }
        );
        assert_eq!(g.corner_radius, 12);
        assert_eq!(g.flap, [(51, 80), (128, 112), (205, 80)]);
        assert_eq!(g.flap_width, 6);
        assert_eq!(g.font_size, 85);
        assert_eq!(g.accent_width, 5);
        assert_eq!(g.accents[0], Segment::horizontal(148, 76, 96));
        assert_eq!(g.accents[1], Segment::horizontal(148, 160, 180));
    }

    #[test]
    fn test_icon_geometry_16_clamps_strokes() {
        let g = Geometry::new(16, Layout::Icon).unwrap();

        assert_eq!(g.circle_radius, 7);
        assert_eq!(g.flap_width, 2);
        assert_eq!(g.accent_width, 1);
        assert_eq!(g.font_size, 5);
    }

    #[test]
    fn test_padded_geometry_matches_reference_at_full_scale() {
        // 320 px with 0.1 padding leaves a 256 px drawing area, scale 1.0.
        let g = Geometry::new(320, Layout::Padded(0.1)).unwrap();

        assert_eq!(g.circle_radius, 128);
        assert_eq!(
            g.envelope,
            Bounds {
                left: 83,
                top: 96,
                right: 237,
                bottom: 245
            }
        );
        assert_eq!(g.corner_radius, 13);
        assert_eq!(g.flap, [(83, 102), (160, 154), (237, 102)]);
        assert_eq!(g.flap_width, 6);
        assert_eq!(g.font_size, 85);
        assert_eq!(g.accent_width, 4);
        assert_eq!(g.accents[0], Segment::horizontal(185, 109, 128));
        assert_eq!(g.accents[1], Segment::horizontal(185, 192, 211));
    }

    #[test]
    fn test_padded_geometry_small_badge() {
        let g = Geometry::new(24, Layout::Padded(0.05)).unwrap();

        assert_eq!(g.circle_radius, 11);
        assert_eq!(g.flap_width, 2);
        assert_eq!(g.accent_width, 1);
        assert_eq!(g.font_size, 7);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            Geometry::new(0, Layout::Icon),
            Err(BadgeError::InvalidParameter(_))
        ));
        assert!(Geometry::new(32, Layout::Padded(1.0)).is_err());
        assert!(Geometry::new(32, Layout::Padded(-0.1)).is_err());
        assert!(Geometry::new(32, Layout::Padded(f64::NAN)).is_err());
    }

    #[test]
    fn test_oversized_badge_is_rejected() {
        let max = i32::MAX as u32;
        assert!(Geometry::new(max, Layout::Icon).is_ok());
        assert!(matches!(
            Geometry::new(max + 1, Layout::Icon),
            Err(BadgeError::InvalidParameter(_))
        ));
        assert!(matches!(
            Geometry::new(u32::MAX, Layout::Padded(0.1)),
            Err(BadgeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_bounds_size_is_inclusive() {
        let b = Bounds {
            left: 2,
            top: 3,
            right: 2,
            bottom: 7,
        };
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 5);
    }
}
