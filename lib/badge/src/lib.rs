//! Procedural badge renderer.
//!
//! Draws the application badge (radial green disc, envelope, flap, `$` glyph and
//! accent rows) onto a transparent RGBA canvas at any pixel size, lays it out on
//! wider canvases and packs renditions into a multi-resolution icon container.

pub mod badge;
pub mod composite;
pub mod container;
pub mod font;
pub mod geometry;
pub mod palette;
pub mod shapes;

pub use badge::{BadgeConfig, render_badge, render_icon};
pub use composite::{CompositeLayout, render_composite};
pub use container::{ICON_SIZES, IconContainer};
pub use font::{FontChain, FontSource, ResolvedFont};
pub use geometry::{Geometry, Layout};

pub type BadgeResult<T> = Result<T, BadgeError>;

#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
