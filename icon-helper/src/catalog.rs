//! Fixed asset lists.

/// Icon frames saved as standalone PNGs next to the container.
pub const STANDALONE_ICON_SIZES: [u32; 2] = [32, 256];

pub const STORE_PADDING: f64 = 0.1;

/// Square store logos, rendered with [`STORE_PADDING`].
pub const SQUARE_ASSETS: [(&str, u32); 9] = [
    ("Square44x44Logo", 44),
    ("Square44x44Logo.targetsize-24_altform-unplated", 24),
    ("Square44x44Logo.targetsize-48_altform-unplated", 48),
    ("Square44x44Logo.targetsize-256_altform-unplated", 256),
    ("Square71x71Logo", 71),
    ("Square150x150Logo", 150),
    ("Square310x310Logo", 310),
    ("StoreLogo", 50),
    ("StoreLogo.scale-200", 100),
];

pub const WIDE_TILE_NAME: &str = "Wide310x150Logo";
pub const SPLASH_NAME: &str = "SplashScreen";

pub const BADGE_LOGO_NAME: &str = "BadgeLogo";
pub const BADGE_LOGO_SIZE: u32 = 24;
pub const BADGE_LOGO_PADDING: f64 = 0.05;
