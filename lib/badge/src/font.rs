//! Font resolution and single-line glyph rendering.
//!
//! A [`FontChain`] is an ordered list of [`FontSource`] attempts. The first
//! source that yields a usable font wins; the built-in bitmap font always
//! succeeds, so resolution itself never fails.

use crate::palette;
use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};
use walkdir::WalkDir;

/// Font names tried before the built-in font when nothing is configured.
pub const DEFAULT_FONTS: [&str; 2] = ["segoeui.ttf", "arial.ttf"];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Font file at an explicit location.
    Path(PathBuf),

    /// File name looked up in the chain's search directories.
    Named(String),

    /// Fixed-size bitmap font compiled into the crate.
    Builtin,
}

impl FontSource {
    /// Existing paths load directly, anything else is a name to search for.
    pub fn parse(spec: &str) -> Self {
        let path = Path::new(spec);
        if path.is_file() {
            FontSource::Path(path.to_path_buf())
        } else {
            FontSource::Named(spec.to_string())
        }
    }
}

#[derive(Debug)]
struct Candidate {
    source: FontSource,
    loaded: OnceLock<Option<FontArc>>,
}

/// Ordered font fallback chain.
///
/// Parsed fonts are cached per source, so resolving the same chain for many
/// badge sizes only touches the filesystem once.
#[derive(Debug)]
pub struct FontChain {
    candidates: Vec<Candidate>,
    search_dirs: Vec<PathBuf>,
}

impl Default for FontChain {
    fn default() -> Self {
        let names: Vec<String> = DEFAULT_FONTS.iter().map(|s| s.to_string()).collect();
        Self::from_names(&names, &[])
    }
}

impl FontChain {
    pub fn new(sources: Vec<FontSource>, search_dirs: Vec<PathBuf>) -> Self {
        let candidates = sources
            .into_iter()
            .map(|source| Candidate {
                source,
                loaded: OnceLock::new(),
            })
            .collect();

        Self {
            candidates,
            search_dirs,
        }
    }

    /// Chain over `names` in order, terminated by the built-in font.
    ///
    /// `extra_dirs` are searched before the platform font directories.
    pub fn from_names(names: &[String], extra_dirs: &[PathBuf]) -> Self {
        let mut sources: Vec<FontSource> = names.iter().map(|n| FontSource::parse(n)).collect();
        sources.push(FontSource::Builtin);

        let mut dirs = extra_dirs.to_vec();
        dirs.extend(platform_font_dirs());

        Self::new(sources, dirs)
    }

    pub fn builtin_only() -> Self {
        Self::new(vec![FontSource::Builtin], vec![])
    }

    pub fn sources(&self) -> impl Iterator<Item = &FontSource> {
        self.candidates.iter().map(|c| &c.source)
    }

    /// Resolve a font for an em size of `size` pixels.
    pub fn resolve(&self, size: u32) -> ResolvedFont {
        if size == 0 {
            log::debug!("font size 0, using built-in font");
            return ResolvedFont::Builtin;
        }

        for candidate in &self.candidates {
            if candidate.source == FontSource::Builtin {
                break;
            }

            let loaded = candidate
                .loaded
                .get_or_init(|| self.load(&candidate.source));

            if let Some(font) = loaded {
                return ResolvedFont::truetype(font.clone(), size);
            }
        }

        ResolvedFont::Builtin
    }

    fn load(&self, source: &FontSource) -> Option<FontArc> {
        let path = match source {
            FontSource::Path(path) => path.clone(),
            FontSource::Named(name) => match find_font_file(name, &self.search_dirs) {
                Some(path) => path,
                None => {
                    log::debug!("font {name} not found");
                    return None;
                }
            },
            FontSource::Builtin => return None,
        };

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("read font {} failed: {e}", path.display());
                return None;
            }
        };

        match FontArc::try_from_vec(data) {
            Ok(font) => {
                log::debug!("using font {}", path.display());
                Some(font)
            }
            Err(e) => {
                log::debug!("parse font {} failed: {e}", path.display());
                None
            }
        }
    }
}

/// Directories the platform keeps fonts in, existing ones only.
pub fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    if let Ok(windir) = env::var("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }

    if let Ok(home) = env::var("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }

    let data_dirs =
        env::var("XDG_DATA_DIRS").unwrap_or_else(|_| "/usr/local/share:/usr/share".to_string());
    for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
        dirs.push(PathBuf::from(dir).join("fonts"));
    }

    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));

    dirs.into_iter().filter(|d| d.is_dir()).collect()
}

/// Search `dirs` recursively for a file called `name`, ignoring case.
///
/// A name without an extension also matches the usual font extensions.
pub fn find_font_file(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let wanted = name.to_lowercase();
    let has_extension = Path::new(name).extension().is_some();

    let matches = |file_name: &str| {
        let file_name = file_name.to_lowercase();
        if file_name == wanted {
            return true;
        }

        !has_extension
            && FONT_EXTENSIONS
                .iter()
                .any(|ext| file_name == format!("{wanted}.{ext}"))
    };

    dirs.iter().find_map(|dir| {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .find(|e| matches(&e.file_name().to_string_lossy()))
            .map(|e| e.into_path())
    })
}

/// Ink bounding box of a text run, relative to the run's origin (line top,
/// left edge). `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    fn union(self, other: TextBox) -> TextBox {
        TextBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ResolvedFont {
    Truetype { font: FontArc, scale: PxScale },
    Builtin,
}

impl ResolvedFont {
    /// Scale the font so one em spans `em_px` pixels.
    pub fn truetype(font: FontArc, em_px: u32) -> Self {
        let upem = font.units_per_em().unwrap_or(1000.0);
        let scale = PxScale::from(em_px as f32 * font.height_unscaled() / upem);
        ResolvedFont::Truetype { font, scale }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, ResolvedFont::Builtin)
    }

    /// `None` when the text has no ink at all (empty or whitespace).
    pub fn text_bbox(&self, text: &str) -> Option<TextBox> {
        match self {
            ResolvedFont::Truetype { font, scale } => layout(font, *scale, text, (0.0, 0.0))
                .into_iter()
                .filter_map(|g| font.outline_glyph(g))
                .map(|o| {
                    let b = o.px_bounds();
                    TextBox {
                        left: b.min.x as i32,
                        top: b.min.y as i32,
                        right: b.max.x as i32,
                        bottom: b.max.y as i32,
                    }
                })
                .reduce(TextBox::union),
            ResolvedFont::Builtin => builtin::text_bbox(text),
        }
    }

    /// Draw `text` with its line top-left at `origin`, blending glyph coverage
    /// onto the canvas. Pixels outside the canvas are dropped.
    pub fn draw_text(
        &self,
        canvas: &mut RgbaImage,
        origin: (i32, i32),
        text: &str,
        color: Rgba<u8>,
    ) {
        match self {
            ResolvedFont::Truetype { font, scale } => {
                let origin_f = (origin.0 as f32, origin.1 as f32);
                for glyph in layout(font, *scale, text, origin_f) {
                    let Some(outline) = font.outline_glyph(glyph) else {
                        continue;
                    };

                    let bounds = outline.px_bounds();
                    outline.draw(|gx, gy, coverage| {
                        let x = bounds.min.x as i32 + gx as i32;
                        let y = bounds.min.y as i32 + gy as i32;
                        blend_at(canvas, x, y, color, coverage);
                    });
                }
            }
            ResolvedFont::Builtin => builtin::draw_text(canvas, origin, text, color),
        }
    }
}

fn layout(font: &FontArc, scale: PxScale, text: &str, origin: (f32, f32)) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let baseline = origin.1 + scaled.ascent();

    let mut caret = origin.0;
    let mut previous = None;
    let mut glyphs = vec![];

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }

        glyphs.push(id.with_scale_and_position(scale, point(caret, baseline)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    glyphs
}

fn blend_at(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    palette::blend_coverage(canvas.get_pixel_mut(x as u32, y as u32), color, coverage);
}

mod builtin {
    //! 6x11 bitmap font. Only the glyphs the badge needs are defined;
    //! anything else renders as a hollow box.

    use super::{TextBox, blend_at};
    use image::{Rgba, RgbaImage};

    pub const ADVANCE: i32 = 6;
    pub const HEIGHT: usize = 11;

    // Bit 4 is the leftmost column.
    const DOLLAR: [u8; HEIGHT] = [
        0b00000, 0b00100, 0b01111, 0b10100, 0b10100, 0b01110, 0b00101, 0b00101, 0b11110, 0b00100,
        0b00000,
    ];

    const MISSING: [u8; HEIGHT] = [
        0b00000, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111, 0b00000,
        0b00000,
    ];

    fn rows(c: char) -> Option<&'static [u8; HEIGHT]> {
        match c {
            ' ' => None,
            '$' => Some(&DOLLAR),
            _ => Some(&MISSING),
        }
    }

    fn lit_pixels(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
        text.chars().enumerate().flat_map(|(i, c)| {
            let cell_x = i as i32 * ADVANCE;
            rows(c).into_iter().flat_map(move |rows| {
                rows.iter().enumerate().flat_map(move |(row, &bits)| {
                    (0..5i32)
                        .filter(move |&col| bits & (0b10000u8 >> col) != 0)
                        .map(move |col| (cell_x + col, row as i32))
                })
            })
        })
    }

    pub fn text_bbox(text: &str) -> Option<TextBox> {
        lit_pixels(text)
            .map(|(x, y)| TextBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            })
            .reduce(TextBox::union)
    }

    pub fn draw_text(canvas: &mut RgbaImage, origin: (i32, i32), text: &str, color: Rgba<u8>) {
        for (x, y) in lit_pixels(text) {
            blend_at(canvas, origin.0 + x, origin.1 + y, color, 1.0);
        }
    }
}
