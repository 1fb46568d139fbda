//! Asset exporters.
//!
//! Each exporter renders its fixed list of assets, writes them below the
//! configured project and reports every written path. The first failure
//! aborts the run, so a failed run may leave a partial set of files behind.

use crate::{catalog, config::Config};
use anyhow::{Context, Result};
use badge::{
    CompositeLayout, FontChain, ICON_SIZES, IconContainer, render_badge, render_composite,
    render_icon,
};
use image::{ImageFormat, RgbaImage};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct ExportContext<'a> {
    pub config: &'a Config,
    pub fonts: &'a FontChain,
}

impl<'a> ExportContext<'a> {
    pub fn new(config: &'a Config, fonts: &'a FontChain) -> Self {
        Self { config, fonts }
    }

    /// Assets directory, created if missing.
    fn assets_dir(&self) -> Result<PathBuf> {
        let dir = self.config.assets_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create directory {} failed", dir.display()))?;
        Ok(dir)
    }
}

pub trait Exporter {
    fn name(&self) -> &'static str;

    fn export(&self, ctx: &ExportContext) -> Result<Vec<PathBuf>>;
}

/// App icon: standalone PNGs plus the multi-resolution container, written
/// both to the assets directory and to the application directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconExporter;

impl Exporter for IconExporter {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn export(&self, ctx: &ExportContext) -> Result<Vec<PathBuf>> {
        let assets_dir = ctx.assets_dir()?;
        let app_name = &ctx.config.app_name;

        let mut saved = vec![];
        let mut container = IconContainer::new();

        for size in ICON_SIZES {
            let img = render_icon(size, ctx.fonts)?;

            if catalog::STANDALONE_ICON_SIZES.contains(&size) {
                let path = assets_dir.join(format!("{app_name}_{size}.png"));
                save_png(&img, &path)?;
                saved.push(path);
            }

            container.push(img)?;
        }

        let bytes = container.encode()?;
        let ico_name = format!("{app_name}.ico");

        for path in [
            assets_dir.join(&ico_name),
            ctx.config.app_root().join(&ico_name),
        ] {
            write_file(&path, &bytes)?;
            saved.push(path);
        }

        Ok(saved)
    }
}

/// Store listing assets: the square catalog, the wide tile, the splash screen
/// and the badge logo.
#[derive(Debug, Default, Clone, Copy)]
pub struct StoreExporter;

impl Exporter for StoreExporter {
    fn name(&self) -> &'static str {
        "store"
    }

    fn export(&self, ctx: &ExportContext) -> Result<Vec<PathBuf>> {
        let assets_dir = ctx.assets_dir()?;
        let mut saved = vec![];

        let mut save = |name: &str, img: RgbaImage| -> Result<()> {
            let path = assets_dir.join(format!("{name}.png"));
            save_png(&img, &path)?;
            saved.push(path);
            Ok(())
        };

        for (name, size) in catalog::SQUARE_ASSETS {
            save(name, render_badge(size, catalog::STORE_PADDING, ctx.fonts)?)?;
        }

        save(
            catalog::WIDE_TILE_NAME,
            render_composite(CompositeLayout::WideTile, ctx.fonts)?,
        )?;

        save(
            catalog::SPLASH_NAME,
            render_composite(CompositeLayout::Splash, ctx.fonts)?,
        )?;

        save(
            catalog::BADGE_LOGO_NAME,
            render_badge(
                catalog::BADGE_LOGO_SIZE,
                catalog::BADGE_LOGO_PADDING,
                ctx.fonts,
            )?,
        )?;

        println!("\nAll store assets generated successfully!");
        Ok(saved)
    }
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("save {} failed", path.display()))?;

    println!("Saved: {}", path.display());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {} failed", parent.display()))?;
    }

    fs::write(path, bytes).with_context(|| format!("write {} failed", path.display()))?;

    println!("Saved: {}", path.display());
    Ok(())
}
