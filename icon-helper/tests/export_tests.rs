// cargo test -p icon-helper --test export_tests

use ico::IconDir;
use icon_helper::{Config, ExportContext, Exporter, IconExporter, StoreExporter, catalog};
use std::{fs, io::Cursor, path::Path};
use tempfile::tempdir;

fn test_config(root: &Path) -> Config {
    Config {
        project_root: root.to_path_buf(),
        fonts: vec![],
        ..Default::default()
    }
}

#[test]
fn test_store_export_writes_twelve_assets() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());
    let fonts = config.font_chain();

    assert!(!config.assets_dir().exists());
    let saved = StoreExporter
        .export(&ExportContext::new(&config, &fonts))
        .unwrap();

    assert!(config.assets_dir().is_dir());
    assert_eq!(saved.len(), 12);
    assert_eq!(fs::read_dir(config.assets_dir()).unwrap().count(), 12);

    for path in &saved {
        assert!(fs::metadata(path).unwrap().len() > 0, "{}", path.display());
    }

    for (name, size) in catalog::SQUARE_ASSETS {
        let img = image::open(config.assets_dir().join(format!("{name}.png"))).unwrap();
        assert_eq!((img.width(), img.height()), (size, size), "{name}");
    }

    let wide = image::open(config.assets_dir().join("Wide310x150Logo.png")).unwrap();
    assert_eq!((wide.width(), wide.height()), (310, 150));

    let splash = image::open(config.assets_dir().join("SplashScreen.png")).unwrap();
    assert_eq!((splash.width(), splash.height()), (620, 300));

    let badge = image::open(config.assets_dir().join("BadgeLogo.png")).unwrap();
    assert_eq!((badge.width(), badge.height()), (24, 24));
}

#[test]
fn test_store_assets_have_transparent_corners() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());
    let fonts = config.font_chain();

    let saved = StoreExporter
        .export(&ExportContext::new(&config, &fonts))
        .unwrap();

    for path in saved {
        let img = image::open(&path).unwrap().to_rgba8();
        let (w, h) = img.dimensions();
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "{} ({x}, {y})", path.display());
        }
    }
}

#[test]
fn test_icon_export() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());
    let fonts = config.font_chain();

    let saved = IconExporter
        .export(&ExportContext::new(&config, &fonts))
        .unwrap();

    let assets = config.assets_dir();
    let assets_ico = assets.join("BudgetWise.ico");
    let root_ico = config.app_root().join("BudgetWise.ico");
    assert_eq!(
        saved,
        vec![
            assets.join("BudgetWise_32.png"),
            assets.join("BudgetWise_256.png"),
            assets_ico.clone(),
            root_ico.clone(),
        ]
    );

    let png_32 = image::open(assets.join("BudgetWise_32.png")).unwrap();
    assert_eq!((png_32.width(), png_32.height()), (32, 32));
    let png_256 = image::open(assets.join("BudgetWise_256.png")).unwrap();
    assert_eq!((png_256.width(), png_256.height()), (256, 256));

    let bytes = fs::read(&assets_ico).unwrap();
    assert_eq!(bytes, fs::read(&root_ico).unwrap());

    let icon = IconDir::read(Cursor::new(bytes)).unwrap();
    let sizes: Vec<_> = icon.entries().iter().map(|e| (e.width(), e.height())).collect();
    assert_eq!(
        sizes,
        vec![
            (16, 16),
            (24, 24),
            (32, 32),
            (48, 48),
            (64, 64),
            (128, 128),
            (256, 256)
        ]
    );
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    let config = test_config(dir.path());
    let fonts = config.font_chain();
    let ctx = ExportContext::new(&config, &fonts);

    let exporters: [&dyn Exporter; 2] = [&IconExporter, &StoreExporter];

    let first: Vec<_> = exporters
        .iter()
        .flat_map(|e| e.export(&ctx).unwrap())
        .map(|p| (p.clone(), fs::read(&p).unwrap()))
        .collect();

    let second: Vec<_> = exporters
        .iter()
        .flat_map(|e| e.export(&ctx).unwrap())
        .map(|p| (p.clone(), fs::read(&p).unwrap()))
        .collect();

    assert_eq!(first.len(), 16);
    assert_eq!(first, second);
}

#[test]
fn test_unwritable_project_root_fails() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, b"file").unwrap();

    let config = test_config(&blocker);
    let fonts = config.font_chain();

    assert!(
        StoreExporter
            .export(&ExportContext::new(&config, &fonts))
            .is_err()
    );
}
