use anyhow::{Context, Result};
use badge::{FontChain, font::DEFAULT_FONTS};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    /// Directory the `src/<app_dir>` tree hangs off.
    #[derivative(Default(value = "PathBuf::from(\".\")"))]
    pub project_root: PathBuf,

    #[derivative(Default(value = "\"BudgetWise.App\".to_string()"))]
    pub app_dir: String,

    /// File stem of the icon outputs.
    #[derivative(Default(value = "\"BudgetWise\".to_string()"))]
    pub app_name: String,

    /// Font names or paths tried in order before the built-in font.
    #[derivative(Default(value = "fonts_default()"))]
    pub fonts: Vec<String>,

    /// Searched before the platform font directories.
    pub font_dirs: Vec<PathBuf>,
}

fn fonts_default() -> Vec<String> {
    DEFAULT_FONTS.iter().map(|s| s.to_string()).collect()
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {} failed", path.display()))?;

        let config: Config = toml::from_str(&text)
            .with_context(|| format!("parse config {} failed", path.display()))?;

        log::debug!("{config:?}");
        Ok(config)
    }

    /// `<project_root>/src/<app_dir>`
    pub fn app_root(&self) -> PathBuf {
        self.project_root.join("src").join(&self.app_dir)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.app_root().join("Assets")
    }

    pub fn font_chain(&self) -> FontChain {
        FontChain::from_names(&self.fonts, &self.font_dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge::FontSource;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app_name, "BudgetWise");
        assert_eq!(
            config.assets_dir(),
            PathBuf::from("./src/BudgetWise.App/Assets")
        );
        assert_eq!(config.fonts, vec!["segoeui.ttf", "arial.ttf"]);
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("icon-helper.toml");
        fs::write(
            &path,
            r#"
project_root = "/tmp/project"
app_name = "Ledger"
fonts = []
"#,
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.app_name, "Ledger");
        assert_eq!(config.app_dir, "BudgetWise.App");
        assert_eq!(config.app_root(), PathBuf::from("/tmp/project/src/BudgetWise.App"));

        let sources: Vec<_> = config.font_chain().sources().cloned().collect();
        assert_eq!(sources, vec![FontSource::Builtin]);
        Ok(())
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        assert!(Config::load(dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        fs::write(&path, "fonts = 3").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
