use crate::error::{BrowserError, Result};
use movie_browser_common::BrowseConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 引数省略時に使うカタログJSON
    pub catalog: Option<PathBuf>,
    /// 引数省略時のビューポート幅(px)
    pub width: f64,
    pub browse: BrowseConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            width: 1280.0,
            browse: BrowseConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BrowserError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("movie-browser").join("config.json"))
    }

    /// 引数 > 設定ファイル の順でカタログを決める
    pub fn resolve_catalog(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        let path = arg
            .or_else(|| self.catalog.clone())
            .ok_or(BrowserError::MissingCatalog)?;
        if !path.exists() {
            return Err(BrowserError::CatalogNotFound(path.display().to_string()));
        }
        Ok(path)
    }
}
