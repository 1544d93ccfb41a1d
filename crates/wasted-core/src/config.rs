use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::Catalog;
use crate::error::Result;

/// Storefront settings, read from a TOML file. Every field has a default so
/// a partial (or empty) file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory that site paths like `/Tees/...` resolve under.
    pub asset_root: PathBuf,
    /// External catalog file; the built-in catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Base URL for share and "3D View" links.
    pub site_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            catalog: None,
            site_url: "http://localhost:3000/".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config file. Relative paths inside it are taken relative to
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.asset_root = dir.join(&config.asset_root);
            config.catalog = config.catalog.map(|c| dir.join(c));
        }
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn site(&self) -> Result<Url> {
        Ok(Url::parse(&self.site_url)?)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
