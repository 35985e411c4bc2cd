use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RuntimeResult;

/// Catalog bootstrap settings, usually read from TOML.
///
/// ```toml
/// default_locale = "en"
/// default_tag = "en-US"
///
/// [[locales]]
/// id = "fa"
/// tag = "fa-IR"
/// sources = ["locales/fa.json"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub default_locale: String,
    #[serde(default)]
    pub default_tag: Option<String>,
    #[serde(default)]
    pub locales: Vec<LocaleConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    pub id: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl CatalogConfig {
    /// Tag for the default locale; the locale id doubles as its tag.
    pub fn default_tag(&self) -> &str {
        self.default_tag.as_deref().unwrap_or(&self.default_locale)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            default_tag: None,
            locales: Vec::new(),
        }
    }
}

pub fn load_config(path: &Path) -> RuntimeResult<CatalogConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<CatalogConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CatalogConfig::default())
    }
}
