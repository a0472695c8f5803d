//! Command-line settings
//!
//! Settings come from an optional TOML file. Every key may be omitted; a
//! missing file means all defaults.
//!
//! ```toml
//! catalog_path = "/home/ana/concertos.bach"
//! thumbnail_base_url = "https://savioa.github.io/bach-tracking"
//! index_domain = "bachtracking"
//! ```

use bach_catalog::IndexSettings;
use bach_catalog::index::{DEFAULT_INDEX_DOMAIN, DEFAULT_THUMBNAIL_BASE_URL};
use bach_core::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Catalog file used when neither the settings nor the command line name one
pub const DEFAULT_CATALOG_PATH: &str = "catalogo.bach";

/// Settings read from the TOML configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog file
    pub catalog_path: PathBuf,

    /// Where portrait thumbnails are fetched from
    pub thumbnail_base_url: String,

    /// Prefix of search-index domains
    pub index_domain: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            thumbnail_base_url: DEFAULT_THUMBNAIL_BASE_URL.to_string(),
            index_domain: DEFAULT_INDEX_DOMAIN.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(text: &str) -> CatalogResult<Self> {
        toml::from_str(text).map_err(|e| CatalogError::InvalidConfig(e.to_string()))
    }

    /// Load settings from `path`, falling back to defaults when there is no file
    pub fn load(path: Option<&Path>) -> CatalogResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let settings = Self::from_toml(&text)?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Replace the catalog path when one is given
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.catalog_path = path;
        }
        self
    }

    /// Search-index settings derived from these settings
    pub fn index_settings(&self) -> IndexSettings {
        IndexSettings {
            thumbnail_base_url: self.thumbnail_base_url.clone(),
            domain_prefix: self.index_domain.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
