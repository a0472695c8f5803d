//! Catalog files
//!
//! A catalog is stored as pretty-printed JSON wrapped in a small envelope
//! carrying the schema version, so older files can be migrated on load and
//! files written by a newer version are refused instead of misread.

use crate::catalog::Catalog;
use bach_core::{CatalogError, CatalogResult, Persistable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ============================================================================
// Constants
// ============================================================================

/// Current schema version of catalog files
pub const SCHEMA_VERSION: u32 = 1;

/// File extension for catalog files
pub const CATALOG_EXTENSION: &str = "bach";

// ============================================================================
// Catalog File Wrapper
// ============================================================================

/// Wrapper for catalog files that includes version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// File format version
    #[serde(default)]
    pub format_version: u32,

    /// When the file was written
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,

    /// The catalog data
    pub catalog: Catalog,
}

impl CatalogFile {
    /// Wrap a catalog for saving now
    pub fn new(catalog: Catalog) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            format_version: 1,
            saved_at: Some(Utc::now()),
            catalog,
        }
    }

    /// Check if migration is needed
    pub fn needs_migration(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }

    /// Migrate to the latest schema version
    ///
    /// Files from a newer version are rejected.
    pub fn migrate(&mut self) -> CatalogResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        while self.schema_version < SCHEMA_VERSION {
            debug!(from = self.schema_version, "Migrating catalog schema");
            self.schema_version += 1;
        }
        Ok(())
    }
}

impl Persistable for CatalogFile {
    fn file_extension() -> &'static str {
        CATALOG_EXTENSION
    }

    fn schema_version() -> u32 {
        SCHEMA_VERSION
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a catalog to a file, creating parent directories as needed
pub fn save_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> CatalogResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    CatalogFile::new(catalog.clone()).save_to_file(path)?;
    info!(path = %path.display(), "Saved catalog");
    Ok(())
}

/// Save a catalog to a JSON string
pub fn save_catalog_to_string(catalog: &Catalog) -> CatalogResult<String> {
    CatalogFile::new(catalog.clone()).to_json()
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a catalog from a file
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::CatalogNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| CatalogError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let catalog = load_catalog_from_string(&json).map_err(|e| match e {
        CatalogError::JsonSerialization(je) => CatalogError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid catalog file format: {}", je),
        },
        other => other,
    })?;
    info!(path = %path.display(), concerts = catalog.concerts().count(), "Loaded catalog");
    Ok(catalog)
}

/// Load a catalog from a JSON string
///
/// A bare catalog object without the envelope is accepted too. An object
/// carrying `schema_version` or `catalog` is always read as an envelope, so
/// a damaged record fails instead of loading as an empty catalog.
pub fn load_catalog_from_string(json: &str) -> CatalogResult<Catalog> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let Some(object) = value.as_object() else {
        return Err(CatalogError::InvalidCatalogFormat(
            "expected a JSON object".to_string(),
        ));
    };

    if !object.contains_key("schema_version") && !object.contains_key("catalog") {
        debug!("Reading catalog without envelope");
        return Ok(serde_json::from_value(value)?);
    }

    // Refuse newer files before their records are parsed
    if let Some(found) = object.get("schema_version").and_then(|v| v.as_u64()) {
        if found > u64::from(SCHEMA_VERSION) {
            return Err(CatalogError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: u32::try_from(found).unwrap_or(u32::MAX),
            });
        }
    }

    let mut file: CatalogFile = serde_json::from_value(value)?;
    file.migrate()?;
    Ok(file.catalog)
}

/// Load a catalog from bytes
pub fn load_catalog_from_bytes(bytes: &[u8]) -> CatalogResult<Catalog> {
    let json = std::str::from_utf8(bytes)
        .map_err(|e| CatalogError::InvalidCatalogFormat(format!("Invalid UTF-8: {}", e)))?;
    load_catalog_from_string(json)
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Check whether a path names a readable catalog file
pub fn is_catalog_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.extension().is_some_and(|e| e == CATALOG_EXTENSION) && load_catalog(path).is_ok()
}

/// Default file name for a catalog
pub fn default_file_name(name: &str) -> String {
    let safe_name: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!("{}.{}", safe_name.to_lowercase(), CATALOG_EXTENSION)
}

/// Ensure a path has the catalog extension
pub fn ensure_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.extension().is_none_or(|e| e != CATALOG_EXTENSION) {
        let mut new_path = path.to_path_buf();
        new_path.set_extension(CATALOG_EXTENSION);
        new_path
    } else {
        path.to_path_buf()
    }
}

/// Copy a catalog file to `<name>.bach.backup` before it is overwritten
pub fn backup_catalog(path: impl AsRef<Path>) -> CatalogResult<Option<PathBuf>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let backup_path = path.with_extension(format!("{}.backup", CATALOG_EXTENSION));

    std::fs::copy(path, &backup_path).map_err(|e| CatalogError::FileWrite {
        path: backup_path.clone(),
        message: format!("Failed to create backup: {}", e),
    })?;

    debug!(backup = %backup_path.display(), "Backed up catalog");
    Ok(Some(backup_path))
}

// ============================================================================
// Tests
// ============================================================================
