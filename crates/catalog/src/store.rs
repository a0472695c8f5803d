//! A catalog bound to its file
//!
//! Edits go to the in-memory [`Catalog`]; nothing reaches the disk until
//! [`CatalogStore::commit`] is called.

use crate::catalog::Catalog;
use crate::serialization::{backup_catalog, load_catalog, save_catalog};
use bach_core::CatalogResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog plus the file it is saved to
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    catalog: Catalog,
    dirty: bool,
}

impl CatalogStore {
    /// Open an existing catalog file
    pub fn open(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref().to_path_buf();
        let catalog = load_catalog(&path)?;
        Ok(Self {
            path,
            catalog,
            dirty: false,
        })
    }

    /// Open a catalog file, starting empty when it does not exist yet
    ///
    /// A new store is dirty so the first commit creates the file.
    pub fn open_or_create(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }
        debug!(path = %path.display(), "Starting a new catalog");
        Ok(Self {
            path: path.to_path_buf(),
            catalog: Catalog::new(),
            dirty: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access; marks the store as having unsaved changes
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        self.dirty = true;
        &mut self.catalog
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the catalog, keeping a backup of the previous file
    pub fn commit(&mut self) -> CatalogResult<()> {
        backup_catalog(&self.path)?;
        save_catalog(&self.catalog, &self.path)?;
        self.dirty = false;
        info!(path = %self.path.display(), "Committed catalog");
        Ok(())
    }

    /// Drop unsaved changes by reloading the file
    ///
    /// A store whose file was never written goes back to an empty catalog.
    pub fn discard(&mut self) -> CatalogResult<()> {
        self.catalog = if self.path.exists() {
            load_catalog(&self.path)?
        } else {
            Catalog::new()
        };
        self.dirty = false;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
