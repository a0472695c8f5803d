//! Composer records

use bach_core::{CatalogError, CatalogResult, ComposerId, EntityKind, Identifiable, Validatable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A composer, owner of zero or more works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composer {
    /// Unique identifier
    pub id: ComposerId,

    /// Full name as shown in detail screens ("Johann Sebastian Bach")
    pub full_name: String,

    /// Unique short name used in lists and summaries ("Bach")
    pub short_name: String,
}

impl Composer {
    /// Create a new composer, trimming both names
    pub fn new(full_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.into().trim().to_string(),
            short_name: short_name.into().trim().to_string(),
        }
    }

    /// Set a specific identifier (used when importing)
    pub fn with_id(mut self, id: ComposerId) -> Self {
        self.id = id;
        self
    }
}

impl Identifiable for Composer {
    const KIND: EntityKind = EntityKind::Composer;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Validatable for Composer {
    fn validate(&self) -> CatalogResult<()> {
        if self.short_name.trim().is_empty() {
            return Err(CatalogError::record_validation(
                EntityKind::Composer.as_str(),
                &self.full_name,
                "short name cannot be empty",
            ));
        }
        if self.full_name.trim().is_empty() {
            return Err(CatalogError::record_validation(
                EntityKind::Composer.as_str(),
                &self.short_name,
                "full name cannot be empty",
            ));
        }
        Ok(())
    }
}
