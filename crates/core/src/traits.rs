//! Core traits for Bach Tracking
//!
//! This module defines the small set of behaviors shared by catalog
//! records: validation, persistence to JSON files, identity and naming.

use crate::error::{CatalogError, CatalogResult};
use crate::types::EntityKind;
use serde::{Serialize, de::DeserializeOwned};

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use bach_core::{Validatable, CatalogResult, CatalogError};
///
/// struct Venue {
///     name: String,
/// }
///
/// impl Validatable for Venue {
///     fn validate(&self) -> CatalogResult<()> {
///         if self.name.trim().is_empty() {
///             return Err(CatalogError::validation("Name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `CatalogError` describing the problem.
    fn validate(&self) -> CatalogResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Persistable Trait
// ============================================================================

/// Trait for types that can be serialized to and deserialized from files
pub trait Persistable: Serialize + DeserializeOwned + Sized {
    /// Get the file extension for this type (without the dot)
    fn file_extension() -> &'static str;

    /// Get the schema version for migration purposes
    fn schema_version() -> u32 {
        1
    }

    /// Save to a JSON string
    fn to_json(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Load from a JSON string
    fn from_json(json: &str) -> CatalogResult<Self> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Save to a file
    fn save_to_file(&self, path: &std::path::Path) -> CatalogResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| CatalogError::FileWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Identifiable Trait
// ============================================================================

/// Trait for records that have a unique identifier
pub trait Identifiable {
    /// Kind of record, used as the composite identifier prefix
    const KIND: EntityKind;

    /// Get the unique identifier
    fn id(&self) -> uuid::Uuid;

    /// Check if this matches another identifier
    fn matches_id(&self, id: uuid::Uuid) -> bool {
        self.id() == id
    }

    /// Composite identifier in the form `"{kind}.{uuid}"`
    fn composite_id(&self) -> String {
        format!("{}.{}", Self::KIND, self.id())
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Trait for records that have a single editable name
pub trait Named {
    /// Get the name
    fn name(&self) -> &str;

    /// Set the name
    fn set_name(&mut self, name: String);

    /// Check if the name matches (case-insensitive)
    fn name_matches(&self, other: &str) -> bool {
        self.name().to_lowercase() == other.to_lowercase()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct TestValidatable {
        valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self) -> CatalogResult<()> {
            if self.valid {
                Ok(())
            } else {
                Err(CatalogError::validation("Invalid state"))
            }
        }
    }

    #[test]
    fn test_validatable_trait() {
        let valid = TestValidatable { valid: true };
        assert!(valid.is_valid());
        assert!(valid.validation_errors().is_empty());

        let invalid = TestValidatable { valid: false };
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.validation_errors(),
            vec!["Validation error: Invalid state".to_string()]
        );
    }

    #[derive(Serialize, Deserialize)]
    struct Label {
        id: uuid::Uuid,
        name: String,
    }

    impl Identifiable for Label {
        const KIND: EntityKind = EntityKind::Venue;

        fn id(&self) -> uuid::Uuid {
            self.id
        }
    }

    impl Named for Label {
        fn name(&self) -> &str {
            &self.name
        }

        fn set_name(&mut self, name: String) {
            self.name = name;
        }
    }

    impl Persistable for Label {
        fn file_extension() -> &'static str {
            "label"
        }
    }

    #[test]
    fn test_composite_id() {
        let label = Label {
            id: uuid::Uuid::nil(),
            name: "Theatro Municipal".to_string(),
        };
        assert_eq!(
            label.composite_id(),
            "venue.00000000-0000-0000-0000-000000000000"
        );
        assert!(label.matches_id(uuid::Uuid::nil()));
    }

    #[test]
    fn test_named_matches_unicode_case() {
        let mut label = Label {
            id: uuid::Uuid::new_v4(),
            name: "Sala São Paulo".to_string(),
        };
        assert!(label.name_matches("SALA SÃO PAULO"));
        label.set_name("Cidade das Artes".to_string());
        assert_eq!(label.name(), "Cidade das Artes");
    }

    #[test]
    fn test_persistable_json_round_trip() {
        let label = Label {
            id: uuid::Uuid::new_v4(),
            name: "Auditório".to_string(),
        };
        let json = label.to_json().unwrap();
        let back = Label::from_json(&json).unwrap();
        assert_eq!(back.name, "Auditório");
        assert_eq!(Label::schema_version(), 1);
    }
}
