//! Error types for Bach Tracking
//!
//! This module provides unified error handling for the catalog, the file
//! format and the command-line front end. Title derivation and relation
//! aggregation never produce errors; everything that can fail (inserts that
//! break uniqueness, guarded deletes, file IO) reports a `CatalogError`.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Bach Tracking
#[derive(Debug, Error)]
pub enum CatalogError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record failed validation
    #[error("Validation failed for {kind} '{name}': {message}")]
    RecordValidation {
        kind: String,
        name: String,
        message: String,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Record not found
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// A record points at another record that does not exist
    #[error("{kind} '{id}' references missing {target}")]
    DanglingReference {
        kind: String,
        id: String,
        target: String,
    },

    /// Catalog file not found
    #[error("Catalog not found at path: {0}")]
    CatalogNotFound(PathBuf),

    // ========================================================================
    // Integrity Errors
    // ========================================================================
    /// Unique name already taken
    #[error("Duplicate {kind} name: '{name}' already exists")]
    DuplicateName { kind: String, name: String },

    /// Record cannot be deleted while others depend on it
    #[error("{kind} '{name}' still has {count} dependent record(s)")]
    HasDependents {
        kind: String,
        name: String,
        count: usize,
    },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid catalog file format
    #[error("Invalid catalog file format: {0}")]
    InvalidCatalogFormat(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CatalogError::Validation(msg.into())
    }

    /// Create a record validation error
    pub fn record_validation(
        kind: impl Into<String>,
        name: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        CatalogError::RecordValidation {
            kind: kind.into(),
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(kind: impl Into<String>, id: impl ToString) -> Self {
        CatalogError::NotFound {
            kind: kind.into(),
            id: id.to_string(),
        }
    }

    /// Create a dangling reference error
    pub fn dangling(kind: impl Into<String>, id: impl ToString, target: impl Into<String>) -> Self {
        CatalogError::DanglingReference {
            kind: kind.into(),
            id: id.to_string(),
            target: target.into(),
        }
    }

    /// Create a duplicate name error
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        CatalogError::DuplicateName {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::Validation(_)
                | CatalogError::RecordValidation { .. }
                | CatalogError::DuplicateName { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. }
                | CatalogError::DanglingReference { .. }
                | CatalogError::CatalogNotFound(_)
        )
    }
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// Tests
// ============================================================================
