//! Integrity checks for whole catalogs
//!
//! The `Catalog` API keeps a catalog consistent while it is edited, but a
//! catalog file can be written by other tools or by hand. The `Validator`
//! runs a set of rules over a loaded catalog and reports every problem at
//! once, with a path pointing at the offending record.

use crate::catalog::Catalog;
use crate::nameable::{ArtistType, MusicalForm, Nameable, Series, Venue};
use bach_core::{CatalogError, CatalogResult, EntityKind, Identifiable, Named, Validatable};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// ValidationResult
// ============================================================================

/// Result of a validation operation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// List of errors (empty if valid)
    pub errors: Vec<ValidationError>,

    /// List of warnings (non-fatal issues)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, error: ValidationError) {
        self.valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the result
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Merge another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether any error carries the given code
    pub fn has_error_code(&self, code: ValidationErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Convert to CatalogResult (fails if any errors)
    pub fn to_result(self) -> CatalogResult<()> {
        if self.valid {
            Ok(())
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            Err(CatalogError::validation(msg))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

// ============================================================================
// Errors and warnings
// ============================================================================

/// A validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Error code for programmatic handling
    pub code: ValidationErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Path to the problematic record (e.g., "works.<uuid>")
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] {}", path, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

/// Error codes for validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    /// A record failed its own checks (empty name, untitled work, ...)
    InvalidRecord,
    DuplicateName,
    MissingReference,
    /// A concert programme and a performance back-reference disagree
    BrokenProgramme,
    /// A performance credits no artist
    EmptyLineUp,
}

/// A validation warning (non-fatal issue)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub code: ValidationWarningCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: ValidationWarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationWarningCode {
    DetachedPerformance,
    EmptyProgramme,
    UnusedCategory,
}

fn path(kind: EntityKind, id: Uuid) -> String {
    format!("{}.{}", kind.as_str(), id)
}

// ============================================================================
// ValidationRule Trait
// ============================================================================

/// Trait for validation rules
pub trait ValidationRule {
    /// Get the rule name
    fn name(&self) -> &'static str;

    /// Get the rule description
    fn description(&self) -> &'static str;

    /// Validate a catalog and return the result
    fn validate(&self, catalog: &Catalog) -> ValidationResult;
}

// ============================================================================
// Validator
// ============================================================================

/// Catalog validator that runs multiple validation rules
#[derive(Default)]
pub struct Validator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Validator {
    /// Create a validator without rules
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a validator with every built-in rule
    pub fn with_default_rules() -> Self {
        let mut validator = Self::new();
        validator.add_rule(Box::new(RecordsRule));
        validator.add_rule(Box::new(UniqueNamesRule));
        validator.add_rule(Box::new(ReferencesRule));
        validator.add_rule(Box::new(ProgrammesRule));
        validator.add_rule(Box::new(UnusedCategoriesRule));
        validator
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in run order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Validate a catalog with all rules
    pub fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for rule in &self.rules {
            result.merge(rule.validate(catalog));
        }
        result
    }

    /// Validate and return Result
    pub fn validate_result(&self, catalog: &Catalog) -> CatalogResult<()> {
        self.validate(catalog).to_result()
    }
}

impl Validatable for Catalog {
    fn validate(&self) -> CatalogResult<()> {
        Validator::with_default_rules().validate_result(self)
    }

    fn validation_errors(&self) -> Vec<String> {
        Validator::with_default_rules()
            .validate(self)
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect()
    }
}

// ============================================================================
// Built-in Validation Rules
// ============================================================================

/// Rule: every record passes its own checks
pub struct RecordsRule;

fn check_records<'a, T>(result: &mut ValidationResult, records: impl Iterator<Item = &'a T>)
where
    T: Validatable + Identifiable + 'a,
{
    for record in records {
        if let Err(e) = record.validate() {
            result.add_error(
                ValidationError::new(ValidationErrorCode::InvalidRecord, e.to_string())
                    .with_path(path(T::KIND, record.id())),
            );
        }
    }
}

impl ValidationRule for RecordsRule {
    fn name(&self) -> &'static str {
        "records"
    }

    fn description(&self) -> &'static str {
        "Validates names, titles and performance line-ups of every record"
    }

    fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        check_records(&mut result, catalog.composers());
        check_records(&mut result, catalog.works());
        check_records(&mut result, catalog.artist_types());
        check_records(&mut result, catalog.artists());
        check_records(&mut result, catalog.musical_forms());
        check_records(&mut result, catalog.venues());
        check_records(&mut result, catalog.all_series());
        check_records(&mut result, catalog.concerts());
        for performance in catalog.performances().filter(|p| !p.has_artists()) {
            result.add_error(
                ValidationError::new(
                    ValidationErrorCode::EmptyLineUp,
                    format!(
                        "Performance of '{}' needs at least one artist",
                        catalog.performance_label(performance)
                    ),
                )
                .with_path(path(EntityKind::Performance, performance.id)),
            );
        }
        result
    }
}

/// Rule: unique names stay unique
pub struct UniqueNamesRule;

fn check_unique<'a, T: Identifiable + 'a>(
    result: &mut ValidationResult,
    records: impl Iterator<Item = &'a T>,
    name_of: impl Fn(&T) -> &str,
) {
    let mut seen: HashMap<&str, Uuid> = HashMap::new();
    for record in records {
        let name = name_of(record);
        if let Some(first) = seen.get(name) {
            result.add_error(
                ValidationError::new(
                    ValidationErrorCode::DuplicateName,
                    format!(
                        "Duplicate {} name '{}' (also used by {})",
                        T::KIND.as_str(),
                        name,
                        first
                    ),
                )
                .with_path(path(T::KIND, record.id())),
            );
        } else {
            seen.insert(name, record.id());
        }
    }
}

impl ValidationRule for UniqueNamesRule {
    fn name(&self) -> &'static str {
        "unique_names"
    }

    fn description(&self) -> &'static str {
        "Validates that short names and category names are unique"
    }

    fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        check_unique(&mut result, catalog.composers(), |c| c.short_name.as_str());
        check_unique(&mut result, catalog.artists(), |a| a.name());
        check_unique(&mut result, catalog.artist_types(), |t| t.name());
        check_unique(&mut result, catalog.musical_forms(), |f| f.name());
        check_unique(&mut result, catalog.venues(), |v| v.name());
        check_unique(&mut result, catalog.all_series(), |s| s.name());
        result
    }
}

/// Rule: references point at existing records
pub struct ReferencesRule;

impl ReferencesRule {
    fn check(
        result: &mut ValidationResult,
        catalog: &Catalog,
        from: (EntityKind, Uuid),
        to: (EntityKind, Uuid),
    ) {
        if !catalog.contains(to.0, to.1) {
            result.add_error(
                ValidationError::new(
                    ValidationErrorCode::MissingReference,
                    format!("References missing {} {}", to.0.as_str(), to.1),
                )
                .with_path(path(from.0, from.1)),
            );
        }
    }
}

impl ValidationRule for ReferencesRule {
    fn name(&self) -> &'static str {
        "references"
    }

    fn description(&self) -> &'static str {
        "Validates that every reference points at an existing record"
    }

    fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();

        for work in catalog.works() {
            let from = (EntityKind::Work, work.id);
            Self::check(&mut result, catalog, from, (EntityKind::Composer, work.composer));
            if let Some(form) = work.form {
                Self::check(&mut result, catalog, from, (EntityKind::MusicalForm, form));
            }
        }

        for artist in catalog.artists() {
            Self::check(
                &mut result,
                catalog,
                (EntityKind::Artist, artist.id),
                (EntityKind::ArtistType, artist.artist_type),
            );
        }

        for concert in catalog.concerts() {
            let from = (EntityKind::Concert, concert.id);
            Self::check(&mut result, catalog, from, (EntityKind::Venue, concert.venue));
            if let Some(series) = concert.series() {
                Self::check(&mut result, catalog, from, (EntityKind::Series, series));
            }
        }

        for performance in catalog.performances() {
            let from = (EntityKind::Performance, performance.id);
            Self::check(&mut result, catalog, from, (EntityKind::Work, performance.work));
            for artist in &performance.artists {
                Self::check(&mut result, catalog, from, (EntityKind::Artist, *artist));
            }
        }

        result
    }
}

/// Rule: concert programmes and performance back-references agree
pub struct ProgrammesRule;

impl ValidationRule for ProgrammesRule {
    fn name(&self) -> &'static str {
        "programmes"
    }

    fn description(&self) -> &'static str {
        "Validates that each performance is listed by exactly the concert it points at"
    }

    fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        let mut listed_by: HashMap<Uuid, Uuid> = HashMap::new();

        for concert in catalog.concerts() {
            let concert_path = path(EntityKind::Concert, concert.id);
            if concert.performances.is_empty() {
                result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::EmptyProgramme,
                        "Concert has no performances",
                    )
                    .with_path(&concert_path),
                );
            }

            for id in &concert.performances {
                if let Some(other) = listed_by.insert(*id, concert.id) {
                    let message = if other == concert.id {
                        format!("Performance {} is listed twice", id)
                    } else {
                        format!("Performance {} is also listed by concert {}", id, other)
                    };
                    result.add_error(
                        ValidationError::new(ValidationErrorCode::BrokenProgramme, message)
                            .with_path(&concert_path),
                    );
                }

                match catalog.performance(*id) {
                    None => result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::MissingReference,
                            format!("References missing performance {}", id),
                        )
                        .with_path(&concert_path),
                    ),
                    Some(p) if p.concert != Some(concert.id) => result.add_error(
                        ValidationError::new(
                            ValidationErrorCode::BrokenProgramme,
                            format!("Performance {} points at another concert", id),
                        )
                        .with_path(&concert_path),
                    ),
                    Some(_) => {}
                }
            }
        }

        for performance in catalog.performances() {
            let performance_path = path(EntityKind::Performance, performance.id);
            match performance.concert {
                None => result.add_warning(
                    ValidationWarning::new(
                        ValidationWarningCode::DetachedPerformance,
                        "Performance does not belong to any concert",
                    )
                    .with_path(performance_path),
                ),
                Some(concert) if listed_by.get(&performance.id) != Some(&concert) => result
                    .add_error(
                        ValidationError::new(
                            ValidationErrorCode::BrokenProgramme,
                            format!("Concert {} does not list this performance", concert),
                        )
                        .with_path(performance_path),
                    ),
                Some(_) => {}
            }
        }

        result
    }
}

/// Rule: warn about categories nothing uses
pub struct UnusedCategoriesRule;

fn check_unused<T: Nameable>(result: &mut ValidationResult, catalog: &Catalog) {
    for item in T::items(catalog) {
        if item.usage_count(catalog) == 0 {
            result.add_warning(
                ValidationWarning::new(
                    ValidationWarningCode::UnusedCategory,
                    format!("'{}' has no {}", item.name(), T::DEPENDENT_LABEL.to_lowercase()),
                )
                .with_path(path(T::KIND, item.id())),
            );
        }
    }
}

impl ValidationRule for UnusedCategoriesRule {
    fn name(&self) -> &'static str {
        "unused_categories"
    }

    fn description(&self) -> &'static str {
        "Warns about artist types, forms, venues and series without dependents"
    }

    fn validate(&self, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::ok();
        check_unused::<ArtistType>(&mut result, catalog);
        check_unused::<MusicalForm>(&mut result, catalog);
        check_unused::<Venue>(&mut result, catalog);
        check_unused::<Series>(&mut result, catalog);
        result
    }
}

// ============================================================================
// Tests
// ============================================================================
