//! # Bach Core
//!
//! Core types, traits, and error handling for Bach Tracking.
//!
//! This crate provides the foundational building blocks used by the
//! catalog and the command-line front end, including:
//!
//! - **Types**: record identifiers, `EntityKind`, `Tonality`
//! - **Traits**: `Validatable`, `Persistable`, `Identifiable`, `Named`
//! - **Errors**: unified error handling with `CatalogError` and `CatalogResult`
//! - **Helpers**: Unicode-aware text matching and Portuguese date labels
//!

pub mod dates;
pub mod error;
pub mod text;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{CatalogError, CatalogResult};
pub use traits::{Identifiable, Named, Persistable, Validatable};
pub use types::{
    ArtistId, ArtistTypeId, ComposerId, ConcertId, EntityKind, MusicalFormId, PerformanceId,
    SeriesId, Tonality, VenueId, WorkId,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
