//! # Bach Catalog
//!
//! The catalog of attended concerts: records, the object graph that ties
//! them together, and everything derived from it on read.
//!
//! ## Core Concepts
//!
//! - **Composer / Work**: a work belongs to one composer; its display titles
//!   are derived from its descriptive fields
//! - **Artist / ArtistType**: performers, grouped by a free-form type
//! - **Concert**: a dated event at a venue, optionally part of a series,
//!   owning an ordered programme of performances
//! - **Performance**: one work played by one or more artists, possibly as
//!   an encore
//! - **Catalog**: the root container holding every record
//!

// Module declarations
pub mod artist;
pub mod catalog;
pub mod composer;
pub mod concert;
pub mod deep_link;
pub mod export;
pub mod index;
pub mod nameable;
pub mod performance;
pub mod relations;
pub mod reminder;
pub mod search;
pub mod serialization;
pub mod store;
pub mod titles;
pub mod validation;
pub mod work;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at crate root
pub use artist::Artist;
pub use catalog::Catalog;
pub use composer::Composer;
pub use concert::Concert;
pub use deep_link::{DeepLinkResolver, Destination, ItemIdentifier, navigation_channel, resolve};
pub use export::{ConcertDto, export_concerts, export_json, write_export};
pub use index::{
    InMemoryIndex, IndexSettings, NoThumbnails, SearchIndex, SearchIndexer, SearchableItem,
    ThumbnailSource,
};
pub use nameable::{
    ArtistType, DependentItem, MusicalForm, Nameable, NameableRow, Series, Venue,
    nameable_summary, rename_nameable,
};
pub use performance::Performance;
pub use reminder::{AnniversaryReminder, PendingReminders, ReminderScheduler, anniversary_reminder};
pub use search::{SearchResults, search_catalog, text_search};
pub use serialization::{CATALOG_EXTENSION, SCHEMA_VERSION, load_catalog, save_catalog};
pub use store::CatalogStore;
pub use titles::{WorkTitleParts, WorkTitles, derive_concert_title, derive_work_title};
pub use validation::{ValidationResult, ValidationRule, Validator};
pub use work::Work;

// Re-export core types that are commonly used with the catalog
pub use bach_core::{
    ArtistId, ArtistTypeId, CatalogError, CatalogResult, ComposerId, ConcertId, EntityKind,
    MusicalFormId, PerformanceId, SeriesId, Tonality, VenueId, WorkId,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        Artist,
        ArtistType,
        // Re-exported from core
        CatalogError,
        CatalogResult,
        // Records
        Catalog,
        CatalogStore,
        Composer,
        Concert,
        EntityKind,
        MusicalForm,
        Nameable,
        Performance,
        Series,
        Tonality,
        Venue,
        Work,
        WorkTitles,
        // Queries
        search_catalog,
    };
    pub use crate::relations::{
        artists_of, composers_of, concerts_of_artist, concerts_of_work, find_next_concert,
        find_previous_year_concert, group_by_year_month, performances_ordered, works_of_composer,
    };
    pub use bach_core::{Identifiable, Named, Validatable};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version() {
        assert_eq!(SCHEMA_VERSION, 1);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(CATALOG_EXTENSION, "bach");
    }
}
