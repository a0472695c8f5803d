//! Simple named categories
//!
//! Artist types, musical forms, venues and series are bare named records
//! that group other records. They share one editing surface, expressed by
//! the [`Nameable`] trait: a list label, a "new item" label, the label of
//! their dependents, a usage count and the dependents themselves.

use crate::catalog::Catalog;
use crate::concert::Concert;
use crate::relations::sort_concerts_newest_first;
use bach_core::dates::short_date_time;
use bach_core::{
    ArtistTypeId, CatalogError, CatalogResult, EntityKind, Identifiable, MusicalFormId, Named,
    SeriesId, Validatable, VenueId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Records
// ============================================================================

macro_rules! named_record {
    ($(#[$meta:meta])* $name:ident, $id:ty, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Unique identifier
            pub id: $id,

            /// Unique name
            pub name: String,
        }

        impl $name {
            /// Create a new record with a trimmed name
            pub fn with_name(name: impl Into<String>) -> Self {
                Self {
                    id: Uuid::new_v4(),
                    name: name.into().trim().to_string(),
                }
            }

            /// Set a specific identifier (used when importing)
            pub fn with_id(mut self, id: $id) -> Self {
                self.id = id;
                self
            }
        }

        impl Identifiable for $name {
            const KIND: EntityKind = $kind;

            fn id(&self) -> Uuid {
                self.id
            }
        }

        impl Named for $name {
            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: String) {
                self.name = name.trim().to_string();
            }
        }

        impl Validatable for $name {
            fn validate(&self) -> CatalogResult<()> {
                if self.name.trim().is_empty() {
                    return Err(CatalogError::record_validation(
                        $kind.as_str(),
                        self.id.to_string(),
                        "name cannot be empty",
                    ));
                }
                Ok(())
            }
        }
    };
}

named_record!(
    /// Category of artist ("Orquestra", "Pianista", ...)
    ArtistType,
    ArtistTypeId,
    EntityKind::ArtistType
);

named_record!(
    /// Musical form ("Sinfonia", "Concerto", ...)
    MusicalForm,
    MusicalFormId,
    EntityKind::MusicalForm
);

named_record!(
    /// Concert hall or other place
    Venue,
    VenueId,
    EntityKind::Venue
);

named_record!(
    /// Concert series ("Temporada 2024")
    Series,
    SeriesId,
    EntityKind::Series
);

// ============================================================================
// Nameable
// ============================================================================

/// A record that depends on a [`Nameable`], as shown in its detail screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentItem {
    pub kind: EntityKind,
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
}

/// Shared surface of the simple named categories
pub trait Nameable: Named + Identifiable + Validatable + Clone + Sized {
    /// Label of the list of all records ("Séries")
    const PLURAL_LABEL: &'static str;

    /// Label of the action that creates a record ("Nova Série")
    const NEW_ITEM_LABEL: &'static str;

    /// Label of the dependents section ("Concertos")
    const DEPENDENT_LABEL: &'static str;

    /// Create a new record with a fresh identifier
    fn create(name: &str) -> Self;

    /// All records of this kind, sorted by name
    fn items(catalog: &Catalog) -> Vec<&Self>;

    /// Look a record up by id
    fn find(catalog: &Catalog, id: Uuid) -> Option<&Self>;

    /// Insert (or replace) this record, enforcing a unique name
    fn store(self, catalog: &mut Catalog) -> CatalogResult<Uuid>;

    /// Records that depend on this one, in display order
    fn dependents(&self, catalog: &Catalog) -> Vec<DependentItem>;

    /// Number of records that depend on this one
    fn usage_count(&self, catalog: &Catalog) -> usize {
        catalog.dependency_count(Self::KIND, self.id())
    }
}

fn sorted_by_name<'a, T: Named + 'a>(items: impl Iterator<Item = &'a T>) -> Vec<&'a T> {
    let mut items: Vec<&T> = items.collect();
    items.sort_by(|a, b| a.name().cmp(b.name()));
    items
}

fn concert_dependents<'a>(
    catalog: &'a Catalog,
    matches: impl Fn(&Concert) -> bool,
) -> Vec<DependentItem> {
    let mut concerts: Vec<&'a Concert> = catalog.concerts().filter(|c| matches(*c)).collect();
    sort_concerts_newest_first(&mut concerts);
    concerts
        .into_iter()
        .map(|c| DependentItem {
            kind: EntityKind::Concert,
            id: c.id,
            title: catalog.concert_title(c),
            subtitle: Some(short_date_time(&c.date)),
        })
        .collect()
}

impl Nameable for ArtistType {
    const PLURAL_LABEL: &'static str = "Tipos de Artista";
    const NEW_ITEM_LABEL: &'static str = "Novo Tipo de Artista";
    const DEPENDENT_LABEL: &'static str = "Artistas";

    fn create(name: &str) -> Self {
        Self::with_name(name)
    }

    fn items(catalog: &Catalog) -> Vec<&Self> {
        sorted_by_name(catalog.artist_types())
    }

    fn find(catalog: &Catalog, id: Uuid) -> Option<&Self> {
        catalog.artist_type(id)
    }

    fn store(self, catalog: &mut Catalog) -> CatalogResult<Uuid> {
        catalog.insert_artist_type(self)
    }

    fn dependents(&self, catalog: &Catalog) -> Vec<DependentItem> {
        sorted_by_name(catalog.artists().filter(|a| a.artist_type == self.id))
            .into_iter()
            .map(|a| DependentItem {
                kind: EntityKind::Artist,
                id: a.id,
                title: a.name.clone(),
                subtitle: None,
            })
            .collect()
    }
}

impl Nameable for Series {
    const PLURAL_LABEL: &'static str = "Séries";
    const NEW_ITEM_LABEL: &'static str = "Nova Série";
    const DEPENDENT_LABEL: &'static str = "Concertos";

    fn create(name: &str) -> Self {
        Self::with_name(name)
    }

    fn items(catalog: &Catalog) -> Vec<&Self> {
        sorted_by_name(catalog.all_series())
    }

    fn find(catalog: &Catalog, id: Uuid) -> Option<&Self> {
        catalog.series(id)
    }

    fn store(self, catalog: &mut Catalog) -> CatalogResult<Uuid> {
        catalog.insert_series(self)
    }

    fn dependents(&self, catalog: &Catalog) -> Vec<DependentItem> {
        concert_dependents(catalog, |c| c.series() == Some(self.id))
    }
}

impl Nameable for MusicalForm {
    const PLURAL_LABEL: &'static str = "Formas";
    const NEW_ITEM_LABEL: &'static str = "Nova Forma";
    const DEPENDENT_LABEL: &'static str = "Obras";

    fn create(name: &str) -> Self {
        Self::with_name(name)
    }

    fn items(catalog: &Catalog) -> Vec<&Self> {
        sorted_by_name(catalog.musical_forms())
    }

    fn find(catalog: &Catalog, id: Uuid) -> Option<&Self> {
        catalog.musical_form(id)
    }

    fn store(self, catalog: &mut Catalog) -> CatalogResult<Uuid> {
        catalog.insert_musical_form(self)
    }

    fn dependents(&self, catalog: &Catalog) -> Vec<DependentItem> {
        let mut items: Vec<DependentItem> = catalog
            .works()
            .filter(|w| w.form == Some(self.id))
            .map(|w| DependentItem {
                kind: EntityKind::Work,
                id: w.id,
                title: catalog.work_titles(w).primary_title().to_string(),
                subtitle: catalog.composer(w.composer).map(|c| c.short_name.clone()),
            })
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        items
    }
}

impl Nameable for Venue {
    const PLURAL_LABEL: &'static str = "Locais";
    const NEW_ITEM_LABEL: &'static str = "Novo Local";
    const DEPENDENT_LABEL: &'static str = "Concertos";

    fn create(name: &str) -> Self {
        Self::with_name(name)
    }

    fn items(catalog: &Catalog) -> Vec<&Self> {
        sorted_by_name(catalog.venues())
    }

    fn find(catalog: &Catalog, id: Uuid) -> Option<&Self> {
        catalog.venue(id)
    }

    fn store(self, catalog: &mut Catalog) -> CatalogResult<Uuid> {
        catalog.insert_venue(self)
    }

    fn dependents(&self, catalog: &Catalog) -> Vec<DependentItem> {
        concert_dependents(catalog, |c| c.venue == self.id)
    }
}

// ============================================================================
// Summaries
// ============================================================================

/// One row of a nameable list: name and how many records use it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameableRow {
    pub id: Uuid,
    pub name: String,
    pub usage_count: usize,
}

/// Rows for the list screen of a nameable kind, sorted by name
pub fn nameable_summary<T: Nameable>(catalog: &Catalog) -> Vec<NameableRow> {
    T::items(catalog)
        .into_iter()
        .map(|item| NameableRow {
            id: item.id(),
            name: item.name().to_string(),
            usage_count: item.usage_count(catalog),
        })
        .collect()
}

/// Rename a nameable record, keeping names unique
pub fn rename_nameable<T: Nameable>(
    catalog: &mut Catalog,
    id: Uuid,
    name: &str,
) -> CatalogResult<()> {
    let mut item = T::find(catalog, id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found(T::KIND.as_str(), id))?;
    item.set_name(name.to_string());
    item.store(catalog)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn test_labels() {
        assert_eq!(ArtistType::PLURAL_LABEL, "Tipos de Artista");
        assert_eq!(ArtistType::NEW_ITEM_LABEL, "Novo Tipo de Artista");
        assert_eq!(ArtistType::DEPENDENT_LABEL, "Artistas");
        assert_eq!(Series::PLURAL_LABEL, "Séries");
        assert_eq!(Series::NEW_ITEM_LABEL, "Nova Série");
        assert_eq!(MusicalForm::PLURAL_LABEL, "Formas");
        assert_eq!(MusicalForm::DEPENDENT_LABEL, "Obras");
        assert_eq!(Venue::NEW_ITEM_LABEL, "Novo Local");
        assert_eq!(Venue::DEPENDENT_LABEL, "Concertos");
    }

    #[test]
    fn test_with_name_trims_and_validates() {
        let venue = Venue::with_name("  Sala Cecília Meireles ");
        assert_eq!(venue.name, "Sala Cecília Meireles");
        assert!(venue.is_valid());
        assert!(!Series::with_name("   ").is_valid());
        assert!(MusicalForm::create("Sonata").composite_id().starts_with("musical_form."));
    }

    #[test]
    fn test_usage_count_and_dependents() {
        let f = Fixture::new();
        let hall = Venue::find(&f.catalog, f.hall).unwrap();
        assert_eq!(hall.usage_count(&f.catalog), 2);

        let dependents = hall.dependents(&f.catalog);
        let ids: Vec<Uuid> = dependents.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![f.opening, f.recital]);
        assert_eq!(dependents[0].kind, EntityKind::Concert);
        assert_eq!(dependents[0].subtitle.as_deref(), Some("10/03/2024 20:00"));
    }

    #[test]
    fn test_form_dependents_carry_composer() {
        let f = Fixture::new();
        let form = MusicalForm::find(&f.catalog, f.symphony_form).unwrap();
        let dependents = form.dependents(&f.catalog);
        assert_eq!(dependents.len(), 1);
        assert_eq!(dependents[0].title, "Sinfonia n.º 9 em Ré menor, Op. 125");
        assert_eq!(dependents[0].subtitle.as_deref(), Some("Beethoven"));
    }

    #[test]
    fn test_artist_type_dependents_sorted_by_name() {
        let mut f = Fixture::new();
        let kind = f.pianist_type;
        f.catalog
            .insert_artist(crate::Artist::new("Guiomar Novaes", kind))
            .unwrap();
        let pianists = ArtistType::find(&f.catalog, kind).unwrap();
        let names: Vec<String> = pianists
            .dependents(&f.catalog)
            .into_iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(names, vec!["Guiomar Novaes", "Nelson Freire"]);
    }

    #[test]
    fn test_summary_and_rename() {
        let mut f = Fixture::new();
        let id = Series::create("Série Jovem").store(&mut f.catalog).unwrap();

        let rows = nameable_summary::<Series>(&f.catalog);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Série Jovem", "Temporada 2024"]);
        assert_eq!(rows[0].usage_count, 0);
        assert_eq!(rows[1].usage_count, 1);

        let err = rename_nameable::<Series>(&mut f.catalog, id, "Temporada 2024").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));

        rename_nameable::<Series>(&mut f.catalog, id, "Série Jovem 2025").unwrap();
        assert_eq!(f.catalog.series(id).unwrap().name, "Série Jovem 2025");
    }
}
