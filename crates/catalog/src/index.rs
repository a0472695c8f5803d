//! System search-index entries
//!
//! Composers, artists and works are published to an external search index
//! so they can be found from outside the application. This module builds
//! the entries; the index itself sits behind the [`SearchIndex`] trait.

use crate::artist::Artist;
use crate::catalog::Catalog;
use crate::composer::Composer;
use crate::work::Work;
use bach_core::text::normalize_for_url;
use bach_core::{CatalogResult, EntityKind, Identifiable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

/// Default location of portrait thumbnails
pub const DEFAULT_THUMBNAIL_BASE_URL: &str = "https://savioa.github.io/bach-tracking";

/// Default prefix of index domains
pub const DEFAULT_INDEX_DOMAIN: &str = "bachtracking";

// ============================================================================
// Index entries
// ============================================================================

/// One entry of the search index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Composite identifier `"{kind}.{uuid}"`
    pub identifier: String,
    /// Group of entries of the same kind (`"bachtracking.work"`)
    pub domain: String,
    pub title: String,
    pub content_description: String,
    pub keywords: Vec<String>,
    /// Raw image bytes, when a portrait could be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Vec<u8>>,
}

/// The external search index
pub trait SearchIndex {
    /// Add or replace entries
    fn index_items(&mut self, items: Vec<SearchableItem>) -> CatalogResult<()>;

    /// Remove entries by identifier; unknown identifiers are ignored
    fn delete_items(&mut self, identifiers: &[String]) -> CatalogResult<()>;
}

/// Source of portrait images
pub trait ThumbnailSource {
    /// Fetch the image at `url`; any failure yields `None`
    fn fetch(&self, url: &str) -> Option<Vec<u8>>;
}

/// Thumbnail source that never returns an image
#[derive(Debug, Clone, Copy, Default)]
pub struct NoThumbnails;

impl ThumbnailSource for NoThumbnails {
    fn fetch(&self, _url: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Search index kept in memory, keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct InMemoryIndex {
    items: BTreeMap<String, SearchableItem>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&SearchableItem> {
        self.items.get(identifier)
    }

    /// Entries in identifier order
    pub fn items(&self) -> impl Iterator<Item = &SearchableItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SearchIndex for InMemoryIndex {
    fn index_items(&mut self, items: Vec<SearchableItem>) -> CatalogResult<()> {
        for item in items {
            self.items.insert(item.identifier.clone(), item);
        }
        Ok(())
    }

    fn delete_items(&mut self, identifiers: &[String]) -> CatalogResult<()> {
        for identifier in identifiers {
            self.items.remove(identifier);
        }
        Ok(())
    }
}

// ============================================================================
// Entry builder
// ============================================================================

/// Where thumbnails live and how domains are named
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    pub thumbnail_base_url: String,
    pub domain_prefix: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            thumbnail_base_url: DEFAULT_THUMBNAIL_BASE_URL.to_string(),
            domain_prefix: DEFAULT_INDEX_DOMAIN.to_string(),
        }
    }
}

impl IndexSettings {
    /// Domain of the entries of one kind
    pub fn domain(&self, kind: EntityKind) -> String {
        format!("{}.{}", self.domain_prefix, kind.as_str())
    }
}

/// Portrait URL for a name: `{base}/{slug}.jpg`
pub fn thumbnail_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/{}.jpg",
        base_url.trim_end_matches('/'),
        normalize_for_url(name)
    )
}

/// Builds index entries from catalog records
pub struct SearchIndexer<'a, S: ThumbnailSource> {
    settings: &'a IndexSettings,
    thumbnails: &'a S,
}

impl<'a, S: ThumbnailSource> SearchIndexer<'a, S> {
    pub fn new(settings: &'a IndexSettings, thumbnails: &'a S) -> Self {
        Self {
            settings,
            thumbnails,
        }
    }

    fn thumbnail(&self, name: &str) -> Option<Vec<u8>> {
        let url = thumbnail_url(&self.settings.thumbnail_base_url, name);
        let image = self.thumbnails.fetch(&url);
        if image.is_none() {
            debug!(%url, "No thumbnail");
        }
        image
    }

    /// Entry of a composer, with the portrait named after the short name
    pub fn composer_item(&self, composer: &Composer) -> SearchableItem {
        SearchableItem {
            identifier: composer.composite_id(),
            domain: self.settings.domain(EntityKind::Composer),
            title: composer.full_name.clone(),
            content_description: "Compositor".to_string(),
            keywords: vec![composer.short_name.clone(), composer.full_name.clone()],
            thumbnail: self.thumbnail(&composer.short_name),
        }
    }

    /// Entry of an artist, described by its type
    pub fn artist_item(&self, catalog: &Catalog, artist: &Artist) -> SearchableItem {
        let artist_type = catalog.artist_type_name(artist).to_string();
        SearchableItem {
            identifier: artist.composite_id(),
            domain: self.settings.domain(EntityKind::Artist),
            title: artist.name.clone(),
            content_description: artist_type.clone(),
            keywords: vec![artist.name.clone(), artist_type],
            thumbnail: self.thumbnail(&artist.name),
        }
    }

    /// Entry of a work, titled with both titles when they differ
    pub fn work_item(&self, catalog: &Catalog, work: &Work) -> SearchableItem {
        let titles = catalog.work_titles(work);
        let (full_name, short_name) = catalog
            .composer(work.composer)
            .map(|c| (c.full_name.clone(), c.short_name.clone()))
            .unwrap_or_default();

        let mut keywords = vec![
            full_name,
            short_name.clone(),
            titles.primary_title().to_string(),
        ];
        let title = if titles.has_derived_title() {
            keywords.push(titles.derived_title().to_string());
            format!("{}\n{}", titles.primary_title(), titles.derived_title())
        } else {
            titles.primary_title().to_string()
        };
        keywords.retain(|k| !k.is_empty());

        SearchableItem {
            identifier: work.composite_id(),
            domain: self.settings.domain(EntityKind::Work),
            title,
            content_description: short_name,
            keywords,
            thumbnail: None,
        }
    }

    /// Entries for every composer, artist and work
    pub fn items(&self, catalog: &Catalog) -> Vec<SearchableItem> {
        let composers = catalog.composers().map(|c| self.composer_item(c));
        let artists = catalog.artists().map(|a| self.artist_item(catalog, a));
        let works = catalog.works().map(|w| self.work_item(catalog, w));
        composers.chain(artists).chain(works).collect()
    }

    /// Publish every entry to the index
    pub fn reindex(&self, catalog: &Catalog, index: &mut impl SearchIndex) -> CatalogResult<usize> {
        let items = self.items(catalog);
        let count = items.len();
        index.index_items(items)?;
        info!(entries = count, "Search index updated");
        Ok(count)
    }
}

/// Identifier of a record as published to the index
pub fn index_identifier(kind: EntityKind, id: Uuid) -> String {
    format!("{}.{}", kind.as_str(), id)
}

/// Remove the entry of a deleted record
pub fn deindex(index: &mut impl SearchIndex, kind: EntityKind, id: Uuid) -> CatalogResult<()> {
    index.delete_items(&[index_identifier(kind, id)])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSource {
        urls: RefCell<Vec<String>>,
    }

    impl ThumbnailSource for RecordingSource {
        fn fetch(&self, url: &str) -> Option<Vec<u8>> {
            self.urls.borrow_mut().push(url.to_string());
            url.ends_with("/bach.jpg").then(|| vec![0xFF, 0xD8])
        }
    }

    #[test]
    fn test_thumbnail_url() {
        assert_eq!(
            thumbnail_url(DEFAULT_THUMBNAIL_BASE_URL, "Antonín Dvořák"),
            "https://savioa.github.io/bach-tracking/antonin-dvorak.jpg"
        );
        assert_eq!(thumbnail_url("http://x/", "Bach"), "http://x/bach.jpg");
    }

    #[test]
    fn test_composer_item() {
        let f = Fixture::new();
        let settings = IndexSettings::default();
        let source = RecordingSource::default();
        let indexer = SearchIndexer::new(&settings, &source);

        let item = indexer.composer_item(f.catalog.composer(f.bach).unwrap());
        assert_eq!(item.identifier, format!("composer.{}", f.bach));
        assert_eq!(item.domain, "bachtracking.composer");
        assert_eq!(item.title, "Johann Sebastian Bach");
        assert_eq!(item.content_description, "Compositor");
        assert_eq!(item.keywords, vec!["Bach", "Johann Sebastian Bach"]);
        assert_eq!(item.thumbnail, Some(vec![0xFF, 0xD8]));
        assert_eq!(
            source.urls.borrow().as_slice(),
            ["https://savioa.github.io/bach-tracking/bach.jpg"]
        );
    }

    #[test]
    fn test_artist_item() {
        let f = Fixture::new();
        let settings = IndexSettings::default();
        let indexer = SearchIndexer::new(&settings, &NoThumbnails);

        let item = indexer.artist_item(&f.catalog, f.catalog.artist(f.pianist).unwrap());
        assert_eq!(item.title, "Nelson Freire");
        assert_eq!(item.content_description, "Pianista");
        assert_eq!(item.keywords, vec!["Nelson Freire", "Pianista"]);
        assert!(item.thumbnail.is_none());
    }

    #[test]
    fn test_work_items() {
        let f = Fixture::new();
        let settings = IndexSettings::default();
        let indexer = SearchIndexer::new(&settings, &NoThumbnails);

        let symphony = indexer.work_item(&f.catalog, f.catalog.work(f.symphony).unwrap());
        assert_eq!(symphony.title, "Sinfonia n.º 9 em Ré menor, Op. 125");
        assert_eq!(symphony.content_description, "Beethoven");
        assert_eq!(symphony.keywords.len(), 3);

        let brandenburg = indexer.work_item(&f.catalog, f.catalog.work(f.brandenburg).unwrap());
        assert_eq!(brandenburg.title, "Concerto de Brandemburgo n.º 5\nBWV 1050");
        assert!(brandenburg.keywords.contains(&"BWV 1050".to_string()));
        assert_eq!(brandenburg.domain, "bachtracking.work");
    }

    #[test]
    fn test_reindex_and_deindex() {
        let f = Fixture::new();
        let settings = IndexSettings {
            domain_prefix: "com.example.bachtracking".to_string(),
            ..Default::default()
        };
        let indexer = SearchIndexer::new(&settings, &NoThumbnails);
        let mut index = InMemoryIndex::new();

        assert_eq!(indexer.reindex(&f.catalog, &mut index).unwrap(), 7);
        assert_eq!(index.len(), 7);
        let key = index_identifier(EntityKind::Work, f.aria);
        assert_eq!(
            index.get(&key).unwrap().domain,
            "com.example.bachtracking.work"
        );

        deindex(&mut index, EntityKind::Work, f.aria).unwrap();
        assert!(index.get(&key).is_none());
        deindex(&mut index, EntityKind::Work, f.aria).unwrap();
        assert_eq!(index.len(), 6);
    }
}
