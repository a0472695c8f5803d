//! Text search over catalog records

use crate::artist::Artist;
use crate::catalog::Catalog;
use crate::composer::Composer;
use crate::work::Work;
use bach_core::text::localized_contains;

/// Keep the items where any selected field contains `query`
///
/// Matching is case-insensitive and Unicode-aware. An empty query keeps
/// every item in its original order.
pub fn text_search<T, F, I, S>(
    items: impl IntoIterator<Item = T>,
    query: &str,
    fields: F,
) -> Vec<T>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter(|item| {
            query.is_empty()
                || fields(item)
                    .into_iter()
                    .any(|field| localized_contains(field.as_ref(), query))
        })
        .collect()
}

/// Matches of a catalog-wide search, each list in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    /// Matched by name, sorted by name
    pub artists: Vec<&'a Artist>,
    /// Matched by full name, sorted by short name
    pub composers: Vec<&'a Composer>,
    /// Matched by primary or derived title, sorted by primary title
    pub works: Vec<&'a Work>,
}

impl SearchResults<'_> {
    /// Total number of matches
    pub fn len(&self) -> usize {
        self.artists.len() + self.composers.len() + self.works.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search artists, composers and works at once
pub fn search_catalog<'a>(catalog: &'a Catalog, query: &str) -> SearchResults<'a> {
    let mut artists = text_search(catalog.artists(), query, |a| [a.name.clone()]);
    artists.sort_by(|a, b| a.name.cmp(&b.name));

    let mut composers = text_search(catalog.composers(), query, |c| [c.full_name.clone()]);
    composers.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    let mut works: Vec<(String, &Work)> = text_search(
        catalog.works().map(|w| (catalog.work_titles(w), w)),
        query,
        |(titles, _)| [titles.primary_title().to_string(), titles.derived_title().to_string()],
    )
    .into_iter()
    .map(|(titles, w)| (titles.primary_title().to_string(), w))
    .collect();
    works.sort_by(|a, b| a.0.cmp(&b.0));

    SearchResults {
        artists,
        composers,
        works: works.into_iter().map(|(_, w)| w).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Fixture;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let items = ["Bach", "Mozart", "Brahms"];
        let found = text_search(items, "", |s| [*s]);
        assert_eq!(found, items.to_vec());
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let items: Vec<&str> = Vec::new();
        assert!(text_search(items, "bach", |s| [*s]).is_empty());
    }

    #[test]
    fn test_case_insensitive_unicode_match() {
        let items = ["Antonín Dvořák", "Leoš Janáček", "Bedřich Smetana"];
        assert_eq!(text_search(items, "DVOŘ", |s| [*s]), vec!["Antonín Dvořák"]);
        assert_eq!(text_search(items, "č", |s| [*s]), vec!["Leoš Janáček"]);
        assert!(text_search(items, "xyz", |s| [*s]).is_empty());
    }

    #[test]
    fn test_any_field_matches() {
        let items = [("Sinfonia n.º 5", "Destino"), ("Sonata", "Ao Luar")];
        let found = text_search(items, "luar", |(a, b)| [*a, *b]);
        assert_eq!(found, vec![("Sonata", "Ao Luar")]);
    }

    #[test]
    fn test_search_catalog() {
        let f = Fixture::new();

        let results = search_catalog(&f.catalog, "bach");
        assert_eq!(results.composers.len(), 1);
        assert_eq!(results.composers[0].id, f.bach);
        assert!(results.artists.is_empty());

        let results = search_catalog(&f.catalog, "op. 125");
        assert_eq!(results.works.len(), 1);
        assert_eq!(results.works[0].id, f.symphony);

        let results = search_catalog(&f.catalog, "bwv");
        let ids: Vec<_> = results.works.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![f.brandenburg, f.aria]);

        let results = search_catalog(&f.catalog, "freire");
        assert_eq!(results.len(), 1);
        assert_eq!(results.artists[0].id, f.pianist);
    }

    #[test]
    fn test_search_catalog_empty_query_lists_all() {
        let f = Fixture::new();
        let results = search_catalog(&f.catalog, "");
        assert_eq!(results.artists.len(), 2);
        assert_eq!(results.composers.len(), 2);
        assert_eq!(results.works.len(), 3);
    }
}
