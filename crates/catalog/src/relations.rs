//! Cross-record queries
//!
//! Every function here is a pure read over a [`Catalog`]. Results are
//! de-duplicated by identity and returned in display order. Performances
//! whose concert back-reference does not resolve are skipped, never
//! reported as errors.

use crate::artist::Artist;
use crate::catalog::Catalog;
use crate::composer::Composer;
use crate::concert::Concert;
use crate::performance::Performance;
use crate::work::Work;
use bach_core::dates::{month_year, year_month, years_before};
use bach_core::text::initial;
use bach_core::{ArtistId, ComposerId, ConcertId, WorkId};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

// ============================================================================
// Ordering helpers
// ============================================================================

/// Sort concerts by date, newest first
pub fn sort_concerts_newest_first(concerts: &mut [&Concert]) {
    concerts.sort_by(|a, b| b.date.cmp(&a.date));
}

fn distinct_concerts<'a>(
    catalog: &'a Catalog,
    performances: impl IntoIterator<Item = &'a Performance>,
) -> Vec<&'a Concert> {
    let mut seen: HashSet<ConcertId> = HashSet::new();
    let mut concerts: Vec<&Concert> = performances
        .into_iter()
        .filter_map(|p| catalog.concert_of(p))
        .filter(|c| seen.insert(c.id))
        .collect();
    sort_concerts_newest_first(&mut concerts);
    concerts
}

// ============================================================================
// Concert relations
// ============================================================================

/// Distinct artists of a concert, sorted by name
pub fn artists_of<'a>(catalog: &'a Catalog, concert: &Concert) -> Vec<&'a Artist> {
    let mut seen: HashSet<ArtistId> = HashSet::new();
    let mut artists: Vec<&Artist> = concert
        .performances
        .iter()
        .filter_map(|id| catalog.performance(*id))
        .flat_map(|p| p.artists.iter())
        .filter(|id| seen.insert(**id))
        .filter_map(|id| catalog.artist(*id))
        .collect();
    artists.sort_by(|a, b| a.name.cmp(&b.name));
    artists
}

/// Programme of a concert with encores moved to the end
///
/// The relative order of regular items and of encores is preserved.
pub fn performances_ordered<'a>(catalog: &'a Catalog, concert: &Concert) -> Vec<&'a Performance> {
    let mut performances: Vec<&Performance> = concert
        .performances
        .iter()
        .filter_map(|id| {
            let performance = catalog.performance(*id);
            if performance.is_none() {
                debug!(concert = %concert.id, performance = %id, "Skipping missing performance");
            }
            performance
        })
        .collect();
    performances.sort_by_key(|p| p.encore);
    performances
}

/// Distinct composers of a concert, in programme order
pub fn composers_of<'a>(catalog: &'a Catalog, concert: &Concert) -> Vec<&'a Composer> {
    let mut seen: HashSet<ComposerId> = HashSet::new();
    performances_ordered(catalog, concert)
        .into_iter()
        .filter_map(|p| catalog.work(p.work))
        .filter(|w| seen.insert(w.composer))
        .filter_map(|w| catalog.composer(w.composer))
        .collect()
}

// ============================================================================
// Artist and work relations
// ============================================================================

/// Concerts an artist performed in, newest first
pub fn concerts_of_artist(catalog: &Catalog, artist: ArtistId) -> Vec<&Concert> {
    distinct_concerts(catalog, catalog.performances_of_artist(artist))
}

/// Concerts where a work was performed, newest first
pub fn concerts_of_work(catalog: &Catalog, work: WorkId) -> Vec<&Concert> {
    distinct_concerts(catalog, catalog.performances_of_work(work))
}

/// Works of a composer, sorted by primary title
pub fn works_of_composer(catalog: &Catalog, composer: ComposerId) -> Vec<&Work> {
    let mut works: Vec<(String, &Work)> = catalog
        .works()
        .filter(|w| w.composer == composer)
        .map(|w| (catalog.work_titles(w).primary_title().to_string(), w))
        .collect();
    works.sort_by(|a, b| a.0.cmp(&b.0));
    works.into_iter().map(|(_, w)| w).collect()
}

// ============================================================================
// Grouping
// ============================================================================

/// Concerts of one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// `year * 100 + month`
    pub key: i32,
    pub year: i32,
    pub month: u32,
    /// Newest first
    pub concerts: Vec<&'a Concert>,
}

impl MonthGroup<'_> {
    /// Section header ("maio de 2024")
    pub fn label(&self) -> String {
        month_year(self.year, self.month)
    }
}

/// Bucket concerts by month, newest month first
pub fn group_by_year_month<'a>(
    concerts: impl IntoIterator<Item = &'a Concert>,
) -> Vec<MonthGroup<'a>> {
    let mut buckets: BTreeMap<i32, Vec<&Concert>> = BTreeMap::new();
    for concert in concerts {
        buckets.entry(year_month(&concert.date)).or_default().push(concert);
    }

    buckets
        .into_iter()
        .rev()
        .map(|(key, mut concerts)| {
            sort_concerts_newest_first(&mut concerts);
            MonthGroup {
                key,
                year: key.div_euclid(100),
                month: key.rem_euclid(100) as u32,
                concerts,
            }
        })
        .collect()
}

/// Items sharing the same first letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialGroup<T> {
    pub initial: String,
    pub items: Vec<T>,
}

/// Alphabetical sections keyed by the first character of `key`
///
/// Keys compare by raw string order, so lowercase initials form their own
/// sections after the uppercase ones. Sections are ascending and items
/// within a section are ascending by key.
pub fn group_by_initial<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<InitialGroup<T>>
where
    F: Fn(&T) -> &str,
{
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort_by(|a, b| key(a).cmp(key(b)));

    let mut groups: Vec<InitialGroup<T>> = Vec::new();
    for item in items {
        let letter = initial(key(&item));
        match groups.iter_mut().find(|g| g.initial == letter) {
            Some(group) => group.items.push(item),
            None => groups.push(InitialGroup {
                initial: letter,
                items: vec![item],
            }),
        }
    }
    groups.sort_by(|a, b| a.initial.cmp(&b.initial));
    groups
}

// ============================================================================
// Highlights
// ============================================================================

/// The concert held exactly one calendar year before `today`
///
/// Only the calendar date is compared. On February 29 the target is
/// February 28 of the previous year.
pub fn find_previous_year_concert<'a>(
    concerts: impl IntoIterator<Item = &'a Concert>,
    today: NaiveDate,
) -> Option<&'a Concert> {
    let target = years_before(today, 1)?;
    concerts.into_iter().find(|c| {
        let date = c.date.date();
        date.year() == target.year() && date.month() == target.month() && date.day() == target.day()
    })
}

/// The earliest concert strictly after `now`
pub fn find_next_concert<'a>(
    concerts: impl IntoIterator<Item = &'a Concert>,
    now: NaiveDateTime,
) -> Option<&'a Concert> {
    concerts
        .into_iter()
        .filter(|c| c.date > now)
        .min_by_key(|c| c.date)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Fixture, at};
    use uuid::Uuid;

    #[test]
    fn test_artists_of_concert_are_distinct_and_sorted() {
        let f = Fixture::new();
        let opening = f.catalog.concert(f.opening).unwrap();
        let names: Vec<&str> = artists_of(&f.catalog, opening)
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["Nelson Freire", "OSESP"]);
    }

    #[test]
    fn test_artists_of_empty_concert() {
        let mut f = Fixture::new();
        let empty = crate::Concert::new(at(2024, 1, 1, 20), f.hall);
        let id = f.catalog.insert_concert(empty).unwrap();
        assert!(artists_of(&f.catalog, f.catalog.concert(id).unwrap()).is_empty());
    }

    #[test]
    fn test_concerts_of_artist_newest_first() {
        let f = Fixture::new();
        let ids: Vec<Uuid> = concerts_of_artist(&f.catalog, f.pianist)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![f.opening, f.recital]);
    }

    #[test]
    fn test_concerts_skip_detached_performances() {
        let mut f = Fixture::new();
        f.catalog.detach_performance(f.recital_piece);
        let ids: Vec<Uuid> = concerts_of_work(&f.catalog, f.symphony)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![f.opening]);
    }

    #[test]
    fn test_concerts_of_work_deduplicated() {
        let mut f = Fixture::new();
        let again = crate::Performance::new(f.symphony).with_artist(f.orchestra);
        f.catalog.add_performance(f.opening, again).unwrap();
        let concerts = concerts_of_work(&f.catalog, f.symphony);
        assert_eq!(concerts.len(), 2);
        assert_eq!(concerts[0].id, f.opening);
    }

    #[test]
    fn test_performances_ordered_moves_encores_last() {
        let mut f = Fixture::new();
        let late = crate::Performance::new(f.brandenburg).with_artist(f.orchestra);
        let late = f.catalog.add_performance(f.opening, late).unwrap();

        let opening = f.catalog.concert(f.opening).unwrap();
        let ids: Vec<Uuid> = performances_ordered(&f.catalog, opening)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![f.first, f.second, late, f.encore]);
    }

    #[test]
    fn test_composers_of_concert() {
        let f = Fixture::new();
        let opening = f.catalog.concert(f.opening).unwrap();
        let names: Vec<&str> = composers_of(&f.catalog, opening)
            .iter()
            .map(|c| c.short_name.as_str())
            .collect();
        assert_eq!(names, vec!["Beethoven", "Bach"]);
    }

    #[test]
    fn test_works_of_composer_sorted() {
        let f = Fixture::new();
        let titles: Vec<String> = works_of_composer(&f.catalog, f.bach)
            .iter()
            .map(|w| f.catalog.work_titles(w).primary_title().to_string())
            .collect();
        assert_eq!(titles, vec!["Concerto de Brandemburgo n.º 5", "Ária"]);
    }

    #[test]
    fn test_group_by_year_month() {
        let f = Fixture::new();
        let may_early = crate::Concert::new(at(2024, 5, 1, 20), f.hall);
        let may_late = crate::Concert::new(at(2024, 5, 20, 20), f.hall);
        let june = crate::Concert::new(at(2024, 6, 3, 20), f.hall);
        let concerts = [may_early.clone(), june.clone(), may_late.clone()];

        let groups = group_by_year_month(concerts.iter());
        let keys: Vec<i32> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![202406, 202405]);
        assert_eq!(groups[1].label(), "maio de 2024");
        let may: Vec<Uuid> = groups[1].concerts.iter().map(|c| c.id).collect();
        assert_eq!(may, vec![may_late.id, may_early.id]);

        assert!(group_by_year_month(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_group_by_initial() {
        let names = ["Mozart", "bach", "Beethoven", "Brahms", "Mahler", "Élgar"];
        let groups = group_by_initial(names.iter().copied(), |n| *n);
        let initials: Vec<&str> = groups.iter().map(|g| g.initial.as_str()).collect();
        assert_eq!(initials, vec!["B", "M", "b", "É"]);
        assert_eq!(groups[0].items, vec!["Beethoven", "Brahms"]);
        assert_eq!(groups[1].items, vec!["Mahler", "Mozart"]);
        assert_eq!(groups[2].items, vec!["bach"]);
    }

    #[test]
    fn test_group_by_initial_sorts_by_raw_order() {
        let names = ["bruckner", "Bach", "bach", "BACH"];
        let groups = group_by_initial(names.iter().copied(), |n| *n);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items, vec!["BACH", "Bach"]);
        assert_eq!(groups[1].items, vec!["bach", "bruckner"]);
        assert!(group_by_initial(std::iter::empty::<&str>(), |n| *n).is_empty());
    }

    #[test]
    fn test_find_previous_year_concert() {
        let f = Fixture::new();
        let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        let concerts: Vec<&Concert> = f.catalog.concerts().collect();
        let found = find_previous_year_concert(concerts.iter().copied(), today);
        assert_eq!(found.map(|c| c.id), Some(f.recital));

        let other_day = NaiveDate::from_ymd_opt(2024, 11, 6).unwrap();
        assert!(find_previous_year_concert(concerts.iter().copied(), other_day).is_none());
    }

    #[test]
    fn test_previous_year_from_leap_day() {
        let venue = Uuid::new_v4();
        let concert = Concert::new(at(2023, 2, 28, 20), venue);
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(find_previous_year_concert([&concert], today).is_some());
    }

    #[test]
    fn test_leap_day_concert_has_no_anniversary_next_year() {
        let venue = Uuid::new_v4();
        let concert = Concert::new(at(2024, 2, 29, 20), venue);
        let feb_28 = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let mar_1 = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert!(find_previous_year_concert([&concert], feb_28).is_none());
        assert!(find_previous_year_concert([&concert], mar_1).is_none());
    }

    #[test]
    fn test_exact_anniversary_matches_regardless_of_time() {
        let venue = Uuid::new_v4();
        let morning = Concert::new(at(2023, 11, 5, 9), venue);
        let earlier = Concert::new(at(2022, 11, 5, 20), venue);
        let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        let found = find_previous_year_concert([&earlier, &morning], today);
        assert_eq!(found.map(|c| c.id), Some(morning.id));
    }

    #[test]
    fn test_find_next_concert_ignores_input_order() {
        let venue = Uuid::new_v4();
        let far = Concert::new(at(2025, 9, 1, 20), venue);
        let near = Concert::new(at(2025, 3, 1, 20), venue);
        let past = Concert::new(at(2024, 1, 1, 20), venue);
        let now = at(2024, 6, 1, 12);

        let next = find_next_concert([&far, &past, &near], now);
        assert_eq!(next.map(|c| c.id), Some(near.id));

        assert!(find_next_concert([&past], now).is_none());
        assert!(find_next_concert([&near], near.date).is_none());
    }
}
