//! The catalog object graph
//!
//! `Catalog` is the in-memory model of every record the user keeps. It owns
//! one ordered map per record type and enforces the integrity rules the rest
//! of the crate relies on:
//!
//! - unique names (composer short name, artist, artist type, musical form,
//!   venue, series);
//! - references point at existing records;
//! - deletes cascade to dependents;
//! - a concert's programme and each performance's `concert` back-reference
//!   stay in sync.

use crate::artist::Artist;
use crate::composer::Composer;
use crate::concert::Concert;
use crate::nameable::{ArtistType, MusicalForm, Series, Venue};
use crate::performance::Performance;
use crate::titles::{WorkTitles, derive_concert_title, performance_label};
use crate::work::Work;
use bach_core::{
    ArtistId, ArtistTypeId, CatalogError, CatalogResult, ComposerId, ConcertId, EntityKind,
    MusicalFormId, PerformanceId, SeriesId, Validatable, VenueId, WorkId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

// ============================================================================
// Catalog
// ============================================================================

/// Every record of a concert-tracking catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub(crate) composers: BTreeMap<ComposerId, Composer>,

    #[serde(default)]
    pub(crate) works: BTreeMap<WorkId, Work>,

    #[serde(default)]
    pub(crate) artist_types: BTreeMap<ArtistTypeId, ArtistType>,

    #[serde(default)]
    pub(crate) artists: BTreeMap<ArtistId, Artist>,

    #[serde(default)]
    pub(crate) musical_forms: BTreeMap<MusicalFormId, MusicalForm>,

    #[serde(default)]
    pub(crate) venues: BTreeMap<VenueId, Venue>,

    #[serde(default)]
    pub(crate) series: BTreeMap<SeriesId, Series>,

    #[serde(default)]
    pub(crate) performances: BTreeMap<PerformanceId, Performance>,

    #[serde(default)]
    pub(crate) concerts: BTreeMap<ConcertId, Concert>,
}

fn ensure_unique<'a, T: 'a>(
    records: impl IntoIterator<Item = (&'a Uuid, &'a T)>,
    own_id: Uuid,
    name: &str,
    name_of: impl Fn(&T) -> &str,
    kind: EntityKind,
) -> CatalogResult<()> {
    let taken = records
        .into_iter()
        .any(|(id, record)| *id != own_id && name_of(record) == name);
    if taken {
        return Err(CatalogError::duplicate(kind.as_str(), name));
    }
    Ok(())
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog holds no record at all
    pub fn is_empty(&self) -> bool {
        self.composers.is_empty()
            && self.works.is_empty()
            && self.artist_types.is_empty()
            && self.artists.is_empty()
            && self.musical_forms.is_empty()
            && self.venues.is_empty()
            && self.series.is_empty()
            && self.performances.is_empty()
            && self.concerts.is_empty()
    }

    /// Number of records of one kind
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Composer => self.composers.len(),
            EntityKind::Work => self.works.len(),
            EntityKind::Artist => self.artists.len(),
            EntityKind::ArtistType => self.artist_types.len(),
            EntityKind::MusicalForm => self.musical_forms.len(),
            EntityKind::Venue => self.venues.len(),
            EntityKind::Series => self.series.len(),
            EntityKind::Performance => self.performances.len(),
            EntityKind::Concert => self.concerts.len(),
        }
    }

    /// Whether a record of the given kind and id exists
    pub fn contains(&self, kind: EntityKind, id: Uuid) -> bool {
        match kind {
            EntityKind::Composer => self.composers.contains_key(&id),
            EntityKind::Work => self.works.contains_key(&id),
            EntityKind::Artist => self.artists.contains_key(&id),
            EntityKind::ArtistType => self.artist_types.contains_key(&id),
            EntityKind::MusicalForm => self.musical_forms.contains_key(&id),
            EntityKind::Venue => self.venues.contains_key(&id),
            EntityKind::Series => self.series.contains_key(&id),
            EntityKind::Performance => self.performances.contains_key(&id),
            EntityKind::Concert => self.concerts.contains_key(&id),
        }
    }

    fn require(
        &self,
        kind: EntityKind,
        id: Uuid,
        target: EntityKind,
        target_id: Uuid,
    ) -> CatalogResult<()> {
        if self.contains(target, target_id) {
            Ok(())
        } else {
            Err(CatalogError::dangling(
                kind.as_str(),
                id,
                format!("{} {}", target.as_str(), target_id),
            ))
        }
    }

    // ========================================================================
    // Composers
    // ========================================================================

    /// Insert or replace a composer
    pub fn insert_composer(&mut self, composer: Composer) -> CatalogResult<ComposerId> {
        composer.validate()?;
        ensure_unique(
            &self.composers,
            composer.id,
            &composer.short_name,
            |c| c.short_name.as_str(),
            EntityKind::Composer,
        )?;
        let id = composer.id;
        self.composers.insert(id, composer);
        Ok(id)
    }

    /// Get a composer by ID
    pub fn composer(&self, id: ComposerId) -> Option<&Composer> {
        self.composers.get(&id)
    }

    /// Find a composer by exact short name
    pub fn composer_by_short_name(&self, short_name: &str) -> Option<&Composer> {
        self.composers.values().find(|c| c.short_name == short_name)
    }

    /// All composers, in id order
    pub fn composers(&self) -> impl Iterator<Item = &Composer> {
        self.composers.values()
    }

    /// Remove a composer together with its works and their performances
    pub fn remove_composer(&mut self, id: ComposerId) -> Option<Composer> {
        let works: Vec<WorkId> = self
            .works
            .values()
            .filter(|w| w.composer == id)
            .map(|w| w.id)
            .collect();
        for work in works {
            self.remove_work(work);
        }
        let removed = self.composers.remove(&id);
        if let Some(composer) = &removed {
            debug!(composer = %composer.short_name, "Removed composer");
        }
        removed
    }

    // ========================================================================
    // Works
    // ========================================================================

    /// Insert or replace a work
    ///
    /// The composer and the musical form (when set) must exist.
    pub fn insert_work(&mut self, work: Work) -> CatalogResult<WorkId> {
        work.validate()?;
        self.require(EntityKind::Work, work.id, EntityKind::Composer, work.composer)?;
        if let Some(form) = work.form {
            self.require(EntityKind::Work, work.id, EntityKind::MusicalForm, form)?;
        }
        let id = work.id;
        self.works.insert(id, work);
        Ok(id)
    }

    /// Get a work by ID
    pub fn work(&self, id: WorkId) -> Option<&Work> {
        self.works.get(&id)
    }

    /// All works, in id order
    pub fn works(&self) -> impl Iterator<Item = &Work> {
        self.works.values()
    }

    /// Primary and derived titles of a work, with its form resolved
    pub fn work_titles(&self, work: &Work) -> WorkTitles {
        let form = work
            .form
            .and_then(|id| self.musical_forms.get(&id))
            .map(|f| f.name.as_str());
        work.titles(form)
    }

    /// Remove a work together with its performances
    pub fn remove_work(&mut self, id: WorkId) -> Option<Work> {
        let performances: Vec<PerformanceId> = self
            .performances
            .values()
            .filter(|p| p.work == id)
            .map(|p| p.id)
            .collect();
        for performance in performances {
            self.remove_performance(performance);
        }
        let removed = self.works.remove(&id);
        if removed.is_some() {
            debug!(work = %id, "Removed work");
        }
        removed
    }

    // ========================================================================
    // Artist types and artists
    // ========================================================================

    /// Insert or replace an artist type
    pub fn insert_artist_type(&mut self, artist_type: ArtistType) -> CatalogResult<ArtistTypeId> {
        artist_type.validate()?;
        ensure_unique(
            &self.artist_types,
            artist_type.id,
            &artist_type.name,
            |t| t.name.as_str(),
            EntityKind::ArtistType,
        )?;
        let id = artist_type.id;
        self.artist_types.insert(id, artist_type);
        Ok(id)
    }

    /// Get an artist type by ID
    pub fn artist_type(&self, id: ArtistTypeId) -> Option<&ArtistType> {
        self.artist_types.get(&id)
    }

    /// All artist types, in id order
    pub fn artist_types(&self) -> impl Iterator<Item = &ArtistType> {
        self.artist_types.values()
    }

    /// Remove an artist type together with its artists
    pub fn remove_artist_type(&mut self, id: ArtistTypeId) -> Option<ArtistType> {
        let artists: Vec<ArtistId> = self
            .artists
            .values()
            .filter(|a| a.artist_type == id)
            .map(|a| a.id)
            .collect();
        for artist in artists {
            self.remove_artist(artist);
        }
        self.artist_types.remove(&id)
    }

    /// Insert or replace an artist; its type must exist
    pub fn insert_artist(&mut self, artist: Artist) -> CatalogResult<ArtistId> {
        artist.validate()?;
        self.require(EntityKind::Artist, artist.id, EntityKind::ArtistType, artist.artist_type)?;
        ensure_unique(
            &self.artists,
            artist.id,
            &artist.name,
            |a| a.name.as_str(),
            EntityKind::Artist,
        )?;
        let id = artist.id;
        self.artists.insert(id, artist);
        Ok(id)
    }

    /// Get an artist by ID
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(&id)
    }

    /// Find an artist by exact name
    pub fn artist_by_name(&self, name: &str) -> Option<&Artist> {
        self.artists.values().find(|a| a.name == name)
    }

    /// All artists, in id order
    pub fn artists(&self) -> impl Iterator<Item = &Artist> {
        self.artists.values()
    }

    /// Name of an artist's type, empty when the type is missing
    pub fn artist_type_name(&self, artist: &Artist) -> &str {
        self.artist_types
            .get(&artist.artist_type)
            .map(|t| t.name.as_str())
            .unwrap_or_default()
    }

    /// Remove an artist and strip it from every performance
    pub fn remove_artist(&mut self, id: ArtistId) -> Option<Artist> {
        for performance in self.performances.values_mut() {
            performance.artists.retain(|a| *a != id);
        }
        self.artists.remove(&id)
    }

    // ========================================================================
    // Musical forms, venues and series
    // ========================================================================

    /// Insert or replace a musical form
    pub fn insert_musical_form(&mut self, form: MusicalForm) -> CatalogResult<MusicalFormId> {
        form.validate()?;
        ensure_unique(
            &self.musical_forms,
            form.id,
            &form.name,
            |f| f.name.as_str(),
            EntityKind::MusicalForm,
        )?;
        let id = form.id;
        self.musical_forms.insert(id, form);
        Ok(id)
    }

    /// Get a musical form by ID
    pub fn musical_form(&self, id: MusicalFormId) -> Option<&MusicalForm> {
        self.musical_forms.get(&id)
    }

    /// All musical forms, in id order
    pub fn musical_forms(&self) -> impl Iterator<Item = &MusicalForm> {
        self.musical_forms.values()
    }

    /// Remove a musical form together with the works of that form
    pub fn remove_musical_form(&mut self, id: MusicalFormId) -> Option<MusicalForm> {
        let works: Vec<WorkId> = self
            .works
            .values()
            .filter(|w| w.form == Some(id))
            .map(|w| w.id)
            .collect();
        for work in works {
            self.remove_work(work);
        }
        self.musical_forms.remove(&id)
    }

    /// Insert or replace a venue
    pub fn insert_venue(&mut self, venue: Venue) -> CatalogResult<VenueId> {
        venue.validate()?;
        ensure_unique(&self.venues, venue.id, &venue.name, |v| v.name.as_str(), EntityKind::Venue)?;
        let id = venue.id;
        self.venues.insert(id, venue);
        Ok(id)
    }

    /// Get a venue by ID
    pub fn venue(&self, id: VenueId) -> Option<&Venue> {
        self.venues.get(&id)
    }

    /// All venues, in id order
    pub fn venues(&self) -> impl Iterator<Item = &Venue> {
        self.venues.values()
    }

    /// Remove a venue together with the concerts held there
    pub fn remove_venue(&mut self, id: VenueId) -> Option<Venue> {
        let concerts: Vec<ConcertId> = self
            .concerts
            .values()
            .filter(|c| c.venue == id)
            .map(|c| c.id)
            .collect();
        for concert in concerts {
            self.remove_concert(concert);
        }
        self.venues.remove(&id)
    }

    /// Insert or replace a series
    pub fn insert_series(&mut self, series: Series) -> CatalogResult<SeriesId> {
        series.validate()?;
        ensure_unique(&self.series, series.id, &series.name, |s| s.name.as_str(), EntityKind::Series)?;
        let id = series.id;
        self.series.insert(id, series);
        Ok(id)
    }

    /// Get a series by ID
    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(&id)
    }

    /// All series, in id order
    pub fn all_series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    /// Remove a series together with its concerts
    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series> {
        let concerts: Vec<ConcertId> = self
            .concerts
            .values()
            .filter(|c| c.series() == Some(id))
            .map(|c| c.id)
            .collect();
        for concert in concerts {
            self.remove_concert(concert);
        }
        self.series.remove(&id)
    }

    // ========================================================================
    // Concerts
    // ========================================================================

    /// Insert or replace a concert
    ///
    /// The venue, the series (when set) and every listed performance must
    /// exist. Listed performances are attached to this concert; performances
    /// dropped from the programme of a replaced concert are deleted, since a
    /// concert owns its programme.
    pub fn insert_concert(&mut self, concert: Concert) -> CatalogResult<ConcertId> {
        concert.validate()?;
        self.require(EntityKind::Concert, concert.id, EntityKind::Venue, concert.venue)?;
        if let Some(series) = concert.series() {
            self.require(EntityKind::Concert, concert.id, EntityKind::Series, series)?;
        }
        for performance in &concert.performances {
            self.require(EntityKind::Concert, concert.id, EntityKind::Performance, *performance)?;
        }

        let id = concert.id;
        let dropped: Vec<PerformanceId> = self
            .concerts
            .get(&id)
            .map(|old| {
                old.performances
                    .iter()
                    .filter(|p| !concert.lists(**p))
                    .copied()
                    .collect()
            })
            .unwrap_or_default();

        for performance in &concert.performances {
            self.detach_performance(*performance);
            if let Some(p) = self.performances.get_mut(performance) {
                p.concert = Some(id);
            }
        }
        self.concerts.insert(id, concert);

        for performance in dropped {
            self.remove_performance(performance);
        }
        Ok(id)
    }

    /// Get a concert by ID
    pub fn concert(&self, id: ConcertId) -> Option<&Concert> {
        self.concerts.get(&id)
    }

    /// All concerts, in id order
    pub fn concerts(&self) -> impl Iterator<Item = &Concert> {
        self.concerts.values()
    }

    /// Display title of a concert, with its series resolved
    pub fn concert_title(&self, concert: &Concert) -> String {
        let series = concert
            .series()
            .and_then(|id| self.series.get(&id))
            .map(|s| s.name.as_str());
        derive_concert_title(&concert.name, series, concert.series_instance())
    }

    /// Name of a concert's venue, empty when the venue is missing
    pub fn venue_name(&self, concert: &Concert) -> &str {
        self.venues
            .get(&concert.venue)
            .map(|v| v.name.as_str())
            .unwrap_or_default()
    }

    /// Remove a concert together with its performances
    pub fn remove_concert(&mut self, id: ConcertId) -> Option<Concert> {
        let removed = self.concerts.remove(&id)?;
        for performance in &removed.performances {
            self.performances.remove(performance);
        }
        debug!(
            concert = %id,
            performances = removed.performances.len(),
            "Removed concert"
        );
        Some(removed)
    }

    // ========================================================================
    // Performances
    // ========================================================================

    /// Insert or replace a performance
    ///
    /// The work and every artist must exist. When `concert` is set the
    /// performance is appended to that concert's programme (or keeps its
    /// place if already listed) and removed from any other programme.
    /// An empty line-up is stored as is and left to the [`crate::Validator`].
    pub fn insert_performance(&mut self, performance: Performance) -> CatalogResult<PerformanceId> {
        self.require(EntityKind::Performance, performance.id, EntityKind::Work, performance.work)?;
        for artist in &performance.artists {
            self.require(EntityKind::Performance, performance.id, EntityKind::Artist, *artist)?;
        }
        if let Some(concert) = performance.concert {
            self.require(EntityKind::Performance, performance.id, EntityKind::Concert, concert)?;
        }

        let id = performance.id;
        let target = performance.concert;
        for concert in self.concerts.values_mut() {
            if Some(concert.id) != target {
                concert.performances.retain(|p| *p != id);
            } else if !concert.lists(id) {
                concert.performances.push(id);
            }
        }
        self.performances.insert(id, performance);
        Ok(id)
    }

    /// Append a performance to a concert's programme
    pub fn add_performance(
        &mut self,
        concert: ConcertId,
        mut performance: Performance,
    ) -> CatalogResult<PerformanceId> {
        if !self.concerts.contains_key(&concert) {
            return Err(CatalogError::not_found(EntityKind::Concert.as_str(), concert));
        }
        performance.concert = Some(concert);
        self.insert_performance(performance)
    }

    /// Get a performance by ID
    pub fn performance(&self, id: PerformanceId) -> Option<&Performance> {
        self.performances.get(&id)
    }

    /// All performances, in id order
    pub fn performances(&self) -> impl Iterator<Item = &Performance> {
        self.performances.values()
    }

    /// Concert a performance belongs to, if the back-reference resolves
    pub fn concert_of(&self, performance: &Performance) -> Option<&Concert> {
        let concert = performance.concert.and_then(|id| self.concerts.get(&id));
        if concert.is_none() {
            debug!(performance = %performance.id, "Performance has no resolvable concert");
        }
        concert
    }

    /// Performances of a work, in id order
    pub fn performances_of_work(&self, work: WorkId) -> Vec<&Performance> {
        self.performances.values().filter(|p| p.work == work).collect()
    }

    /// Performances an artist takes part in, in id order
    pub fn performances_of_artist(&self, artist: ArtistId) -> Vec<&Performance> {
        self.performances
            .values()
            .filter(|p| p.features(artist))
            .collect()
    }

    /// Programme label of a performance ("* Sinfonia n.º 5 (1.º mov.)")
    pub fn performance_label(&self, performance: &Performance) -> String {
        let title = self
            .works
            .get(&performance.work)
            .map(|w| self.work_titles(w).primary_title().to_string())
            .unwrap_or_default();
        performance_label(performance.encore, &title, &performance.detail)
    }

    /// Detach a performance from its concert, keeping the record
    pub fn detach_performance(&mut self, id: PerformanceId) -> Option<ConcertId> {
        let performance = self.performances.get_mut(&id)?;
        let concert = performance.concert.take();
        if let Some(concert) = concert.and_then(|c| self.concerts.get_mut(&c)) {
            concert.performances.retain(|p| *p != id);
        }
        concert
    }

    /// Remove a performance and drop it from its concert's programme
    pub fn remove_performance(&mut self, id: PerformanceId) -> Option<Performance> {
        self.detach_performance(id);
        for concert in self.concerts.values_mut() {
            concert.performances.retain(|p| *p != id);
        }
        self.performances.remove(&id)
    }

    // ========================================================================
    // Generic operations
    // ========================================================================

    /// Display name of any record, as used in messages and summaries
    pub fn display_name(&self, kind: EntityKind, id: Uuid) -> Option<String> {
        match kind {
            EntityKind::Composer => self.composer(id).map(|c| c.short_name.clone()),
            EntityKind::Work => self
                .work(id)
                .map(|w| self.work_titles(w).primary_title().to_string()),
            EntityKind::Artist => self.artist(id).map(|a| a.name.clone()),
            EntityKind::ArtistType => self.artist_type(id).map(|t| t.name.clone()),
            EntityKind::MusicalForm => self.musical_form(id).map(|f| f.name.clone()),
            EntityKind::Venue => self.venue(id).map(|v| v.name.clone()),
            EntityKind::Series => self.series(id).map(|s| s.name.clone()),
            EntityKind::Performance => self.performance(id).map(|p| self.performance_label(p)),
            EntityKind::Concert => self.concert(id).map(|c| self.concert_title(c)),
        }
    }

    /// Rename a record that has a unique name
    ///
    /// For composers this changes the short name. Works, performances and
    /// concerts have no single name and are rejected.
    pub fn rename(&mut self, kind: EntityKind, id: Uuid, name: &str) -> CatalogResult<()> {
        let name = name.trim().to_string();
        let missing = || CatalogError::not_found(kind.as_str(), id);
        match kind {
            EntityKind::Composer => {
                let mut composer = self.composer(id).cloned().ok_or_else(missing)?;
                composer.short_name = name;
                self.insert_composer(composer)?;
            }
            EntityKind::Artist => {
                let mut artist = self.artist(id).cloned().ok_or_else(missing)?;
                artist.name = name;
                self.insert_artist(artist)?;
            }
            EntityKind::ArtistType => {
                let mut artist_type = self.artist_type(id).cloned().ok_or_else(missing)?;
                artist_type.name = name;
                self.insert_artist_type(artist_type)?;
            }
            EntityKind::MusicalForm => {
                let mut form = self.musical_form(id).cloned().ok_or_else(missing)?;
                form.name = name;
                self.insert_musical_form(form)?;
            }
            EntityKind::Venue => {
                let mut venue = self.venue(id).cloned().ok_or_else(missing)?;
                venue.name = name;
                self.insert_venue(venue)?;
            }
            EntityKind::Series => {
                let mut series = self.series(id).cloned().ok_or_else(missing)?;
                series.name = name;
                self.insert_series(series)?;
            }
            EntityKind::Work | EntityKind::Performance | EntityKind::Concert => {
                return Err(CatalogError::validation(format!(
                    "{} records cannot be renamed",
                    kind.display_name()
                )));
            }
        }
        Ok(())
    }

    /// Number of records that depend on the given one
    ///
    /// Composer, musical form: works. Work, artist, concert: performances.
    /// Artist type: artists. Venue, series: concerts. Performance: none.
    pub fn dependency_count(&self, kind: EntityKind, id: Uuid) -> usize {
        match kind {
            EntityKind::Composer => self.works.values().filter(|w| w.composer == id).count(),
            EntityKind::Work => self.performances.values().filter(|p| p.work == id).count(),
            EntityKind::Artist => self
                .performances
                .values()
                .filter(|p| p.features(id))
                .count(),
            EntityKind::ArtistType => self
                .artists
                .values()
                .filter(|a| a.artist_type == id)
                .count(),
            EntityKind::MusicalForm => self.works.values().filter(|w| w.form == Some(id)).count(),
            EntityKind::Venue => self.concerts.values().filter(|c| c.venue == id).count(),
            EntityKind::Series => self
                .concerts
                .values()
                .filter(|c| c.series() == Some(id))
                .count(),
            EntityKind::Concert => self
                .concerts
                .get(&id)
                .map(|c| c.performances.len())
                .unwrap_or(0),
            EntityKind::Performance => 0,
        }
    }

    /// Remove any record, cascading to its dependents
    ///
    /// Returns whether a record was removed.
    pub fn remove(&mut self, kind: EntityKind, id: Uuid) -> bool {
        match kind {
            EntityKind::Composer => self.remove_composer(id).is_some(),
            EntityKind::Work => self.remove_work(id).is_some(),
            EntityKind::Artist => self.remove_artist(id).is_some(),
            EntityKind::ArtistType => self.remove_artist_type(id).is_some(),
            EntityKind::MusicalForm => self.remove_musical_form(id).is_some(),
            EntityKind::Venue => self.remove_venue(id).is_some(),
            EntityKind::Series => self.remove_series(id).is_some(),
            EntityKind::Performance => self.remove_performance(id).is_some(),
            EntityKind::Concert => self.remove_concert(id).is_some(),
        }
    }

    /// Remove a record only when nothing depends on it
    ///
    /// Fails with `HasDependents` otherwise and with `NotFound` when the
    /// record does not exist.
    pub fn delete_unused(&mut self, kind: EntityKind, id: Uuid) -> CatalogResult<()> {
        let name = self
            .display_name(kind, id)
            .ok_or_else(|| CatalogError::not_found(kind.as_str(), id))?;
        let count = self.dependency_count(kind, id);
        if count > 0 {
            return Err(CatalogError::HasDependents {
                kind: kind.as_str().to_string(),
                name,
                count,
            });
        }
        self.remove(kind, id);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
