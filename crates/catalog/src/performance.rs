//! Performance records
//!
//! A performance is one work played by one or more artists at a concert.
//! The concert owns the ordering (see [`crate::Concert::performances`]);
//! the `concert` field here is only a back-reference resolved by lookup.

use bach_core::{ArtistId, ConcertId, EntityKind, Identifiable, PerformanceId, WorkId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single programme item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Unique identifier
    pub id: PerformanceId,

    /// Work performed
    pub work: WorkId,

    /// Performing artists, in billing order (duplicates allowed)
    #[serde(default)]
    pub artists: Vec<ArtistId>,

    /// Free-form detail ("2.º movimento", "versão para piano")
    #[serde(default)]
    pub detail: String,

    /// Whether this was played as an encore
    #[serde(default)]
    pub encore: bool,

    /// Concert this performance belongs to, if attached
    #[serde(default)]
    pub concert: Option<ConcertId>,
}

impl Performance {
    /// Create a detached performance of a work
    pub fn new(work: WorkId) -> Self {
        Self {
            id: Uuid::new_v4(),
            work,
            artists: Vec::new(),
            detail: String::new(),
            encore: false,
            concert: None,
        }
    }

    /// Set a specific identifier (used when importing)
    pub fn with_id(mut self, id: PerformanceId) -> Self {
        self.id = id;
        self
    }

    /// Append an artist
    pub fn with_artist(mut self, artist: ArtistId) -> Self {
        self.artists.push(artist);
        self
    }

    /// Replace the artist list
    pub fn with_artists(mut self, artists: impl IntoIterator<Item = ArtistId>) -> Self {
        self.artists = artists.into_iter().collect();
        self
    }

    /// Set the detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into().trim().to_string();
        self
    }

    /// Mark as an encore
    pub fn as_encore(mut self) -> Self {
        self.encore = true;
        self
    }

    /// Whether the given artist takes part
    pub fn features(&self, artist: ArtistId) -> bool {
        self.artists.contains(&artist)
    }

    /// Whether anyone is credited
    ///
    /// A performance may be stored without artists, for instance after its
    /// only artist was removed. The validator reports it.
    pub fn has_artists(&self) -> bool {
        !self.artists.is_empty()
    }
}

impl Identifiable for Performance {
    const KIND: EntityKind = EntityKind::Performance;

    fn id(&self) -> Uuid {
        self.id
    }
}
