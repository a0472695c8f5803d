//! Concert records

use bach_core::{
    CatalogResult, ConcertId, EntityKind, Identifiable, PerformanceId, SeriesId, Validatable,
    VenueId,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A concert the user attended (or will attend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concert {
    /// Unique identifier
    pub id: ConcertId,

    /// Local wall-clock date and time
    pub date: NaiveDateTime,

    /// Venue
    pub venue: VenueId,

    /// Series the concert belongs to
    #[serde(default)]
    series: Option<SeriesId>,

    /// Number of the concert within its series
    #[serde(default)]
    series_instance: Option<i32>,

    /// Optional name ("Concerto de Abertura")
    #[serde(default)]
    pub name: String,

    /// Programme, in performance order
    #[serde(default)]
    pub performances: Vec<PerformanceId>,
}

impl Concert {
    /// Create a concert at a venue
    pub fn new(date: NaiveDateTime, venue: VenueId) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            venue,
            series: None,
            series_instance: None,
            name: String::new(),
            performances: Vec::new(),
        }
    }

    /// Set a specific identifier (used when importing)
    pub fn with_id(mut self, id: ConcertId) -> Self {
        self.id = id;
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into().trim().to_string();
        self
    }

    /// Set the series and, optionally, the instance number
    pub fn with_series(mut self, series: SeriesId, instance: Option<i32>) -> Self {
        self.series = Some(series);
        self.series_instance = instance;
        self
    }

    /// Series the concert belongs to
    pub fn series(&self) -> Option<SeriesId> {
        self.series
    }

    /// Number within the series; always `None` without a series
    pub fn series_instance(&self) -> Option<i32> {
        self.series.and(self.series_instance)
    }

    /// Change the series; clearing it also clears the instance number
    pub fn set_series(&mut self, series: Option<SeriesId>) {
        self.series = series;
        if series.is_none() {
            self.series_instance = None;
        }
    }

    /// Change the instance number; ignored while no series is set
    pub fn set_series_instance(&mut self, instance: Option<i32>) {
        self.series_instance = if self.series.is_some() { instance } else { None };
    }

    /// Whether the programme lists the given performance
    pub fn lists(&self, performance: PerformanceId) -> bool {
        self.performances.contains(&performance)
    }
}

impl Identifiable for Concert {
    const KIND: EntityKind = EntityKind::Concert;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Validatable for Concert {
    fn validate(&self) -> CatalogResult<()> {
        // A concert with neither name nor series is legal; its title is empty.
        Ok(())
    }
}
