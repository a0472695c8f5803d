//! JSON export of concerts
//!
//! The export is a self-contained, human-readable snapshot: every reference
//! is replaced by the referenced record's names, keys are camelCase and
//! sorted, and optional values are omitted when absent.

use crate::catalog::Catalog;
use crate::concert::Concert;
use crate::performance::Performance;
use crate::relations::performances_ordered;
use bach_core::{CatalogError, CatalogResult, Tonality};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// Data transfer objects
// ============================================================================

/// Exported composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerDto {
    pub full_name: String,
    pub short_name: String,
}

/// Exported artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub name: String,
    #[serde(rename = "type")]
    pub artist_type: String,
}

/// Exported work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDto {
    pub name: String,
    pub detail: String,
    pub opus: String,
    pub catalogue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tonality: Option<Tonality>,
    pub nickname: String,
    pub number: String,
    pub instruments: String,
    pub composer: ComposerDto,
}

/// Exported performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDto {
    pub work: WorkDto,
    pub artists: Vec<ArtistDto>,
    pub detail: String,
    pub encore: bool,
}

/// Exported concert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcertDto {
    pub name: String,
    pub date: NaiveDateTime,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_instance: Option<i32>,
    pub performances: Vec<PerformanceDto>,
}

// ============================================================================
// Conversion
// ============================================================================

fn performance_dto(catalog: &Catalog, performance: &Performance) -> Option<PerformanceDto> {
    let Some(work) = catalog.work(performance.work) else {
        debug!(performance = %performance.id, "Skipping performance with missing work");
        return None;
    };
    let Some(composer) = catalog.composer(work.composer) else {
        debug!(work = %work.id, "Skipping work with missing composer");
        return None;
    };

    let artists = performance
        .artists
        .iter()
        .filter_map(|id| catalog.artist(*id))
        .map(|artist| ArtistDto {
            name: artist.name.clone(),
            artist_type: catalog.artist_type_name(artist).to_string(),
        })
        .collect();

    Some(PerformanceDto {
        work: WorkDto {
            name: work.name.clone(),
            detail: work.detail.clone(),
            opus: work.opus.clone(),
            catalogue: work.catalogue.clone(),
            form: work
                .form
                .and_then(|id| catalog.musical_form(id))
                .map(|f| f.name.clone()),
            tonality: work.tonality,
            nickname: work.nickname.clone(),
            number: work.number.clone(),
            instruments: work.instruments.clone(),
            composer: ComposerDto {
                full_name: composer.full_name.clone(),
                short_name: composer.short_name.clone(),
            },
        },
        artists,
        detail: performance.detail.clone(),
        encore: performance.encore,
    })
}

/// Snapshot of one concert with every reference resolved
pub fn concert_dto(catalog: &Catalog, concert: &Concert) -> ConcertDto {
    let series = concert.series().and_then(|id| catalog.series(id));
    ConcertDto {
        name: concert.name.clone(),
        date: concert.date,
        venue: catalog.venue_name(concert).to_string(),
        series: series.map(|s| s.name.clone()),
        series_instance: series.and(concert.series_instance()),
        performances: performances_ordered(catalog, concert)
            .into_iter()
            .filter_map(|p| performance_dto(catalog, p))
            .collect(),
    }
}

/// Every concert, oldest first
pub fn export_concerts(catalog: &Catalog) -> Vec<ConcertDto> {
    let mut concerts: Vec<&Concert> = catalog.concerts().collect();
    concerts.sort_by_key(|c| c.date);
    concerts
        .into_iter()
        .map(|c| concert_dto(catalog, c))
        .collect()
}

/// Render the export as pretty JSON with object keys sorted
pub fn export_json(catalog: &Catalog) -> CatalogResult<String> {
    let concerts = export_concerts(catalog);
    // Going through `Value` sorts keys: serde_json maps are ordered by key.
    let value = serde_json::to_value(&concerts)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Write the export to a file
pub fn write_export(catalog: &Catalog, path: &Path) -> CatalogResult<usize> {
    let json = export_json(catalog)?;
    std::fs::write(path, json).map_err(|e| CatalogError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let count = catalog.count(bach_core::EntityKind::Concert);
    info!(path = %path.display(), concerts = count, "Exported concerts");
    Ok(count)
}

// ============================================================================
// Tests
// ============================================================================
