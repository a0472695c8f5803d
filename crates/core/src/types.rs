//! Core types used throughout Bach Tracking
//!
//! This module contains the identifier aliases, the `EntityKind` used to
//! build composite identifiers, and the `Tonality` enumeration shown in
//! derived work titles.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for composer identifiers
pub type ComposerId = uuid::Uuid;

/// Type alias for work identifiers
pub type WorkId = uuid::Uuid;

/// Type alias for artist identifiers
pub type ArtistId = uuid::Uuid;

/// Type alias for artist type identifiers
pub type ArtistTypeId = uuid::Uuid;

/// Type alias for musical form identifiers
pub type MusicalFormId = uuid::Uuid;

/// Type alias for venue identifiers
pub type VenueId = uuid::Uuid;

/// Type alias for series identifiers
pub type SeriesId = uuid::Uuid;

/// Type alias for performance identifiers
pub type PerformanceId = uuid::Uuid;

/// Type alias for concert identifiers
pub type ConcertId = uuid::Uuid;

// ============================================================================
// Entity Kinds
// ============================================================================

/// Every kind of record stored in a catalog
///
/// The lowercase tag is the prefix of composite identifiers
/// (`"composer.{uuid}"`) used by the search index and deep links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Composer,
    Work,
    Artist,
    ArtistType,
    MusicalForm,
    Venue,
    Series,
    Performance,
    Concert,
}

impl EntityKind {
    /// Tag used in composite identifiers
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Composer => "composer",
            EntityKind::Work => "work",
            EntityKind::Artist => "artist",
            EntityKind::ArtistType => "artist_type",
            EntityKind::MusicalForm => "musical_form",
            EntityKind::Venue => "venue",
            EntityKind::Series => "series",
            EntityKind::Performance => "performance",
            EntityKind::Concert => "concert",
        }
    }

    /// Singular display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Composer => "Compositor",
            EntityKind::Work => "Obra",
            EntityKind::Artist => "Artista",
            EntityKind::ArtistType => "Tipo de Artista",
            EntityKind::MusicalForm => "Forma",
            EntityKind::Venue => "Local",
            EntityKind::Series => "Série",
            EntityKind::Performance => "Execução",
            EntityKind::Concert => "Concerto",
        }
    }

    /// Get all entity kinds
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Composer,
            EntityKind::Work,
            EntityKind::Artist,
            EntityKind::ArtistType,
            EntityKind::MusicalForm,
            EntityKind::Venue,
            EntityKind::Series,
            EntityKind::Performance,
            EntityKind::Concert,
        ]
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error produced when a string is not a known [`EntityKind`] tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind: {0}")]
pub struct UnknownEntityKind(pub String);

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}

// ============================================================================
// Tonality
// ============================================================================

/// Key of a work, serialized by its Portuguese display value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tonality {
    #[serde(rename = "Dó maior")]
    CMajor,
    #[serde(rename = "Dó menor")]
    CMinor,
    #[serde(rename = "Dó sustenido maior")]
    CSharpMajor,
    #[serde(rename = "Dó sustenido menor")]
    CSharpMinor,
    #[serde(rename = "Ré bemol maior")]
    DFlatMajor,
    #[serde(rename = "Ré maior")]
    DMajor,
    #[serde(rename = "Ré menor")]
    DMinor,
    #[serde(rename = "Ré sustenido menor")]
    DSharpMinor,
    #[serde(rename = "Mi bemol maior")]
    EFlatMajor,
    #[serde(rename = "Mi bemol menor")]
    EFlatMinor,
    #[serde(rename = "Mi maior")]
    EMajor,
    #[serde(rename = "Mi menor")]
    EMinor,
    #[serde(rename = "Fá maior")]
    FMajor,
    #[serde(rename = "Fá menor")]
    FMinor,
    #[serde(rename = "Fá sustenido maior")]
    FSharpMajor,
    #[serde(rename = "Fá sustenido menor")]
    FSharpMinor,
    #[serde(rename = "Sol bemol maior")]
    GFlatMajor,
    #[serde(rename = "Sol maior")]
    GMajor,
    #[serde(rename = "Sol menor")]
    GMinor,
    #[serde(rename = "Sol sustenido menor")]
    GSharpMinor,
    #[serde(rename = "Lá bemol maior")]
    AFlatMajor,
    #[serde(rename = "Lá bemol menor")]
    AFlatMinor,
    #[serde(rename = "Lá maior")]
    AMajor,
    #[serde(rename = "Lá menor")]
    AMinor,
    #[serde(rename = "Si bemol maior")]
    BFlatMajor,
    #[serde(rename = "Si bemol menor")]
    BFlatMinor,
    #[serde(rename = "Si maior")]
    BMajor,
    #[serde(rename = "Si menor")]
    BMinor,
}

impl Tonality {
    /// Display value used in titles and exports
    pub fn display_name(&self) -> &'static str {
        match self {
            Tonality::CMajor => "Dó maior",
            Tonality::CMinor => "Dó menor",
            Tonality::CSharpMajor => "Dó sustenido maior",
            Tonality::CSharpMinor => "Dó sustenido menor",
            Tonality::DFlatMajor => "Ré bemol maior",
            Tonality::DMajor => "Ré maior",
            Tonality::DMinor => "Ré menor",
            Tonality::DSharpMinor => "Ré sustenido menor",
            Tonality::EFlatMajor => "Mi bemol maior",
            Tonality::EFlatMinor => "Mi bemol menor",
            Tonality::EMajor => "Mi maior",
            Tonality::EMinor => "Mi menor",
            Tonality::FMajor => "Fá maior",
            Tonality::FMinor => "Fá menor",
            Tonality::FSharpMajor => "Fá sustenido maior",
            Tonality::FSharpMinor => "Fá sustenido menor",
            Tonality::GFlatMajor => "Sol bemol maior",
            Tonality::GMajor => "Sol maior",
            Tonality::GMinor => "Sol menor",
            Tonality::GSharpMinor => "Sol sustenido menor",
            Tonality::AFlatMajor => "Lá bemol maior",
            Tonality::AFlatMinor => "Lá bemol menor",
            Tonality::AMajor => "Lá maior",
            Tonality::AMinor => "Lá menor",
            Tonality::BFlatMajor => "Si bemol maior",
            Tonality::BFlatMinor => "Si bemol menor",
            Tonality::BMajor => "Si maior",
            Tonality::BMinor => "Si menor",
        }
    }

    /// Whether this is a major key
    pub fn is_major(&self) -> bool {
        self.display_name().ends_with("maior")
    }

    /// Get all tonalities in picker order
    pub fn all() -> &'static [Tonality] {
        &[
            Tonality::CMajor,
            Tonality::CMinor,
            Tonality::CSharpMajor,
            Tonality::CSharpMinor,
            Tonality::DFlatMajor,
            Tonality::DMajor,
            Tonality::DMinor,
            Tonality::DSharpMinor,
            Tonality::EFlatMajor,
            Tonality::EFlatMinor,
            Tonality::EMajor,
            Tonality::EMinor,
            Tonality::FMajor,
            Tonality::FMinor,
            Tonality::FSharpMajor,
            Tonality::FSharpMinor,
            Tonality::GFlatMajor,
            Tonality::GMajor,
            Tonality::GMinor,
            Tonality::GSharpMinor,
            Tonality::AFlatMajor,
            Tonality::AFlatMinor,
            Tonality::AMajor,
            Tonality::AMinor,
            Tonality::BFlatMajor,
            Tonality::BFlatMinor,
            Tonality::BMajor,
            Tonality::BMinor,
        ]
    }
}

impl std::fmt::Display for Tonality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error produced when a string is not a known [`Tonality`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tonality: {0}")]
pub struct UnknownTonality(pub String);

impl FromStr for Tonality {
    type Err = UnknownTonality;

    /// Matches the display value, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tonality::all()
            .iter()
            .copied()
            .find(|t| t.display_name().to_lowercase() == wanted)
            .ok_or_else(|| UnknownTonality(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entity_kind_round_trip() {
        for kind in EntityKind::all() {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), *kind);
        }
        assert!("symphony".parse::<EntityKind>().is_err());
        assert!("Composer".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_entity_kind_serde_matches_tag() {
        let json = serde_json::to_string(&EntityKind::ArtistType).unwrap();
        assert_eq!(json, "\"artist_type\"");
    }

    #[test]
    fn test_tonality_display() {
        assert_eq!(Tonality::CMajor.to_string(), "Dó maior");
        assert_eq!(Tonality::EFlatMajor.to_string(), "Mi bemol maior");
        assert!(Tonality::AMajor.is_major());
        assert!(!Tonality::BMinor.is_major());
    }

    #[test]
    fn test_tonality_serializes_by_display_value() {
        let json = serde_json::to_string(&Tonality::FSharpMinor).unwrap();
        assert_eq!(json, "\"Fá sustenido menor\"");

        let parsed: Tonality = serde_json::from_str("\"Lá maior\"").unwrap();
        assert_eq!(parsed, Tonality::AMajor);
    }

    #[test]
    fn test_tonality_from_str() {
        assert_eq!(" dó MAIOR ".parse::<Tonality>().unwrap(), Tonality::CMajor);
        assert!("H-dur".parse::<Tonality>().is_err());
        assert_eq!(Tonality::all().len(), 28);
    }
}
