//! Artist records

use bach_core::{
    ArtistId, ArtistTypeId, CatalogError, CatalogResult, EntityKind, Identifiable, Named,
    Validatable,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A performer or ensemble
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier
    pub id: ArtistId,

    /// Unique name
    pub name: String,

    /// Category ("Pianista", "Orquestra", ...)
    pub artist_type: ArtistTypeId,
}

impl Artist {
    /// Create a new artist of the given type
    pub fn new(name: impl Into<String>, artist_type: ArtistTypeId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().trim().to_string(),
            artist_type,
        }
    }

    /// Set a specific identifier (used when importing)
    pub fn with_id(mut self, id: ArtistId) -> Self {
        self.id = id;
        self
    }
}

impl Identifiable for Artist {
    const KIND: EntityKind = EntityKind::Artist;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for Artist {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name.trim().to_string();
    }
}

impl Validatable for Artist {
    fn validate(&self) -> CatalogResult<()> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::record_validation(
                EntityKind::Artist.as_str(),
                self.id.to_string(),
                "name cannot be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_artist() {
        let kind = Uuid::new_v4();
        let artist = Artist::new(" Nelson Freire ", kind);
        assert_eq!(artist.name, "Nelson Freire");
        assert_eq!(artist.artist_type, kind);
        assert!(artist.is_valid());
        assert!(artist.name_matches("NELSON FREIRE"));
    }

    #[test]
    fn test_set_name_trims() {
        let mut artist = Artist::new("x", Uuid::new_v4());
        artist.set_name("  Martha Argerich ".to_string());
        assert_eq!(artist.name(), "Martha Argerich");

        artist.set_name("   ".to_string());
        assert!(!artist.is_valid());
    }
}
