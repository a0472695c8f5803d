//! Work records
//!
//! A work belongs to exactly one composer. Its display titles are derived
//! on read from the descriptive fields (see [`crate::titles`]).

use crate::titles::{WorkTitleParts, WorkTitles};
use bach_core::{
    CatalogError, CatalogResult, ComposerId, EntityKind, Identifiable, MusicalFormId, Tonality,
    Validatable, WorkId,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A musical work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    /// Unique identifier
    pub id: WorkId,

    /// Custom name; when empty the derived title is shown instead
    #[serde(default)]
    pub name: String,

    /// Free-form detail (movement, version, ...)
    #[serde(default)]
    pub detail: String,

    /// Opus number without the "Op." prefix
    #[serde(default)]
    pub opus: String,

    /// Catalogue reference including its prefix ("BWV 1048")
    #[serde(default)]
    pub catalogue: String,

    /// Popular nickname without quotes
    #[serde(default)]
    pub nickname: String,

    /// Ordinal within the form ("9")
    #[serde(default)]
    pub number: String,

    /// Instrumentation ("piano e orquestra")
    #[serde(default)]
    pub instruments: String,

    /// Musical form
    #[serde(default)]
    pub form: Option<MusicalFormId>,

    /// Key
    #[serde(default)]
    pub tonality: Option<Tonality>,

    /// Owning composer
    pub composer: ComposerId,
}

impl Work {
    /// Create an empty work for a composer
    pub fn new(composer: ComposerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            detail: String::new(),
            opus: String::new(),
            catalogue: String::new(),
            nickname: String::new(),
            number: String::new(),
            instruments: String::new(),
            form: None,
            tonality: None,
            composer,
        }
    }

    /// Set a specific identifier (used when importing)
    pub fn with_id(mut self, id: WorkId) -> Self {
        self.id = id;
        self
    }

    /// Set the custom name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into().trim().to_string();
        self
    }

    /// Set the detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into().trim().to_string();
        self
    }

    /// Set the opus number
    pub fn with_opus(mut self, opus: impl Into<String>) -> Self {
        self.opus = opus.into().trim().to_string();
        self
    }

    /// Set the catalogue reference
    pub fn with_catalogue(mut self, catalogue: impl Into<String>) -> Self {
        self.catalogue = catalogue.into().trim().to_string();
        self
    }

    /// Set the nickname
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into().trim().to_string();
        self
    }

    /// Set the number within the form
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into().trim().to_string();
        self
    }

    /// Set the instrumentation
    pub fn with_instruments(mut self, instruments: impl Into<String>) -> Self {
        self.instruments = instruments.into().trim().to_string();
        self
    }

    /// Set the musical form
    pub fn with_form(mut self, form: MusicalFormId) -> Self {
        self.form = Some(form);
        self
    }

    /// Set the key
    pub fn with_tonality(mut self, tonality: Tonality) -> Self {
        self.tonality = Some(tonality);
        self
    }

    /// Title parts, given the resolved name of the form (if any)
    pub fn title_parts<'a>(&'a self, form_name: Option<&'a str>) -> WorkTitleParts<'a> {
        WorkTitleParts {
            form: form_name,
            instruments: &self.instruments,
            number: &self.number,
            tonality: self.tonality,
            opus: &self.opus,
            catalogue: &self.catalogue,
            nickname: &self.nickname,
        }
    }

    /// Primary and derived titles, given the resolved name of the form
    ///
    /// Use [`crate::Catalog::work_titles`] to have the form resolved.
    pub fn titles(&self, form_name: Option<&str>) -> WorkTitles {
        WorkTitles::new(&self.name, &self.title_parts(form_name))
    }
}

impl Identifiable for Work {
    const KIND: EntityKind = EntityKind::Work;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Validatable for Work {
    fn validate(&self) -> CatalogResult<()> {
        let untitled = self.name.trim().is_empty()
            && self.form.is_none()
            && self.tonality.is_none()
            && [
                &self.instruments,
                &self.number,
                &self.opus,
                &self.catalogue,
                &self.nickname,
            ]
            .iter()
            .all(|s| s.trim().is_empty());

        if untitled {
            return Err(CatalogError::record_validation(
                EntityKind::Work.as_str(),
                self.id.to_string(),
                "work needs a name or at least one descriptive field",
            ));
        }
        Ok(())
    }
}
