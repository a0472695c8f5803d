//! Display titles for works, concerts and performances
//!
//! Titles are never stored. They are synthesized on every read from the
//! optional descriptive fields, so editing a work's opus or a concert's
//! series immediately changes every label that shows it.
//!
//! ## Work titles
//!
//! The derived title concatenates, in a fixed order, whichever of these
//! fragments are present:
//!
//! | Field | Fragment |
//! |---|---|
//! | form | `Sinfonia` |
//! | instruments | `para piano` |
//! | number | `n.º 9` |
//! | tonality | `em Dó maior` |
//! | opus | `, Op. 125` |
//! | catalogue | `, BWV 1048` |
//! | nickname | `, “Coral”` |
//!
//! The joined text then has whitespace runs collapsed, `" ,"` tightened to
//! `","`, and one leading `", "` removed, so a work known only by its
//! catalogue number reads `BWV 1048` rather than `, BWV 1048`.

use bach_core::Tonality;
use bach_core::text::collapse_whitespace;

// ============================================================================
// Work titles
// ============================================================================

/// Borrowed view of the fields that feed a work's derived title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkTitleParts<'a> {
    pub form: Option<&'a str>,
    pub instruments: &'a str,
    pub number: &'a str,
    pub tonality: Option<Tonality>,
    pub opus: &'a str,
    pub catalogue: &'a str,
    pub nickname: &'a str,
}

/// Build the derived title of a work
///
/// Returns an empty string when no fragment applies.
pub fn derive_work_title(parts: &WorkTitleParts<'_>) -> String {
    let mut fragments: Vec<String> = Vec::new();

    if let Some(form) = parts.form {
        fragments.push(form.to_string());
    }
    if !parts.instruments.is_empty() {
        fragments.push(format!("para {}", parts.instruments));
    }
    if !parts.number.is_empty() {
        fragments.push(format!("n.º {}", parts.number));
    }
    if let Some(tonality) = parts.tonality {
        fragments.push(format!("em {}", tonality.display_name()));
    }
    if !parts.opus.is_empty() {
        fragments.push(format!(", Op. {}", parts.opus));
    }
    if !parts.catalogue.is_empty() {
        fragments.push(format!(", {}", parts.catalogue));
    }
    if !parts.nickname.is_empty() {
        fragments.push(format!(", “{}”", parts.nickname));
    }

    if fragments.is_empty() {
        return String::new();
    }

    let joined = collapse_whitespace(&fragments.join(" ")).replace(" ,", ",");
    let joined = joined.trim();

    joined
        .strip_prefix(", ")
        .unwrap_or(joined)
        .trim()
        .to_string()
}

/// The two titles of a work: the one shown first and the derived one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkTitles {
    primary: String,
    derived: String,
}

impl WorkTitles {
    /// Compute both titles from the custom name and the title parts
    pub fn new(name: &str, parts: &WorkTitleParts<'_>) -> Self {
        let derived = derive_work_title(parts);
        let primary = if name.is_empty() {
            derived.clone()
        } else {
            name.to_string()
        };
        Self { primary, derived }
    }

    /// The custom name when present, otherwise the derived title
    pub fn primary_title(&self) -> &str {
        &self.primary
    }

    /// The title synthesized from form, key, opus and friends
    pub fn derived_title(&self) -> &str {
        &self.derived
    }

    /// Whether the derived title is worth showing as a subtitle
    ///
    /// True only when a custom name exists and a derived title is computable.
    pub fn has_derived_title(&self) -> bool {
        !self.derived.is_empty() && self.derived != self.primary
    }

    /// Consume into `(primary, derived)`
    pub fn into_parts(self) -> (String, String) {
        (self.primary, self.derived)
    }
}

// ============================================================================
// Concert titles
// ============================================================================

/// Build the display title of a concert
///
/// The series part is `"{series} {instance}"`; the instance number is only
/// meaningful together with a series and is ignored without one. A concert
/// with neither name nor series has an empty title.
pub fn derive_concert_title(name: &str, series: Option<&str>, instance: Option<i32>) -> String {
    let derived = match (series, instance) {
        (Some(series), Some(instance)) => format!("{} {}", series, instance),
        (Some(series), None) => series.to_string(),
        (None, _) => String::new(),
    };

    if name.is_empty() {
        derived
    } else if derived.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, derived)
    }
}

// ============================================================================
// Performance labels
// ============================================================================

/// Single-line label of a performance in a concert programme
///
/// Encores are prefixed with `"* "`; a non-empty detail is appended in
/// parentheses.
pub fn performance_label(encore: bool, work_title: &str, detail: &str) -> String {
    let mut label = String::new();
    if encore {
        label.push_str("* ");
    }
    label.push_str(work_title);
    if !detail.is_empty() {
        label.push_str(&format!(" ({})", detail));
    }
    label
}

// ============================================================================
// Tests
// ============================================================================
