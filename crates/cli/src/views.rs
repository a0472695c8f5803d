//! Terminal rendering of catalog screens
//!
//! Each view renders to a `String` so commands can print it and tests can
//! inspect it. Colors are applied with `colored` and disappear when output
//! is not a terminal.

use bach_catalog::index::SearchableItem;
use bach_catalog::relations::{
    artists_of, composers_of, concerts_of_artist, concerts_of_work, find_next_concert,
    find_previous_year_concert, group_by_year_month, performances_ordered, works_of_composer,
};
use bach_catalog::reminder::AnniversaryReminder;
use bach_catalog::validation::ValidationResult;
use bach_catalog::{Artist, Catalog, Composer, Concert, SearchResults, Work};
use bach_core::EntityKind;
use bach_core::dates::{day_month, short_date_time};
use chrono::NaiveDateTime;
use colored::Colorize;

/// Heading of a concert: its title, or the venue when it has none
pub fn concert_heading(catalog: &Catalog, concert: &Concert) -> String {
    let title = catalog.concert_title(concert);
    if title.is_empty() {
        catalog.venue_name(concert).to_string()
    } else {
        title
    }
}

fn concert_row(catalog: &Catalog, concert: &Concert) -> String {
    format!(
        "  {}  {}  {}",
        short_date_time(&concert.date),
        concert_heading(catalog, concert),
        concert.id.to_string().dimmed()
    )
}

// ============================================================================
// Lists
// ============================================================================

/// Concerts bucketed by month, newest first
pub fn concert_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for group in group_by_year_month(catalog.concerts()) {
        out.push_str(&format!("{}\n", group.label().bold()));
        for concert in &group.concerts {
            out.push_str(&format!(
                "  {}  {}  {}\n",
                day_month(&concert.date),
                concert_heading(catalog, concert),
                concert.id.to_string().dimmed()
            ));
        }
    }
    if out.is_empty() {
        out.push_str("Nenhum concerto registrado\n");
    }
    out
}

/// Matches of a search, one section per record kind
pub fn search_results(catalog: &Catalog, results: &SearchResults<'_>) -> String {
    if results.is_empty() {
        return "Nenhum resultado\n".to_string();
    }

    let mut out = String::new();
    if !results.artists.is_empty() {
        out.push_str(&format!("{}\n", "Artistas".bold()));
        for artist in &results.artists {
            out.push_str(&format!("  {}  {}\n", artist.name, artist.id.to_string().dimmed()));
        }
    }
    if !results.composers.is_empty() {
        out.push_str(&format!("{}\n", "Compositores".bold()));
        for composer in &results.composers {
            out.push_str(&format!(
                "  {}  {}\n",
                composer.full_name,
                composer.id.to_string().dimmed()
            ));
        }
    }
    if !results.works.is_empty() {
        out.push_str(&format!("{}\n", "Obras".bold()));
        for work in &results.works {
            let titles = catalog.work_titles(work);
            out.push_str(&format!(
                "  {}  {}\n",
                titles.primary_title(),
                work.id.to_string().dimmed()
            ));
        }
    }
    out
}

// ============================================================================
// Detail screens
// ============================================================================

/// Concert detail: heading, date, venue, programme and artists
pub fn concert_detail(catalog: &Catalog, concert: &Concert) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", concert_heading(catalog, concert).bold()));
    out.push_str(&format!("Data: {}\n", short_date_time(&concert.date)));
    out.push_str(&format!("Local: {}\n", catalog.venue_name(concert)));

    let programme = performances_ordered(catalog, concert);
    if !programme.is_empty() {
        out.push_str(&format!("{}\n", "Programa".underline()));
        for performance in programme {
            let artists: Vec<&str> = performance
                .artists
                .iter()
                .filter_map(|id| catalog.artist(*id))
                .map(|a| a.name.as_str())
                .collect();
            out.push_str(&format!(
                "  {} ({})\n",
                catalog.performance_label(performance),
                artists.join(", ")
            ));
        }
    }

    let artists = artists_of(catalog, concert);
    if !artists.is_empty() {
        out.push_str(&format!("{}\n", "Artistas".underline()));
        for artist in artists {
            out.push_str(&format!("  {}\n", artist.name));
        }
    }
    out
}

/// Artist detail with the concerts the artist played in
pub fn artist_detail(catalog: &Catalog, artist: &Artist) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", artist.name.bold()));
    out.push_str(&format!("Tipo: {}\n", catalog.artist_type_name(artist)));
    append_concerts(&mut out, catalog, concerts_of_artist(catalog, artist.id));
    out
}

/// Work detail with its composer and the concerts it was played in
pub fn work_detail(catalog: &Catalog, work: &Work) -> String {
    let titles = catalog.work_titles(work);
    let mut out = String::new();
    out.push_str(&format!("{}\n", titles.primary_title().bold()));
    if titles.has_derived_title() {
        out.push_str(&format!("{}\n", titles.derived_title().italic()));
    }
    if let Some(composer) = catalog.composer(work.composer) {
        out.push_str(&format!("Compositor: {}\n", composer.full_name));
    }
    append_concerts(&mut out, catalog, concerts_of_work(catalog, work.id));
    out
}

/// Composer detail with the composer's works
pub fn composer_detail(catalog: &Catalog, composer: &Composer) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", composer.full_name.bold()));
    let works = works_of_composer(catalog, composer.id);
    if !works.is_empty() {
        out.push_str(&format!("{}\n", "Obras".underline()));
        for work in works {
            let titles = catalog.work_titles(work);
            let played = catalog.performances_of_work(work.id).len();
            out.push_str(&format!("  {} ({}x)\n", titles.primary_title(), played));
        }
    }
    out
}

fn append_concerts(out: &mut String, catalog: &Catalog, concerts: Vec<&Concert>) {
    if concerts.is_empty() {
        return;
    }
    out.push_str(&format!("{}\n", "Concertos".underline()));
    for concert in concerts {
        out.push_str(&format!("{}\n", concert_row(catalog, concert)));
    }
}

// ============================================================================
// Home
// ============================================================================

fn highlight(out: &mut String, catalog: &Catalog, heading: &str, concert: &Concert) {
    out.push_str(&format!("{}\n", heading.bold()));
    out.push_str(&format!("{}\n", concert_row(catalog, concert)));
    let composers: Vec<&str> = composers_of(catalog, concert)
        .iter()
        .map(|c| c.short_name.as_str())
        .collect();
    if !composers.is_empty() {
        out.push_str(&format!("    {}\n", composers.join(", ")));
    }
}

/// Highlights and section counts as of `now`
pub fn home(catalog: &Catalog, now: NaiveDateTime) -> String {
    let mut out = String::new();

    if let Some(concert) = find_previous_year_concert(catalog.concerts(), now.date()) {
        highlight(&mut out, catalog, "Um ano atrás...", concert);
    }
    if let Some(concert) = find_next_concert(catalog.concerts(), now) {
        highlight(&mut out, catalog, "Próximo concerto", concert);
    }

    let sections = [
        ("Concertos", EntityKind::Concert),
        ("Artistas", EntityKind::Artist),
        ("Compositores", EntityKind::Composer),
        ("Obras", EntityKind::Work),
    ];
    for (label, kind) in sections {
        out.push_str(&format!("{}: {}\n", label, catalog.count(kind)));
    }
    out
}

// ============================================================================
// Index, validation and reminders
// ============================================================================

/// One block per search-index entry
pub fn index_entries(items: &[SearchableItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}\n", item.identifier.bold()));
        out.push_str(&format!("  domínio: {}\n", item.domain));
        out.push_str(&format!("  título: {}\n", item.title.replace('\n', " / ")));
        out.push_str(&format!("  descrição: {}\n", item.content_description));
        out.push_str(&format!("  palavras-chave: {}\n", item.keywords.join(", ")));
    }
    out
}

/// Errors and warnings of a validation run
pub fn validation_report(result: &ValidationResult) -> String {
    let mut out = String::new();
    for error in &result.errors {
        out.push_str(&format!("{} {}\n", "error:".red().bold(), error));
    }
    for warning in &result.warnings {
        out.push_str(&format!("{} {}\n", "warning:".yellow().bold(), warning));
    }
    if result.valid {
        out.push_str(&format!(
            "{} ({} warning(s))\n",
            "Catalog is valid".green(),
            result.warnings.len()
        ));
    }
    out
}

/// Pending anniversary reminders, soonest first
pub fn reminder_list(reminders: &[AnniversaryReminder]) -> String {
    if reminders.is_empty() {
        return "Nenhum lembrete pendente\n".to_string();
    }
    let mut out = String::new();
    for reminder in reminders {
        out.push_str(&format!(
            "{}  {}  {}\n",
            short_date_time(&reminder.fire_at),
            reminder.subtitle.bold(),
            reminder.body
        ));
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Sample, at};
    use bach_catalog::reminder::upcoming_reminders;
    use bach_catalog::search_catalog;
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_concert_list_groups_by_month() {
        plain();
        let s = Sample::new();
        let out = concert_list(&s.catalog);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "maio de 2024");
        assert!(lines[1].starts_with("  01 de maio  Gala de Maio"));
        assert_eq!(lines[2], "abril de 2023");
        assert!(lines[3].starts_with("  20 de abril  Sala São Paulo"));
        assert_eq!(concert_list(&Catalog::new()), "Nenhum concerto registrado\n");
    }

    #[test]
    fn test_concert_detail_orders_encores_last() {
        plain();
        let s = Sample::new();
        let out = concert_detail(&s.catalog, s.catalog.concert(s.gala).unwrap());
        let expected = "\
Gala de Maio
Data: 01/05/2024 20:00
Local: Sala São Paulo
Programa
  Sinfonia n.º 5 em Dó menor, Op. 67 (OSESP)
  * Abertura Egmont (OSESP)
Artistas
  OSESP
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_detail_screens() {
        plain();
        let s = Sample::new();
        let artist = artist_detail(&s.catalog, s.catalog.artist(s.osesp).unwrap());
        assert!(artist.contains("Tipo: Orquestra"));
        assert!(artist.contains("01/05/2024 20:00  Gala de Maio"));
        assert!(artist.contains("20/04/2023 20:00  Sala São Paulo"));

        let work = work_detail(&s.catalog, s.catalog.work(s.fifth).unwrap());
        assert!(work.starts_with("Sinfonia n.º 5 em Dó menor, Op. 67\n"));
        assert!(work.contains("Compositor: Ludwig van Beethoven"));

        let egmont = work_detail(&s.catalog, s.catalog.work(s.egmont).unwrap());
        assert!(egmont.contains("01/05/2024 20:00  Gala de Maio"));
        assert!(!egmont.contains("2023"));

        let older = concert_detail(&s.catalog, s.catalog.concert(s.older).unwrap());
        assert!(older.starts_with("Sala São Paulo\nData: 20/04/2023 20:00\n"));

        let composer = composer_detail(&s.catalog, s.catalog.composer(s.beethoven).unwrap());
        assert!(composer.ends_with(
            "Obras\n  Abertura Egmont (1x)\n  Sinfonia n.º 5 em Dó menor, Op. 67 (2x)\n"
        ));
    }

    #[test]
    fn test_home_highlights() {
        plain();
        let s = Sample::new();
        let out = home(&s.catalog, at(2024, 4, 20, 8));
        assert!(out.starts_with("Um ano atrás...\n  20/04/2023 20:00  Sala São Paulo"));
        assert!(out.contains("Próximo concerto\n  01/05/2024 20:00  Gala de Maio"));
        assert_eq!(out.matches("\n    Beethoven\n").count(), 2);
        assert!(out.ends_with("Concertos: 2\nArtistas: 1\nCompositores: 1\nObras: 2\n"));

        let quiet = home(&s.catalog, at(2030, 1, 1, 0));
        assert!(!quiet.contains("Um ano atrás"));
        assert!(!quiet.contains("Próximo concerto"));
    }

    #[test]
    fn test_search_results_sections() {
        plain();
        let s = Sample::new();
        let out = search_results(&s.catalog, &search_catalog(&s.catalog, "beeth"));
        assert!(out.starts_with("Compositores\n  Ludwig van Beethoven"));
        assert!(!out.contains("Artistas"));
        assert_eq!(
            search_results(&s.catalog, &search_catalog(&s.catalog, "zzz")),
            "Nenhum resultado\n"
        );
    }

    #[test]
    fn test_validation_report() {
        plain();
        let out = validation_report(&ValidationResult::ok());
        assert_eq!(out, "Catalog is valid (0 warning(s))\n");
    }

    #[test]
    fn test_reminder_list_lines() {
        plain();
        let s = Sample::new();
        let reminders = upcoming_reminders(&s.catalog, at(2024, 6, 1, 0));
        assert_eq!(
            reminder_list(&reminders),
            "01/05/2025 09:00  Gala de Maio  Beethoven, Beethoven\n"
        );
        assert_eq!(reminder_list(&[]), "Nenhum lembrete pendente\n");
    }
}
