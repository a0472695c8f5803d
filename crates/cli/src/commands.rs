//! Command implementations
//!
//! Every command returns the text to print. Read-only commands open the
//! catalog file and never write it back.

use crate::Commands;
use crate::config::Settings;
use crate::views;
use anyhow::{Context, Result, bail};
use bach_catalog::index::{InMemoryIndex, NoThumbnails, SearchIndexer, SearchableItem};
use bach_catalog::reminder::upcoming_reminders;
use bach_catalog::{
    Catalog, CatalogStore, Destination, Validator, export_json, navigation_channel,
    search_catalog, write_export,
};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

/// Run one command against the catalog named by `settings`
pub fn execute(command: &Commands, settings: &Settings) -> Result<String> {
    let path = settings.catalog_path.as_path();
    if *command == Commands::Init {
        return init(path);
    }

    let store = CatalogStore::open(path)
        .with_context(|| format!("Failed to open catalog '{}'", path.display()))?;
    let catalog = store.catalog();
    debug!(?command, "Running command");

    match command {
        Commands::Init => init(path),
        Commands::Concerts => Ok(views::concert_list(catalog)),
        Commands::Concert { id } => show(catalog, Destination::Concert(*id)),
        Commands::Artist { id } => show(catalog, Destination::Artist(*id)),
        Commands::Work { id } => show(catalog, Destination::Work(*id)),
        Commands::Composer { id } => show(catalog, Destination::Composer(*id)),
        Commands::Home { today } => Ok(views::home(catalog, now(*today))),
        Commands::Search { query } => {
            Ok(views::search_results(catalog, &search_catalog(catalog, query)))
        }
        Commands::Export { output } => match output {
            Some(output) => {
                let count = write_export(catalog, output)?;
                Ok(format!(
                    "Exported {} concert(s) to {}\n",
                    count,
                    output.display()
                ))
            }
            None => Ok(format!("{}\n", export_json(catalog)?)),
        },
        Commands::Open { identifier } => open(catalog, identifier),
        Commands::Index => Ok(views::index_entries(&index_entries(catalog, settings)?)),
        Commands::Reminders { today } => Ok(views::reminder_list(&upcoming_reminders(
            catalog,
            now(*today),
        ))),
        Commands::Validate => validate(catalog),
    }
}

/// Local time, or the start of `today` when given
fn now(today: Option<NaiveDate>) -> NaiveDateTime {
    match today {
        Some(day) => day.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    }
}

fn init(path: &Path) -> Result<String> {
    let mut store = CatalogStore::open_or_create(path)?;
    if !store.is_dirty() {
        bail!("Catalog already exists at '{}'", path.display());
    }
    store.commit()?;
    info!(path = %path.display(), "Created catalog");
    Ok(format!("Created catalog at {}\n", path.display()))
}

/// Render the detail screen of a destination
fn show(catalog: &Catalog, destination: Destination) -> Result<String> {
    let not_found = |kind: &str, id: &Uuid| format!("No {} with id {}", kind, id);
    match destination {
        Destination::Concert(id) => catalog
            .concert(id)
            .map(|c| views::concert_detail(catalog, c))
            .with_context(|| not_found("concert", &id)),
        Destination::Artist(id) => catalog
            .artist(id)
            .map(|a| views::artist_detail(catalog, a))
            .with_context(|| not_found("artist", &id)),
        Destination::Work(id) => catalog
            .work(id)
            .map(|w| views::work_detail(catalog, w))
            .with_context(|| not_found("work", &id)),
        Destination::Composer(id) => catalog
            .composer(id)
            .map(|c| views::composer_detail(catalog, c))
            .with_context(|| not_found("composer", &id)),
    }
}

/// Resolve a deep link and show what the navigation channel delivers
fn open(catalog: &Catalog, identifier: &str) -> Result<String> {
    let (resolver, mut receiver) = navigation_channel();
    if resolver.open(catalog, identifier).is_none() {
        bail!("Nothing to open for '{}'", identifier);
    }
    let destination = receiver
        .try_recv()
        .context("Navigation channel delivered nothing")?;
    show(catalog, destination)
}

/// Publish every entry to an in-memory index and read them back
fn index_entries(catalog: &Catalog, settings: &Settings) -> Result<Vec<SearchableItem>> {
    let index_settings = settings.index_settings();
    let indexer = SearchIndexer::new(&index_settings, &NoThumbnails);
    let mut index = InMemoryIndex::new();
    indexer.reindex(catalog, &mut index)?;
    Ok(index.items().cloned().collect())
}

fn validate(catalog: &Catalog) -> Result<String> {
    let result = Validator::with_default_rules().validate(catalog);
    let report = views::validation_report(&result);
    if !result.valid {
        bail!("{}Catalog has {} error(s)", report, result.errors.len());
    }
    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================
