//! # Bach CLI
//!
//! Command-line interface for Bach Tracking.
//!
//! This crate reads a catalog file and renders the application's screens
//! in the terminal: concert lists, detail pages, the home highlights,
//! search, export, deep links and the search-index entries.
//!
//! ## Commands
//!
//! - `init` - Create an empty catalog file
//! - `concerts` - List concerts grouped by month
//! - `concert`, `artist`, `work`, `composer` - Show one record
//! - `home` - Show the "one year ago" and "next concert" highlights
//! - `search` - Search artists, composers and works
//! - `export` - Export concerts as JSON
//! - `open` - Resolve a deep-link identifier
//! - `index` - Show the search-index entries
//! - `reminders` - List pending anniversary reminders
//! - `validate` - Check catalog integrity
//!

pub mod commands;
pub mod config;
pub mod views;

#[cfg(test)]
mod test_support;

pub use config::Settings;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Personal catalog of classical concert attendance
#[derive(Parser, Debug)]
#[command(name = "bach-tracking")]
#[command(about = "Personal catalog of classical concert attendance")]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, env = "BACH_TRACKING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog file, overriding the settings
    #[arg(long, global = true, env = "BACH_TRACKING_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create an empty catalog file
    Init,

    /// List concerts grouped by month, newest first
    Concerts,

    /// Show a concert with its programme
    Concert { id: Uuid },

    /// Show an artist with the concerts they played in
    Artist { id: Uuid },

    /// Show a work with the concerts it was played in
    Work { id: Uuid },

    /// Show a composer with their works
    Composer { id: Uuid },

    /// Show highlights and section counts
    Home {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Search artists, composers and works
    Search { query: String },

    /// Export concerts as JSON
    Export {
        /// Write to this file instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open a deep-link identifier such as `work.<uuid>`
    Open { identifier: String },

    /// Show the search-index entries
    Index,

    /// List pending anniversary reminders
    Reminders {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Check catalog integrity
    Validate,
}

/// Load the settings and run one command, printing its output
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?.with_catalog_path(cli.catalog);
    let output = commands::execute(&cli.command, &settings)?;
    print!("{}", output);
    Ok(())
}
