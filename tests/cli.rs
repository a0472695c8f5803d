//! End-to-end tests of the `bach-tracking` binary

use assert_cmd::Command;
use bach_catalog::{
    Artist, ArtistType, Catalog, Composer, Concert, Performance, Series, Venue, Work,
    save_catalog,
};
use bach_core::{ConcertId, WorkId};
use chrono::NaiveDate;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Seeded {
    path: PathBuf,
    concert: ConcertId,
    work: WorkId,
}

fn seed(dir: &Path) -> Seeded {
    let mut catalog = Catalog::new();
    let bach = catalog
        .insert_composer(Composer::new("Johann Sebastian Bach", "Bach"))
        .unwrap();
    let work = catalog
        .insert_work(
            Work::new(bach)
                .with_name("Concerto de Brandemburgo n.º 3")
                .with_catalogue("BWV 1048"),
        )
        .unwrap();
    let ensemble = catalog
        .insert_artist_type(ArtistType::with_name("Conjunto"))
        .unwrap();
    let artist = catalog
        .insert_artist(Artist::new("Bach Collegium Japan", ensemble))
        .unwrap();
    let venue = catalog
        .insert_venue(Venue::with_name("Sala Cecília Meireles"))
        .unwrap();
    let series = catalog
        .insert_series(Series::with_name("Série Barroca"))
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap();
    let concert = catalog
        .insert_concert(
            Concert::new(date, venue)
                .with_name("Brandemburgos")
                .with_series(series, Some(2)),
        )
        .unwrap();
    catalog
        .add_performance(concert, Performance::new(work).with_artist(artist))
        .unwrap();

    let path = dir.join("concertos.bach");
    save_catalog(&catalog, &path).unwrap();
    Seeded {
        path,
        concert,
        work,
    }
}

fn bach_tracking(catalog: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bach-tracking").unwrap();
    cmd.env_remove("BACH_TRACKING_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--catalog")
        .arg(catalog);
    cmd
}

#[test]
fn test_init_then_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("novo.bach");

    bach_tracking(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created catalog"));
    assert!(path.exists());

    bach_tracking(&path)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bach_tracking(&path)
        .arg("concerts")
        .assert()
        .success()
        .stdout("Nenhum concerto registrado\n");
}

#[test]
fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    bach_tracking(&dir.path().join("none.bach"))
        .arg("concerts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open catalog"));
}

#[test]
fn test_concert_detail() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());

    bach_tracking(&seeded.path)
        .arg("concert")
        .arg(seeded.concert.to_string())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Brandemburgos (Série Barroca 2)\nData: 01/05/2024 20:00\nLocal: Sala Cecília Meireles\n",
        ))
        .stdout(predicate::str::contains(
            "  Concerto de Brandemburgo n.º 3 (Bach Collegium Japan)",
        ));
}

#[test]
fn test_open_deep_link() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());

    bach_tracking(&seeded.path)
        .arg("open")
        .arg(format!("work.{}", seeded.work))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Concerto de Brandemburgo n.º 3\nBWV 1048\nCompositor: Johann Sebastian Bach\n",
        ));

    bach_tracking(&seeded.path)
        .arg("open")
        .arg("work.garbage")
        .assert()
        .failure();
}

#[test]
fn test_search_and_home() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());

    bach_tracking(&seeded.path)
        .args(["search", "collegium"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Artistas\n  Bach Collegium Japan"));

    bach_tracking(&seeded.path)
        .args(["home", "--today", "2025-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Um ano atrás...\n"))
        .stdout(predicate::str::contains("Concertos: 1\n"));
}

#[test]
fn test_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());

    let output = bach_tracking(&seeded.path)
        .arg("export")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let concert = &json[0];
    assert_eq!(concert["name"], "Brandemburgos");
    assert_eq!(concert["series"], "Série Barroca");
    assert_eq!(concert["seriesInstance"], 2);
    assert_eq!(
        concert["performances"][0]["artists"][0]["type"],
        "Conjunto"
    );
}

#[test]
fn test_config_file_sets_catalog_and_domain() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());
    let config = dir.path().join("bach.toml");
    std::fs::write(
        &config,
        format!(
            "catalog_path = {:?}\nindex_domain = \"org.example\"\n",
            seeded.path.display().to_string()
        ),
    )
    .unwrap();

    Command::cargo_bin("bach-tracking")
        .unwrap()
        .env_remove("BACH_TRACKING_CATALOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config)
        .arg("index")
        .assert()
        .success()
        .stdout(predicate::str::contains("  domínio: org.example.work"));
}

#[test]
fn test_validate() {
    let dir = TempDir::new().unwrap();
    let seeded = seed(dir.path());

    bach_tracking(&seeded.path)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog is valid"));
}
