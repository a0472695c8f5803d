//! Shared sample catalog for unit tests

use bach_catalog::{
    ArtistType, Artist, Catalog, Composer, Concert, MusicalForm, Performance, Venue, Work,
};
use bach_core::{ArtistId, ComposerId, ConcertId, Tonality, WorkId};
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Two concerts at Sala São Paulo
///
/// - gala (2024-05-01 20:00, "Gala de Maio"): Beethoven 5, then Egmont as
///   an encore, both by OSESP
/// - older (2023-04-20 20:00, untitled): Beethoven 5 by OSESP
pub struct Sample {
    pub catalog: Catalog,
    pub beethoven: ComposerId,
    pub fifth: WorkId,
    pub egmont: WorkId,
    pub osesp: ArtistId,
    pub gala: ConcertId,
    pub older: ConcertId,
}

impl Sample {
    pub fn new() -> Self {
        let mut catalog = Catalog::new();

        let beethoven = catalog
            .insert_composer(Composer::new("Ludwig van Beethoven", "Beethoven"))
            .unwrap();
        let symphony = catalog
            .insert_musical_form(MusicalForm::with_name("Sinfonia"))
            .unwrap();
        let fifth = catalog
            .insert_work(
                Work::new(beethoven)
                    .with_form(symphony)
                    .with_number("5")
                    .with_tonality(Tonality::CMinor)
                    .with_opus("67"),
            )
            .unwrap();
        let egmont = catalog
            .insert_work(Work::new(beethoven).with_name("Abertura Egmont"))
            .unwrap();

        let orchestra = catalog
            .insert_artist_type(ArtistType::with_name("Orquestra"))
            .unwrap();
        let osesp = catalog.insert_artist(Artist::new("OSESP", orchestra)).unwrap();
        let hall = catalog
            .insert_venue(Venue::with_name("Sala São Paulo"))
            .unwrap();

        let gala = catalog
            .insert_concert(Concert::new(at(2024, 5, 1, 20), hall).with_name("Gala de Maio"))
            .unwrap();
        catalog
            .add_performance(gala, Performance::new(egmont).with_artist(osesp).as_encore())
            .unwrap();
        catalog
            .add_performance(gala, Performance::new(fifth).with_artist(osesp))
            .unwrap();

        let older = catalog
            .insert_concert(Concert::new(at(2023, 4, 20, 20), hall))
            .unwrap();
        catalog
            .add_performance(older, Performance::new(fifth).with_artist(osesp))
            .unwrap();

        Self {
            catalog,
            beethoven,
            fifth,
            egmont,
            osesp,
            gala,
            older,
        }
    }
}
