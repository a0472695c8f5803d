//! Shared fixture for unit tests

use crate::{Artist, Catalog, Composer, Concert, Performance, Work};
use crate::nameable::{ArtistType, MusicalForm, Series, Venue};
use bach_core::{
    ArtistId, ArtistTypeId, ComposerId, ConcertId, MusicalFormId, PerformanceId, SeriesId,
    Tonality, VenueId, WorkId,
};
use chrono::{NaiveDate, NaiveDateTime};

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// A small catalog with two concerts at the same hall
///
/// - opening (2024-03-10 20:00, "Concerto de Abertura", Temporada 2024 #1):
///   `first` Beethoven 9 by OSESP, `second` Brandenburg 5 by Nelson Freire
///   and OSESP, `encore` Ária by OSESP
/// - recital (2023-11-05 17:00): `recital_piece` Beethoven 9 by Nelson Freire
pub struct Fixture {
    pub catalog: Catalog,
    pub beethoven: ComposerId,
    pub bach: ComposerId,
    pub symphony_form: MusicalFormId,
    pub symphony: WorkId,
    pub brandenburg: WorkId,
    pub aria: WorkId,
    pub orchestra_type: ArtistTypeId,
    pub pianist_type: ArtistTypeId,
    pub orchestra: ArtistId,
    pub pianist: ArtistId,
    pub hall: VenueId,
    pub season: SeriesId,
    pub opening: ConcertId,
    pub recital: ConcertId,
    pub first: PerformanceId,
    pub second: PerformanceId,
    pub encore: PerformanceId,
    pub recital_piece: PerformanceId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut catalog = Catalog::new();

        let beethoven = catalog
            .insert_composer(Composer::new("Ludwig van Beethoven", "Beethoven"))
            .unwrap();
        let bach = catalog
            .insert_composer(Composer::new("Johann Sebastian Bach", "Bach"))
            .unwrap();

        let symphony_form = catalog
            .insert_musical_form(MusicalForm::with_name("Sinfonia"))
            .unwrap();
        let symphony = catalog
            .insert_work(
                Work::new(beethoven)
                    .with_form(symphony_form)
                    .with_number("9")
                    .with_tonality(Tonality::DMinor)
                    .with_opus("125"),
            )
            .unwrap();
        let brandenburg = catalog
            .insert_work(
                Work::new(bach)
                    .with_name("Concerto de Brandemburgo n.º 5")
                    .with_catalogue("BWV 1050"),
            )
            .unwrap();
        let aria = catalog
            .insert_work(Work::new(bach).with_name("Ária").with_catalogue("BWV 1068"))
            .unwrap();

        let orchestra_type = catalog
            .insert_artist_type(ArtistType::with_name("Orquestra"))
            .unwrap();
        let pianist_type = catalog
            .insert_artist_type(ArtistType::with_name("Pianista"))
            .unwrap();
        let orchestra = catalog
            .insert_artist(Artist::new("OSESP", orchestra_type))
            .unwrap();
        let pianist = catalog
            .insert_artist(Artist::new("Nelson Freire", pianist_type))
            .unwrap();

        let hall = catalog
            .insert_venue(Venue::with_name("Sala São Paulo"))
            .unwrap();
        let season = catalog
            .insert_series(Series::with_name("Temporada 2024"))
            .unwrap();

        let opening = catalog
            .insert_concert(
                Concert::new(at(2024, 3, 10, 20), hall)
                    .with_name("Concerto de Abertura")
                    .with_series(season, Some(1)),
            )
            .unwrap();
        let recital = catalog
            .insert_concert(Concert::new(at(2023, 11, 5, 17), hall))
            .unwrap();

        let first = catalog
            .add_performance(opening, Performance::new(symphony).with_artist(orchestra))
            .unwrap();
        let second = catalog
            .add_performance(
                opening,
                Performance::new(brandenburg)
                    .with_artist(pianist)
                    .with_artist(orchestra),
            )
            .unwrap();
        let encore = catalog
            .add_performance(
                opening,
                Performance::new(aria)
                    .with_artist(orchestra)
                    .with_detail("da Suíte n.º 3")
                    .as_encore(),
            )
            .unwrap();
        let recital_piece = catalog
            .add_performance(
                recital,
                Performance::new(symphony)
                    .with_artist(pianist)
                    .with_detail("transcrição de Liszt"),
            )
            .unwrap();

        Self {
            catalog,
            beethoven,
            bach,
            symphony_form,
            symphony,
            brandenburg,
            aria,
            orchestra_type,
            pianist_type,
            orchestra,
            pianist,
            hall,
            season,
            opening,
            recital,
            first,
            second,
            encore,
            recital_piece,
        }
    }
}
