//! Calendar helpers for concert dates
//!
//! Concert dates are local wall-clock times (`NaiveDateTime`). Labels use
//! Brazilian Portuguese month names, matching how the catalog is read.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Bucket key `year * 100 + month` (e.g. `202405` for May 2024)
pub fn year_month(date: &NaiveDateTime) -> i32 {
    date.year() * 100 + date.month() as i32
}

/// Portuguese month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// "05 de maio"
pub fn day_month(date: &NaiveDateTime) -> String {
    format!("{:02} de {}", date.day(), month_name(date.month()))
}

/// "maio de 2024"
pub fn month_year(year: i32, month: u32) -> String {
    format!("{} de {}", month_name(month), year)
}

/// "05/05/2024 20:00", the short form used in list rows
pub fn short_date_time(date: &NaiveDateTime) -> String {
    date.format("%d/%m/%Y %H:%M").to_string()
}

/// Calendar subtraction of whole years
///
/// February 29 maps to February 28 when the target year is not a leap year.
pub fn years_before(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(years * 12))
}

/// Calendar addition of whole years, clamping February 29 like [`years_before`]
pub fn years_after(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years * 12))
}

// ============================================================================
// Tests
// ============================================================================
