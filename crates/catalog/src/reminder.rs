//! "One year ago" reminders
//!
//! Saving a concert schedules a reminder for its first anniversary. This
//! module builds the reminder requests; delivering them is the job of a
//! [`ReminderScheduler`].

use crate::catalog::Catalog;
use crate::concert::Concert;
use bach_core::dates::years_after;
use bach_core::{CatalogResult, ConcertId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Title shown on every anniversary reminder
pub const REMINDER_TITLE: &str = "Um ano atrás...";

/// Local hour at which reminders fire
pub const REMINDER_HOUR: u32 = 9;

/// A request to notify the user on a concert's anniversary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnniversaryReminder {
    /// The concert's UUID; scheduling again replaces the pending request
    pub identifier: String,
    pub concert: ConcertId,
    pub title: String,
    /// Concert title
    pub subtitle: String,
    /// Composer short name of each performance, comma separated
    pub body: String,
    pub fire_at: NaiveDateTime,
}

/// Build the reminder of a concert
///
/// Fires one calendar year after the concert day at 09:00. Returns `None`
/// only when that date is out of range.
///
/// The body follows the stored programme order, encores included where they
/// were added, and repeats a composer once per performance. Performances
/// whose work or composer is missing are left out.
pub fn anniversary_reminder(catalog: &Catalog, concert: &Concert) -> Option<AnniversaryReminder> {
    let day = years_after(concert.date.date(), 1)?;
    let fire_at = day.and_hms_opt(REMINDER_HOUR, 0, 0)?;

    let body = concert
        .performances
        .iter()
        .filter_map(|id| catalog.performance(*id))
        .filter_map(|p| catalog.work(p.work))
        .filter_map(|w| catalog.composer(w.composer))
        .map(|c| c.short_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Some(AnniversaryReminder {
        identifier: concert.id.to_string(),
        concert: concert.id,
        title: REMINDER_TITLE.to_string(),
        subtitle: catalog.concert_title(concert),
        body,
        fire_at,
    })
}

/// Reminders that have not fired yet, soonest first
pub fn upcoming_reminders(catalog: &Catalog, now: NaiveDateTime) -> Vec<AnniversaryReminder> {
    let mut reminders: Vec<AnniversaryReminder> = catalog
        .concerts()
        .filter_map(|c| anniversary_reminder(catalog, c))
        .filter(|r| r.fire_at > now)
        .collect();
    reminders.sort_by_key(|r| r.fire_at);
    reminders
}

// ============================================================================
// Scheduling
// ============================================================================

/// The notification service
pub trait ReminderScheduler {
    /// Schedule a reminder, replacing any pending one with the same identifier
    fn schedule(&mut self, reminder: AnniversaryReminder) -> CatalogResult<()>;

    /// Cancel a pending reminder; unknown identifiers are ignored
    fn cancel(&mut self, identifier: &str) -> CatalogResult<()>;
}

/// Scheduler that keeps pending reminders in memory
#[derive(Debug, Clone, Default)]
pub struct PendingReminders {
    pending: BTreeMap<String, AnniversaryReminder>,
}

impl PendingReminders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identifier: &str) -> Option<&AnniversaryReminder> {
        self.pending.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl ReminderScheduler for PendingReminders {
    fn schedule(&mut self, reminder: AnniversaryReminder) -> CatalogResult<()> {
        debug!(identifier = %reminder.identifier, fire_at = %reminder.fire_at, "Scheduling reminder");
        self.pending.insert(reminder.identifier.clone(), reminder);
        Ok(())
    }

    fn cancel(&mut self, identifier: &str) -> CatalogResult<()> {
        self.pending.remove(identifier);
        Ok(())
    }
}

/// Schedule the reminder of a saved concert
pub fn schedule_for_concert(
    catalog: &Catalog,
    concert: &Concert,
    scheduler: &mut impl ReminderScheduler,
) -> CatalogResult<bool> {
    match anniversary_reminder(catalog, concert) {
        Some(reminder) => {
            scheduler.schedule(reminder)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// ============================================================================
// Tests
// ============================================================================
