//! Date window calculation
//!
//! The digest covers the eight days ending on a Monday. The window is split
//! per month because each month's releases live on their own page.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::cli::MondayPolicy;
use crate::core::types::{DateEntry, DateWindow, MonthGroup, Slot};

pub(crate) const WINDOW_DAYS: i64 = 8;

/// Monday closing the window for the given reference date.
///
/// Weekends always roll forward. Tuesday through Friday follow `policy`.
pub(crate) fn window_end(reference: NaiveDate, policy: MondayPolicy) -> NaiveDate {
    let offset = i64::from(reference.weekday().num_days_from_monday());
    match reference.weekday() {
        Weekday::Mon => reference,
        Weekday::Sat | Weekday::Sun => reference + Duration::days(7 - offset),
        _ => match policy {
            MondayPolicy::Past => reference - Duration::days(offset),
            MondayPolicy::Next => reference + Duration::days(7 - offset),
        },
    }
}

pub(crate) fn compute_window(reference: NaiveDate, policy: MondayPolicy) -> DateWindow {
    let end = window_end(reference, policy);
    let start = end - Duration::days(WINDOW_DAYS - 1);
    let entries = (0..WINDOW_DAYS)
        .map(|i| DateEntry::new(start + Duration::days(i)))
        .collect();
    DateWindow { entries }
}

/// Split the window into runs sharing a month. With two runs, the first
/// gets a trailing sentinel so its last real date still has a successor.
pub(crate) fn split_by_month(window: &DateWindow) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for entry in &window.entries {
        match groups.last_mut() {
            Some(group) if group.month == entry.month => {
                group.slots.push(Slot::Date(entry.clone()));
            }
            _ => groups.push(MonthGroup {
                month: entry.month.clone(),
                year: entry.date.year(),
                slots: vec![Slot::Date(entry.clone())],
            }),
        }
    }

    if groups.len() == 2 {
        let mut slots = groups[0].slots.clone();
        slots.push(Slot::Sentinel);
        let bounded = MonthGroup {
            month: groups[0].month.clone(),
            year: groups[0].year,
            slots,
        };
        groups[0] = bounded;
    }

    groups
}
