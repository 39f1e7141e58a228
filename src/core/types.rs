//! Core data types shared by the extraction pipeline
//!
//! Everything here lives for a single run: the window is computed once,
//! blocks and records are produced per date and folded into the table.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::consts::{RECORD_SEPARATOR, SENTINEL_LABEL};

/// One calendar date of the window with its page-facing labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateEntry {
    pub(crate) date: NaiveDate,
    /// "month/day" without leading zeros, e.g. "3/4"
    pub(crate) marker: String,
    /// Lowercase full month name, e.g. "march"
    pub(crate) month: String,
}

impl DateEntry {
    pub(crate) fn new(date: NaiveDate) -> Self {
        DateEntry {
            date,
            marker: anchor_marker(date),
            month: month_name(date),
        }
    }
}

pub(crate) fn anchor_marker(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

pub(crate) fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string().to_lowercase()
}

/// Eight consecutive dates ending on the window-end Monday
#[derive(Debug, Clone)]
pub(crate) struct DateWindow {
    pub(crate) entries: Vec<DateEntry>,
}

impl DateWindow {
    pub(crate) fn start(&self) -> Option<&DateEntry> {
        self.entries.first()
    }

    pub(crate) fn end(&self) -> Option<&DateEntry> {
        self.entries.last()
    }
}

/// A position in a month group: a real date, or the boundary placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    Date(DateEntry),
    Sentinel,
}

impl Slot {
    pub(crate) fn label(&self) -> &str {
        match self {
            Slot::Date(entry) => &entry.marker,
            Slot::Sentinel => SENTINEL_LABEL,
        }
    }
}

/// Contiguous run of window dates that live on the same month page
#[derive(Debug, Clone)]
pub(crate) struct MonthGroup {
    pub(crate) month: String,
    pub(crate) year: i32,
    pub(crate) slots: Vec<Slot>,
}

impl MonthGroup {
    pub(crate) fn real_dates(&self) -> impl Iterator<Item = &DateEntry> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Date(entry) => Some(entry),
            Slot::Sentinel => None,
        })
    }

    /// Dates whose block is bounded by a following slot in this group.
    /// The final slot only closes the one before it.
    pub(crate) fn bounded_dates(&self) -> impl Iterator<Item = &DateEntry> {
        let bounded = self.slots.len().saturating_sub(1);
        self.slots[..bounded].iter().filter_map(|slot| match slot {
            Slot::Date(entry) => Some(entry),
            Slot::Sentinel => None,
        })
    }

    pub(crate) fn has_sentinel(&self) -> bool {
        self.slots.iter().any(|slot| matches!(slot, Slot::Sentinel))
    }
}

/// Text collected after one date marker, line breaks kept as separators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawBlock {
    pub(crate) anchor: String,
    pub(crate) text: String,
}

impl RawBlock {
    pub(crate) fn new(anchor: &str) -> Self {
        RawBlock {
            anchor: anchor.to_string(),
            text: String::new(),
        }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_break(&mut self) {
        self.text.push(RECORD_SEPARATOR);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(crate) fn candidates(&self) -> impl Iterator<Item = &str> {
        self.text.split(RECORD_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct AlbumRecord {
    pub(crate) artist: String,
    pub(crate) title: String,
}

impl AlbumRecord {
    pub(crate) fn new(artist: &str, title: &str) -> Self {
        AlbumRecord {
            artist: artist.trim().to_string(),
            title: title.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DayAlbums {
    pub(crate) marker: String,
    pub(crate) records: Vec<AlbumRecord>,
}

/// Release records per date, iterated in calendar order
#[derive(Debug, Clone, Default)]
pub(crate) struct AlbumTable {
    pub(crate) days: BTreeMap<NaiveDate, DayAlbums>,
}

impl AlbumTable {
    pub(crate) fn insert(&mut self, entry: &DateEntry, records: Vec<AlbumRecord>) {
        self.days.insert(
            entry.date,
            DayAlbums {
                marker: entry.marker.clone(),
                records,
            },
        );
    }

    /// Union with another table; date keys from different groups never overlap
    pub(crate) fn merge(&mut self, other: AlbumTable) {
        self.days.extend(other.days);
    }

    pub(crate) fn len(&self) -> usize {
        self.days.len()
    }

    pub(crate) fn record_count(&self) -> usize {
        self.days.values().map(|day| day.records.len()).sum()
    }
}

#[cfg(test)]
impl AlbumTable {
    pub(crate) fn get(&self, marker: &str) -> Option<&[AlbumRecord]> {
        self.days
            .values()
            .find(|day| day.marker == marker)
            .map(|day| day.records.as_slice())
    }
}
