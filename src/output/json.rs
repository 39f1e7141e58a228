use serde::Serialize;

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::{AlbumRecord, AlbumTable, DateWindow, MonthGroup};
use crate::error::AppError;
use crate::output::format::ordered_days;

#[derive(Serialize)]
struct DayJson<'a> {
    date: String,
    marker: &'a str,
    albums: &'a [AlbumRecord],
}

#[derive(Serialize)]
struct DateJson<'a> {
    date: String,
    marker: &'a str,
    month: &'a str,
}

#[derive(Serialize)]
struct GroupJson<'a> {
    month: &'a str,
    year: i32,
    slots: Vec<&'a str>,
}

#[derive(Serialize)]
struct WindowJson<'a> {
    dates: Vec<DateJson<'a>>,
    groups: Vec<GroupJson<'a>>,
}

pub(crate) fn output_album_json(
    albums: &AlbumTable,
    order: SortOrder,
) -> Result<String, AppError> {
    let days: Vec<DayJson<'_>> = ordered_days(albums, order)
        .into_iter()
        .map(|(date, day)| DayJson {
            date: date.format(DATE_FORMAT).to_string(),
            marker: &day.marker,
            albums: &day.records,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&days)?)
}

pub(crate) fn output_window_json(
    window: &DateWindow,
    groups: &[MonthGroup],
) -> Result<String, AppError> {
    let output = WindowJson {
        dates: window
            .entries
            .iter()
            .map(|e| DateJson {
                date: e.date.format(DATE_FORMAT).to_string(),
                marker: &e.marker,
                month: &e.month,
            })
            .collect(),
        groups: groups
            .iter()
            .map(|g| GroupJson {
                month: &g.month,
                year: g.year,
                slots: g.slots.iter().map(|s| s.label()).collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
