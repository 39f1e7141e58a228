use std::fmt::Write;

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::AlbumTable;
use crate::output::format::{csv_escape, ordered_days};

/// One row per release; days without releases produce no rows
pub(crate) fn output_album_csv(albums: &AlbumTable, order: SortOrder) -> String {
    let mut out = String::from("date,marker,artist,title\n");
    for (date, day) in ordered_days(albums, order) {
        let iso = date.format(DATE_FORMAT).to_string();
        for record in &day.records {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                iso,
                day.marker,
                csv_escape(&record.artist),
                csv_escape(&record.title),
            );
        }
    }
    out
}
