use comfy_table::{Cell, Color};

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::{AlbumTable, DateWindow, MonthGroup};
use crate::output::format::{create_styled_table, header_cell, ordered_days, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct AlbumTableOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
}

fn window_span(window: &DateWindow) -> String {
    match (window.start(), window.end()) {
        (Some(start), Some(end)) => format!("{} - {}", start.marker, end.marker),
        _ => String::new(),
    }
}

pub(crate) fn render_album_table(
    albums: &AlbumTable,
    window: &DateWindow,
    options: AlbumTableOptions,
) -> String {
    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", c),
        header_cell("Artist", c),
        header_cell("Album/EP Title", c),
    ]);

    let date_color = if c { Some(Color::Cyan) } else { None };
    let empty_color = if c { Some(Color::DarkGrey) } else { None };

    for (_, day) in ordered_days(albums, options.order) {
        if day.records.is_empty() {
            table.add_row(vec![
                styled_cell(&day.marker, date_color, false),
                styled_cell("no releases", empty_color, false),
                Cell::new(""),
            ]);
            continue;
        }
        for (i, record) in day.records.iter().enumerate() {
            let date = if i == 0 { day.marker.as_str() } else { "" };
            table.add_row(vec![
                styled_cell(date, date_color, false),
                Cell::new(&record.artist),
                Cell::new(&record.title),
            ]);
        }
    }

    format!("\n  New Releases {}\n\n{table}", window_span(window))
}

/// Summary shown under the table
pub(crate) fn summary_line(albums: &AlbumTable, elapsed_ms: f64, use_color: bool) -> String {
    let text = format!(
        "{} releases across {} days",
        albums.record_count(),
        albums.len()
    );
    if use_color {
        format!("\n  {text} | \x1b[36m{elapsed_ms:.0}ms\x1b[0m\n")
    } else {
        format!("\n  {text} | {elapsed_ms:.0}ms\n")
    }
}

pub(crate) fn render_window_table(
    window: &DateWindow,
    groups: &[MonthGroup],
    use_color: bool,
) -> String {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Marker", use_color),
        header_cell("Month", use_color),
        header_cell("Page", use_color),
    ]);

    let last = window.end().map(|e| e.date);
    let boundary_color = if use_color { Some(Color::DarkGrey) } else { None };

    for (page, group) in groups.iter().enumerate() {
        for entry in group.real_dates() {
            // The final Monday only bounds the day before it
            let color = if Some(entry.date) == last {
                boundary_color
            } else {
                None
            };
            table.add_row(vec![
                styled_cell(&entry.date.format(DATE_FORMAT).to_string(), color, false),
                styled_cell(&entry.marker, color, false),
                styled_cell(&entry.month, color, false),
                styled_cell(&format!("{} {}", group.month, group.year), color, page > 0),
            ]);
        }
    }

    let pages = groups
        .iter()
        .map(|g| format!("{} {}", g.month, g.year))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "\n  Window {}\n\n{table}\n\n  {} page(s): {pages}\n",
        window_span(window),
        groups.len()
    )
}
