use chrono::NaiveDate;
use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::cli::SortOrder;
use crate::core::{AlbumTable, DayAlbums};

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Days of the table in the requested order
pub(super) fn ordered_days(
    table: &AlbumTable,
    order: SortOrder,
) -> Vec<(&NaiveDate, &DayAlbums)> {
    let mut days: Vec<_> = table.days.iter().collect();
    if order == SortOrder::Desc {
        days.reverse();
    }
    days
}

pub(super) fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(super) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AlbumRecord;
    use crate::core::types::DateEntry;

    #[test]
    fn csv_escape_quotes_when_needed() {
        assert_eq!(csv_escape("Donda"), "Donda");
        assert_eq!(csv_escape("Tyler, The Creator"), "\"Tyler, The Creator\"");
        assert_eq!(csv_escape("Say \"Hi\""), "\"Say \"\"Hi\"\"\"");
    }

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(html_escape("Simon & Garfunkel"), "Simon &amp; Garfunkel");
        assert_eq!(html_escape("<b>"), "&lt;b&gt;");
        assert_eq!(html_escape("Don't"), "Don&#39;t");
    }

    #[test]
    fn ordered_days_respects_order() {
        let mut table = AlbumTable::default();
        for day in [4, 5, 6] {
            let entry = DateEntry::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
            table.insert(&entry, vec![AlbumRecord::new("A", "X")]);
        }
        let asc: Vec<_> = ordered_days(&table, SortOrder::Asc)
            .into_iter()
            .map(|(_, d)| d.marker.as_str())
            .collect();
        assert_eq!(asc, vec!["3/4", "3/5", "3/6"]);
        let desc: Vec<_> = ordered_days(&table, SortOrder::Desc)
            .into_iter()
            .map(|(_, d)| d.marker.as_str())
            .collect();
        assert_eq!(desc, vec!["3/6", "3/5", "3/4"]);
    }
}
