use scraper::Html;

use crate::cli::MalformedPolicy;
use crate::core::extract::{StopRule, extract_block};
use crate::core::records::parse_records;
use crate::core::types::{AlbumTable, DateWindow, MonthGroup};
use crate::core::window::split_by_month;
use crate::error::AppError;
use crate::source::DocumentSource;
use crate::utils::parse_debug_enabled;

/// Extract every bounded date of one month group from its page
fn build_group_table(
    group: &MonthGroup,
    document: &Html,
    policy: MalformedPolicy,
) -> Result<AlbumTable, AppError> {
    let mut table = AlbumTable::default();
    let debug = parse_debug_enabled();

    for entry in group.bounded_dates() {
        let stop = StopRule::for_anchor(&entry.marker);
        let block = extract_block(document, &entry.marker, stop);
        let records = parse_records(&block, policy)?;
        if debug {
            if block.is_empty() {
                eprintln!("[DEBUG] {}: no text after marker", entry.marker);
            } else {
                eprintln!(
                    "[DEBUG] {} (stop at {}): {} records",
                    entry.marker,
                    stop.label(),
                    records.len()
                );
            }
        }
        table.insert(entry, records);
    }

    Ok(table)
}

/// Fetch each month page once and assemble the release table for the window.
/// The window's final Monday only bounds the day before it.
pub(crate) fn build_table(
    window: &DateWindow,
    source: &dyn DocumentSource,
    policy: MalformedPolicy,
) -> Result<AlbumTable, AppError> {
    let mut table = AlbumTable::default();

    for group in split_by_month(window) {
        if parse_debug_enabled() {
            eprintln!(
                "[DEBUG] {} {} via {}: {} dates{}",
                group.month,
                group.year,
                source.name(),
                group.real_dates().count(),
                if group.has_sentinel() { " + sentinel" } else { "" }
            );
        }
        let markup = source.fetch(&group.month, group.year)?;
        let document = Html::parse_document(&markup);
        table.merge(build_group_table(&group, &document, policy)?);
    }

    Ok(table)
}
