/// ISO date format used in JSON/CSV output and the `window` listing: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar page for a month; `{month}` is the lowercase full month name
pub(crate) const DEFAULT_URL_TEMPLATE: &str =
    "https://genius.com/Genius-{month}-{year}-album-release-calendar-annotated";

/// Inserted into a raw block wherever the page has a line break
pub(crate) const RECORD_SEPARATOR: char = '\u{1e}';

/// Label of the synthetic boundary slot closing a non-final month group
pub(crate) const SENTINEL_LABEL: &str = "NONE";

/// Bold marker heading the unscheduled releases at the bottom of a month
pub(crate) const TBA_MARKER: &str = "TBA";

/// Last day of each month as it appears on the calendar pages
pub(crate) const END_OF_MONTH: [&str; 12] = [
    "1/31", "2/28", "3/31", "4/30", "5/31", "6/30", "7/31", "8/31", "9/30", "10/31", "11/30",
    "12/31",
];

pub(crate) const MAIL_SUBJECT: &str = "New music from last week";
