//! Record parsing
//!
//! Each candidate line reads "Artist - Title - M/D". The release-date
//! suffix marks a real record; lines without one are footer noise.

use regex::Regex;
use std::sync::LazyLock;

use crate::cli::MalformedPolicy;
use crate::core::types::{AlbumRecord, RawBlock};
use crate::error::AppError;

static RELEASE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"- \d{1,2}/(\d{1,2}|\?)").expect("release suffix pattern is valid")
});

/// Text of a candidate before its release-date suffix, if it has one
fn strip_release_suffix(candidate: &str) -> Option<&str> {
    RELEASE_SUFFIX
        .find(candidate)
        .map(|m| &candidate[..m.start()])
}

/// Split "Artist - Title" on the first hyphen. Later hyphens stay in the title.
fn split_record(text: &str) -> Option<AlbumRecord> {
    let (artist, title) = text.split_once('-')?;
    Some(AlbumRecord::new(artist, title))
}

pub(crate) fn parse_records(
    block: &RawBlock,
    policy: MalformedPolicy,
) -> Result<Vec<AlbumRecord>, AppError> {
    let mut records = Vec::new();

    for candidate in block.candidates() {
        let Some(text) = strip_release_suffix(candidate) else {
            continue;
        };
        if text.trim().is_empty() {
            continue;
        }

        match split_record(text) {
            Some(record) => records.push(record),
            None => {
                let err = AppError::MalformedRecord {
                    date: block.anchor.clone(),
                    candidate: text.trim().to_string(),
                };
                match policy {
                    MalformedPolicy::Fail => return Err(err),
                    MalformedPolicy::Skip => eprintln!("Warning: {err}, skipping"),
                }
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RECORD_SEPARATOR;

    fn block(text: &str) -> RawBlock {
        RawBlock {
            anchor: "3/5".to_string(),
            text: text.replace("<SEP>", &RECORD_SEPARATOR.to_string()),
        }
    }

    #[test]
    fn parses_separated_records() {
        let records = parse_records(
            &block("Drake - Certified Lover Boy - 3/5<SEP>Kanye West - Donda - 3/5"),
            MalformedPolicy::Fail,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                AlbumRecord::new("Drake", "Certified Lover Boy"),
                AlbumRecord::new("Kanye West", "Donda"),
            ]
        );
    }

    #[test]
    fn discards_fragments_without_release_suffix() {
        let records = parse_records(
            &block("<SEP>A - X - 3/4<SEP>Tracklist coming soon<SEP>"),
            MalformedPolicy::Fail,
        )
        .unwrap();
        assert_eq!(records, vec![AlbumRecord::new("A", "X")]);
    }

    #[test]
    fn accepts_unknown_day_suffix() {
        let records =
            parse_records(&block("Frank Ocean - Untitled - 12/?"), MalformedPolicy::Fail).unwrap();
        assert_eq!(records, vec![AlbumRecord::new("Frank Ocean", "Untitled")]);
    }

    #[test]
    fn keeps_text_before_first_suffix_only() {
        let records = parse_records(
            &block("A - X - 3/4 (moved from - 2/28)"),
            MalformedPolicy::Fail,
        )
        .unwrap();
        assert_eq!(records, vec![AlbumRecord::new("A", "X")]);
    }

    #[test]
    fn tolerates_spacing_lost_at_inline_boundaries() {
        let records =
            parse_records(&block("Drake- Certified Lover Boy - 3/5"), MalformedPolicy::Fail)
                .unwrap();
        assert_eq!(records, vec![AlbumRecord::new("Drake", "Certified Lover Boy")]);
    }

    #[test]
    fn extra_hyphens_stay_in_title() {
        let records =
            parse_records(&block("Jay-Z - 4:44 - 6/30"), MalformedPolicy::Fail).unwrap();
        assert_eq!(records, vec![AlbumRecord::new("Jay", "Z - 4:44")]);
    }

    #[test]
    fn empty_block_has_no_records() {
        let records = parse_records(&RawBlock::new("3/5"), MalformedPolicy::Fail).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn bare_suffix_is_ignored() {
        let records = parse_records(&block("  - 3/5<SEP>A - X - 3/5"), MalformedPolicy::Fail)
            .unwrap();
        assert_eq!(records, vec![AlbumRecord::new("A", "X")]);
    }

    #[test]
    fn record_without_separator_fails_by_default() {
        let err = parse_records(&block("Untitled- 3/5"), MalformedPolicy::Fail).unwrap_err();
        match err {
            AppError::MalformedRecord { date, candidate } => {
                assert_eq!(date, "3/5");
                assert_eq!(candidate, "Untitled");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn record_without_separator_can_be_skipped() {
        let records = parse_records(
            &block("Untitled- 3/5<SEP>A - X - 3/5"),
            MalformedPolicy::Skip,
        )
        .unwrap();
        assert_eq!(records, vec![AlbumRecord::new("A", "X")]);
    }
}
