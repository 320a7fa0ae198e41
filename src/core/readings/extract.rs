//! Tolerant extraction of timestamp/value pairs from loosely structured text.
//!
//! The input is expected to look roughly like `"2014-01-01 00:00:00": 5.5` repeated, but
//! surrounding noise, mixed quote styles and broken fragments are all tolerated. Nothing in
//! here ever fails: candidates that do not resolve into a complete pair are skipped.

use crate::record::{Record, RecordSet, MAX_ENTRIES, MAX_TIMESTAMP_LEN};

/// Literal marking the start of a timestamp field
pub const ANCHOR: &str = "2014-";

/// Quote-like characters accepted interchangeably as field delimiters
pub const DELIMITERS: [char; 6] = [
    '"',
    '\'',
    '\u{201C}', // “
    '\u{201D}', // ”
    '\u{2018}', // ‘
    '\u{2019}', // ’
];

pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Counters describing one extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Anchors examined
    pub anchors: usize,
    /// Candidates committed as records
    pub accepted: usize,
    /// Candidates discarded as malformed
    pub rejected: usize,
    /// Scanning stopped with anchors left because the set was full
    pub capacity_reached: bool,
}

/// Why a candidate near an anchor was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NoOpeningDelimiter,
    NoClosingDelimiter,
    TimestampTooLong,
    NoColon,
    NotNumeric,
}

/// Extract records from `text` into a set bounded by `MAX_ENTRIES`
pub fn extract_records(text: &str) -> RecordSet {
    extract_records_with_capacity(text, MAX_ENTRIES)
}

/// Extract records from `text` into a set bounded by `capacity`
pub fn extract_records_with_capacity(text: &str, capacity: usize) -> RecordSet {
    extract_records_with_stats(text, capacity).0
}

/// Extract records and report how the scan went
///
/// # Arguments
/// * `text` - Raw input text
/// * `capacity` - Maximum number of records to collect
///
/// # Returns
/// The records in input order together with the scan counters
pub fn extract_records_with_stats(text: &str, capacity: usize) -> (RecordSet, ExtractStats) {
    let mut records = RecordSet::with_capacity(capacity);
    let mut stats = ExtractStats::default();
    let mut cursor = 0;

    while cursor < text.len() {
        let Some(offset) = text[cursor..].find(ANCHOR) else {
            break;
        };
        let anchor = cursor + offset;

        if records.is_full() {
            stats.capacity_reached = true;
            break;
        }
        stats.anchors += 1;

        match scan_candidate(text, cursor, anchor) {
            Ok(record) => {
                if records.push(record).is_err() {
                    stats.capacity_reached = true;
                    break;
                }
                stats.accepted += 1;
            }
            Err(reason) => {
                stats.rejected += 1;
                log::trace!("Skipping candidate at byte {}: {:?}", anchor, reason);
            }
        }

        // Retry one character past the anchor, not past the whole candidate, so a
        // broken region cannot hide the anchors inside it. The anchor starts with an
        // ASCII digit, so this stays on a char boundary.
        cursor = anchor + 1;
    }

    (records, stats)
}

/// Resolve the candidate whose timestamp starts at byte `anchor`.
///
/// The opening delimiter is searched for between `cursor` and the anchor only.
fn scan_candidate(text: &str, cursor: usize, anchor: usize) -> Result<Record, Rejection> {
    if !text[cursor..anchor].chars().rev().any(is_delimiter) {
        return Err(Rejection::NoOpeningDelimiter);
    }

    let rest = &text[anchor..];
    let close = rest
        .find(is_delimiter)
        .ok_or(Rejection::NoClosingDelimiter)?;
    let timestamp = &rest[..close];
    if timestamp.chars().count() > MAX_TIMESTAMP_LEN {
        return Err(Rejection::TimestampTooLong);
    }

    let after_timestamp = &rest[close..];
    let colon = after_timestamp.find(':').ok_or(Rejection::NoColon)?;
    let value_text = after_timestamp[colon + 1..]
        .trim_start_matches(|c: char| c <= ' ' || c.is_whitespace() || is_delimiter(c));

    match value_text.chars().next() {
        Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') => {}
        _ => return Err(Rejection::NotNumeric),
    }
    let (value, _) = parse_float_prefix(value_text).ok_or(Rejection::NotNumeric)?;

    Record::new(timestamp, value).map_err(|_| Rejection::TimestampTooLong)
}

/// Parse the longest decimal floating-point prefix of `text`
///
/// Accepts `[+-]? digits* (. digits*)? ([eE] [+-]? digits+)?` with at least one mantissa
/// digit. An exponent marker without digits is left unconsumed. Hexadecimal input
/// (`0x1A`) is rejected outright rather than read as its leading `0`.
///
/// # Returns
/// The parsed value and the number of bytes consumed, or `None` if no number starts here
pub fn parse_float_prefix(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if matches!(bytes.get(end..end + 2), Some([b'0', b'x' | b'X'])) {
        return None;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().map(|value| (value, end))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestamps(records: &RecordSet) -> Vec<&str> {
        records.iter().map(Record::timestamp).collect()
    }

    #[test]
    fn test_extract_basic() {
        let text = r#"key: "2014-01-01 00:00:00": 5.5, "2014-01-01 01:00:00": 3.2, "2014-01-01 02:00:00": -1.0"#;

        let records = extract_records(text);
        assert_eq!(records.len(), 3);
        assert_eq!(records.values(), vec![5.5, 3.2, -1.0]);
        assert_eq!(
            timestamps(&records),
            vec![
                "2014-01-01 00:00:00",
                "2014-01-01 01:00:00",
                "2014-01-01 02:00:00"
            ]
        );
    }

    #[test]
    fn test_non_numeric_value_is_skipped() {
        let text = r#"{"2014-13-99": abc, "2014-01-01 00:00:00": 5.5}"#;

        let (records, stats) = extract_records_with_stats(text, MAX_ENTRIES);
        assert_eq!(records.len(), 1);
        assert_eq!(records.as_slice()[0].timestamp(), "2014-01-01 00:00:00");
        assert_eq!(records.as_slice()[0].value(), 5.5);
        assert_eq!(stats.anchors, 2);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 1);
        assert!(!stats.capacity_reached);
    }

    #[test]
    fn test_empty_input() {
        let (records, stats) = extract_records_with_stats("", MAX_ENTRIES);
        assert!(records.is_empty());
        assert_eq!(stats, ExtractStats::default());
    }

    #[test]
    fn test_no_anchor() {
        let records = extract_records(r#"{"2013-12-31 23:00:00": 1.0, "note": "none"}"#);
        assert!(records.is_empty());
    }

    #[test]
    fn test_mixed_delimiters() {
        let text = "\u{201C}2014-03-01 12:00:00\u{201D}: 7.25\n\
                    '2014-03-01 13:00:00': '8'\n\
                    \u{2018}2014-03-01 14:00:00\u{2019}: \u{201C}-0.5\u{201D}";

        let records = extract_records(text);
        assert_eq!(records.values(), vec![7.25, 8.0, -0.5]);
        assert_eq!(records.as_slice()[2].timestamp(), "2014-03-01 14:00:00");
    }

    #[test]
    fn test_quoted_value() {
        let records = extract_records(r#"{"tempm": {"2014-01-01 00:00:00": "12.5"}}"#);
        assert_eq!(records.values(), vec![12.5]);
    }

    #[test]
    fn test_long_timestamp_is_skipped() {
        let text = r#""2014-01-01T00:00:00.000Z": 9.0, "2014-01-02 00:00:00": 4.0"#;

        let records = extract_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records.values(), vec![4.0]);
        assert!(records
            .iter()
            .all(|r| r.timestamp().chars().count() <= MAX_TIMESTAMP_LEN));
    }

    #[test]
    fn test_capacity_stops_extraction() {
        let text = r#""2014-01-01": 1, "2014-01-02": 2, "2014-01-03": 3"#;

        let (records, stats) = extract_records_with_stats(text, 2);
        assert_eq!(records.len(), 2);
        assert_eq!(records.values(), vec![1.0, 2.0]);
        assert!(stats.capacity_reached);
    }

    #[test]
    fn test_capacity_exactly_filled() {
        let text = r#""2014-01-01": 1, "2014-01-02": 2"#;

        let (records, stats) = extract_records_with_stats(text, 2);
        assert_eq!(records.len(), 2);
        assert!(!stats.capacity_reached);
    }

    #[test]
    fn test_missing_opening_delimiter() {
        // Nothing between the scan start and the anchor to act as a delimiter
        let records = extract_records(r#"2014-01-01": 5.0"#);
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let records = extract_records(r#""2014-01-01: 5.0"#);
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_colon() {
        let records = extract_records(r#""2014-01-01 00:00:00" 5.0"#);
        assert!(records.is_empty());
    }

    #[test]
    fn test_sign_without_digits() {
        let records = extract_records(r#""2014-01-01": -, "2014-01-02": +.5"#);
        assert_eq!(records.values(), vec![0.5]);
    }

    #[test]
    fn test_colon_search_crosses_fragments() {
        // The first candidate has no colon of its own, so it takes the next one
        let records = extract_records(r#""2014-01-01" "2014-01-02": 4"#);
        assert_eq!(records.values(), vec![4.0, 4.0]);
        assert_eq!(records.as_slice()[0].timestamp(), "2014-01-01");
    }

    #[test]
    fn test_corrupt_region_does_not_hide_later_records() {
        let text = r#""2014-01-01 00:00:00: ""2014-01-01 01:00:00": 2.5"#;

        let records = extract_records(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records.as_slice()[0].timestamp(), "2014-01-01 01:00:00");
        assert_eq!(records.as_slice()[0].value(), 2.5);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("5.5,"), Some((5.5, 3)));
        assert_eq!(parse_float_prefix("-1.0}"), Some((-1.0, 4)));
        assert_eq!(parse_float_prefix("+3"), Some((3.0, 2)));
        assert_eq!(parse_float_prefix(".25x"), Some((0.25, 3)));
        assert_eq!(parse_float_prefix("7."), Some((7.0, 2)));
        assert_eq!(parse_float_prefix("1e3 "), Some((1000.0, 3)));
        assert_eq!(parse_float_prefix("2.5E-1"), Some((0.25, 6)));
        assert_eq!(parse_float_prefix("4e"), Some((4.0, 1)));
        assert_eq!(parse_float_prefix("4e+"), Some((4.0, 1)));
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("0x1A"), None);
        assert_eq!(parse_float_prefix("-0X1p3"), None);
        assert_eq!(parse_float_prefix("0.5x"), Some((0.5, 3)));
    }

    #[test]
    fn test_unicode_whitespace_before_value() {
        let nbsp = extract_records("{\"2014-01-01 00:00:00\":\u{00A0}5.5}");
        assert_eq!(nbsp.values(), vec![5.5]);

        let ideographic = extract_records("{\"2014-01-01 00:00:00\":\u{3000}\u{2003}-2.5}");
        assert_eq!(ideographic.values(), vec![-2.5]);
    }

    #[test]
    fn test_hex_value_is_skipped() {
        let (records, stats) =
            extract_records_with_stats(r#""2014-01-01": 0x1A, "2014-01-02": 26"#, MAX_ENTRIES);
        assert_eq!(records.values(), vec![26.0]);
        assert_eq!(records.as_slice()[0].timestamp(), "2014-01-02");
        assert_eq!(stats.rejected, 1);
    }
}
