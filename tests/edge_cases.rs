//! Edge case tests for chatlens
//!
//! These tests cover boundary conditions of the line format that real
//! exports run into: other scripts, line endings, layouts and clock quirks.

use chatlens::prelude::*;
use chrono::{Datelike, Timelike};

fn parse(line: &str) -> std::result::Result<ChatMessage, Rejection> {
    LineParser::new().parse_line(line)
}

// =========================================================================
// Unicode and special character tests
// =========================================================================

#[test]
fn test_unicode_senders_and_bodies() {
    let msg = parse("12/05/23 14:30 - Иван: Привет, мир!").unwrap();
    assert_eq!(msg.sender, "Иван");
    assert_eq!(msg.body, "Привет мир");

    let msg = parse("12/05/23 14:31 - 村上: こんにちは。").unwrap();
    assert_eq!(msg.sender, "村上");
    assert_eq!(msg.body, "こんにちは");
}

#[test]
fn test_emoji_block_is_kept_other_symbols_dropped() {
    // U+1F600 is inside the kept pictograph block, U+2764 (heart) is not
    let msg = parse("12/05/23 14:30 - Alice: 😀 \u{2764} 🎉").unwrap();
    assert_eq!(msg.body, "😀 🎉");
}

#[test]
fn test_sender_keeps_its_punctuation() {
    // Only the body is cleaned
    let msg = parse("12/05/23 14:30 - Jean-Luc (work): ok.").unwrap();
    assert_eq!(msg.sender, "Jean-Luc (work)");
    assert_eq!(msg.body, "ok");
}

#[test]
fn test_body_that_cleans_to_nothing() {
    let msg = parse("12/05/23 14:30 - Alice: ?!").unwrap();
    assert_eq!(msg.body, "");
    assert!(msg.is_empty());

    let msg = parse("12/05/23 14:30 - Alice:").unwrap();
    assert_eq!(msg.body, "");
}

#[test]
fn test_only_first_colon_splits() {
    let msg = parse("12/05/23 14:30 - Alice: ratio is 3:2 ok").unwrap();
    assert_eq!(msg.sender, "Alice");
    assert_eq!(msg.body, "ratio is 32 ok");
}

// =========================================================================
// Line endings and whitespace
// =========================================================================

#[test]
fn test_crlf_transcript() {
    let table = normalize("12/05/23 14:30 - Alice: one\r\n12/05/23 14:31 - Bob: two\r\n\r\n");
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).unwrap().body, "two");
}

#[test]
fn test_whitespace_only_lines_are_blank() {
    let (table, report) = ChatNormalizer::new().normalize_with_report(" \n\t\n   \r");
    assert!(table.is_empty());
    assert_eq!(report.blank, 3);
    assert_eq!(report.rejected(), 0);
}

#[test]
fn test_blank_line_rejected_by_line_parser() {
    assert_eq!(parse(""), Err(Rejection::NoDateTimeMatch));
    assert_eq!(parse("   "), Err(Rejection::NoDateTimeMatch));
}

// =========================================================================
// Layouts
// =========================================================================

#[test]
fn test_bracketed_ios_layout() {
    let msg = parse("[12/05/2023, 14:30:15] Alice: hi").unwrap();
    assert_eq!(msg.sender, "Alice");
    assert_eq!(msg.body, "hi");
    assert_eq!(msg.timestamp.second(), 0);
}

#[test]
fn test_comma_after_date() {
    let msg = parse("12/05/2023, 14:30 - Alice: hi").unwrap();
    assert_eq!(msg.timestamp.year(), 2023);
    assert_eq!(msg.sender, "Alice");
}

#[test]
fn test_single_digit_day_month_hour() {
    let msg = parse("1/2/23 9:05 - Alice: early").unwrap();
    assert_eq!(
        (msg.timestamp.day(), msg.timestamp.month(), msg.timestamp.hour()),
        (1, 2, 9)
    );
}

#[test]
fn test_lowercase_sender_right_after_time() {
    let msg = parse("12/05/23 14:30 amy: hi").unwrap();
    assert_eq!(msg.sender, "amy");
    assert_eq!(msg.timestamp.hour(), 14);

    let msg = parse("12/05/23 14:30 pmo: hi").unwrap();
    assert_eq!(msg.sender, "pmo");
}

#[test]
fn test_system_notice_has_no_sender() {
    assert_eq!(
        parse("12/05/23 14:30 - Alice added Bob"),
        Err(Rejection::NoSenderDelimiter)
    );
    assert_eq!(
        parse("12/05/23 14:30 - : nobody"),
        Err(Rejection::NoSenderDelimiter)
    );
}

#[test]
fn test_date_without_time_and_time_without_date() {
    assert_eq!(parse("12/05/23 - Alice: hi"), Err(Rejection::NoDateTimeMatch));
    assert_eq!(parse("14:30 - Alice: hi"), Err(Rejection::NoDateTimeMatch));
}

// =========================================================================
// Dates and clocks
// =========================================================================

#[test]
fn test_two_digit_years_are_this_century() {
    assert_eq!(parse("01/01/99 10:00 - A: x").unwrap().timestamp.year(), 2099);
    assert_eq!(parse("01/01/00 10:00 - A: x").unwrap().timestamp.year(), 2000);
}

#[test]
fn test_years_must_expand_to_four_digits() {
    assert_eq!(parse("01/01/123 10:00 - Alice: hi"), Err(Rejection::UnparseableDate));
    assert_eq!(parse("01/01/2023 10:00 - Alice: hi").unwrap().timestamp.year(), 2023);
}

#[test]
fn test_custom_century_prefix() {
    let config = ParserConfig::new().with_century_prefix("19");
    let parser = LineParser::with_config(config).unwrap();
    let msg = parser.parse_line("01/01/99 10:00 - A: x").unwrap();
    assert_eq!(msg.timestamp.year(), 1999);
}

#[test]
fn test_month_first_dates_are_rejected() {
    assert_eq!(
        parse("1/15/24 10:30 - Alice: hi"),
        Err(Rejection::UnparseableDate)
    );
}

#[test]
fn test_month_first_format_accepts_us_dates() {
    let config = ParserConfig::new().with_datetime_format("%m/%d/%Y %H:%M");
    let parser = LineParser::with_config(config).unwrap();
    let msg = parser.parse_line("1/15/24, 10:30 - Alice: hi").unwrap();
    assert_eq!((msg.timestamp.month(), msg.timestamp.day()), (1, 15));
}

#[test]
fn test_impossible_clock_values() {
    assert_eq!(parse("12/05/23 25:00 - A: x"), Err(Rejection::UnparseableDate));
    assert_eq!(parse("12/05/23 10:61 - A: x"), Err(Rejection::UnparseableDate));
    assert_eq!(parse("29/02/23 10:00 - A: x"), Err(Rejection::UnparseableDate));
}

#[test]
fn test_leap_day() {
    let msg = parse("29/02/24 10:00 - A: leap").unwrap();
    assert_eq!((msg.timestamp.day(), msg.timestamp.month()), (29, 2));
}

#[test]
fn test_meridiem_is_not_applied() {
    let msg = parse("12/05/23, 2:30 PM - Alice: afternoon").unwrap();
    assert_eq!(msg.timestamp.hour(), 2);
    assert_eq!(msg.time, "2:30 PM");
    assert_eq!(msg.sender, "Alice");
}

// =========================================================================
// Media and document-level cases
// =========================================================================

#[test]
fn test_media_marker_anywhere_in_message() {
    assert_eq!(
        parse("12/05/23 14:30 - Bob: look <Media omitted> here"),
        Err(Rejection::MediaOmitted)
    );
    // A sender cannot trigger the media rule
    assert!(parse("12/05/23 14:30 - <Media omitted> fan: hi").is_ok());
}

#[test]
fn test_media_marker_is_case_sensitive() {
    let msg = parse("12/05/23 14:30 - Bob: <media omitted>").unwrap();
    assert_eq!(msg.body, "media omitted");
}

#[test]
fn test_invalid_utf8_bytes() {
    let err = ChatNormalizer::new().normalize_bytes(&[0x31, 0x32, 0xc3]).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_empty_document() {
    let (table, report) = ChatNormalizer::new().normalize_with_report("");
    assert!(table.is_empty());
    assert_eq!(report.total_lines, 1);
    assert_eq!(report.blank, 1);
}

#[test]
fn test_large_document_keeps_order() {
    let transcript: String = (0..5_000)
        .map(|i| format!("12/05/23 {:02}:{:02} - User{}: msg {}\n", (i / 60) % 24, i % 60, i % 7, i))
        .collect();
    let table = normalize(&transcript);

    assert_eq!(table.len(), 5_000);
    for (i, msg) in table.iter().enumerate() {
        assert_eq!(msg.body, format!("msg {i}"));
    }
}
