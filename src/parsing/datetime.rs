//! Date and time token extraction.
//!
//! Exports put the date and the time of day next to each other but with
//! varying punctuation (`12/05/23 14:30 -`, `[12/05/2023, 14:30:15]`,
//! `1/5/23, 2:30 PM -`). Instead of one pattern per layout, the date and the
//! time are searched for independently and combined afterwards.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::parser::Rejection;

const DATE_PATTERN: &str = r"(\d{1,2})/(\d{1,2})/(\d{2,4})";
// The marker must end on a word boundary so a sender such as `amy` after
// the time is not read as `am`.
const TIME_PATTERN: &str = r"(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*(AM|PM|am|pm)\b)?";

/// AM/PM marker attached to a time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A `D/M/Y` date found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken<'a> {
    pub day: &'a str,
    pub month: &'a str,
    /// Two to four digits, as written.
    pub year: &'a str,
    /// Byte offset just past the match.
    pub end: usize,
}

/// An `H:MM[:SS][ AM|PM]` time found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToken<'a> {
    /// The matched time text, without the trailing whitespace.
    pub text: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: Option<&'a str>,
    /// Recognized but never applied to the hour.
    pub meridiem: Option<Meridiem>,
    /// Byte offset just past the match.
    pub end: usize,
}

/// Compiled date and time patterns.
#[derive(Debug, Clone)]
pub struct DateTimeScanner {
    date: Regex,
    time: Regex,
}

impl DateTimeScanner {
    pub fn new() -> Self {
        Self {
            date: Regex::new(DATE_PATTERN).expect("date pattern compiles"),
            time: Regex::new(TIME_PATTERN).expect("time pattern compiles"),
        }
    }

    /// Finds the first date in `line`.
    pub fn find_date<'a>(&self, line: &'a str) -> Result<DateToken<'a>, Rejection> {
        let caps = self.date.captures(line).ok_or(Rejection::NoDateTimeMatch)?;
        let whole = caps.get(0).ok_or(Rejection::NoDateTimeMatch)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());

        Ok(DateToken {
            day: group(1),
            month: group(2),
            year: group(3),
            end: whole.end(),
        })
    }

    /// Finds the first time of day in `line`.
    pub fn find_time<'a>(&self, line: &'a str) -> Result<TimeToken<'a>, Rejection> {
        let caps = self.time.captures(line).ok_or(Rejection::NoDateTimeMatch)?;
        let whole = caps.get(0).ok_or(Rejection::NoDateTimeMatch)?;
        let group = |i| caps.get(i).map_or("", |m| m.as_str());

        let meridiem = caps.get(4).map(|m| {
            if m.as_str().eq_ignore_ascii_case("pm") {
                Meridiem::Pm
            } else {
                Meridiem::Am
            }
        });

        Ok(TimeToken {
            text: whole.as_str().trim_end(),
            hour: group(1),
            minute: group(2),
            second: caps.get(3).map(|m| m.as_str()),
            meridiem,
            end: whole.end(),
        })
    }
}

impl Default for DateTimeScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Expands a two-digit year with `century_prefix`; other lengths pass through.
///
/// ```
/// use chatlens::parsing::normalize_year;
///
/// assert_eq!(normalize_year("23", "20"), "2023");
/// assert_eq!(normalize_year("2023", "20"), "2023");
/// ```
pub fn normalize_year<'a>(year: &'a str, century_prefix: &str) -> Cow<'a, str> {
    if year.len() == 2 {
        Cow::Owned(format!("{century_prefix}{year}"))
    } else {
        Cow::Borrowed(year)
    }
}

/// Combines date and time tokens into a timestamp using `format`.
///
/// Only hour and minute take part: seconds are dropped and an AM/PM marker
/// does not shift the hour. The year must have four digits once expanded
/// (a three-digit year is rejected). There is no fallback when `format`
/// fails.
pub fn parse_timestamp(
    date: &DateToken<'_>,
    time: &TimeToken<'_>,
    century_prefix: &str,
    format: &str,
) -> Result<NaiveDateTime, Rejection> {
    let year = normalize_year(date.year, century_prefix);
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::UnparseableDate);
    }
    let combined = format!(
        "{}/{}/{} {}:{}",
        date.day, date.month, year, time.hour, time.minute
    );

    NaiveDateTime::parse_from_str(&combined, format).map_err(|_| Rejection::UnparseableDate)
}
