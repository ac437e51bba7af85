//! Sender / message split.

use crate::parser::Rejection;

/// Punctuation that separates the timestamp from the sender in the layouts
/// exporters produce (`12/05/23 14:30 - Alice:`, `[12/05/23, 14:30] Alice:`).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | ',' | ']' | '\u{2013}' | '\u{2014}')
}

/// Splits the text following the date/time region into sender and message.
///
/// Leading separators are skipped, then everything up to the first colon is
/// the sender and the rest the message. Both are trimmed.
///
/// ```
/// use chatlens::parsing::split_sender;
///
/// assert_eq!(split_sender(" - Alice: Hi: there"), Ok(("Alice", "Hi: there")));
/// assert!(split_sender(" - Alice joined").is_err());
/// ```
pub fn split_sender(remainder: &str) -> Result<(&str, &str), Rejection> {
    let rest = remainder.trim_start_matches(is_separator);
    let (sender, message) = rest.split_once(':').ok_or(Rejection::NoSenderDelimiter)?;

    let sender = sender.trim();
    if sender.is_empty() {
        return Err(Rejection::NoSenderDelimiter);
    }

    Ok((sender, message.trim()))
}
