//! Message body cleaning.

use regex::Regex;

const URL_PATTERN: &str = r"http\S+|www\S+|https\S+";

// Word characters, whitespace and the U+1F300..U+1F9FF pictograph block
// survive; everything else (punctuation, symbols, other emoji) is dropped.
const DISALLOWED_PATTERN: &str = r"[^\w\s\x{1F300}-\x{1F9FF}]";

/// Strips links, punctuation and redundant whitespace from message text.
///
/// # Example
///
/// ```
/// use chatlens::parsing::MessageCleaner;
///
/// let cleaner = MessageCleaner::new();
/// assert_eq!(cleaner.clean("Check http://x.com now 😀"), "Check now 😀");
/// assert_eq!(cleaner.clean("  Wait... what?!  "), "Wait what");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCleaner {
    url: Regex,
    disallowed: Regex,
}

impl MessageCleaner {
    pub fn new() -> Self {
        Self {
            url: Regex::new(URL_PATTERN).expect("url pattern compiles"),
            disallowed: Regex::new(DISALLOWED_PATTERN).expect("character filter compiles"),
        }
    }

    /// Returns the cleaned form of `message`.
    pub fn clean(&self, message: &str) -> String {
        let without_urls = self.url.replace_all(message, "");
        let filtered = self.disallowed.replace_all(&without_urls, "");

        filtered.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for MessageCleaner {
    fn default() -> Self {
        Self::new()
    }
}
