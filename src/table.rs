//! The normalized output of the parsing core.
//!
//! A [`ChatTable`] is built once per transcript by the
//! [`ChatNormalizer`](crate::normalizer::ChatNormalizer) and is read-only
//! afterwards. Rows keep the order of the lines they came from; rejected
//! lines are dropped in place, so the table is not guaranteed to be sorted
//! by timestamp.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::message::ChatMessage;

/// Ordered, immutable sequence of parsed messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChatTable {
    rows: Vec<ChatMessage>,
}

impl ChatTable {
    pub(crate) fn from_rows(rows: Vec<ChatMessage>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`, in original line order.
    pub fn get(&self, index: usize) -> Option<&ChatMessage> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.rows
    }

    /// Iterates over message bodies, the input of word counts and sentiment.
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|m| m.body.as_str())
    }

    /// Distinct senders in alphabetical order.
    pub fn senders(&self) -> BTreeSet<&str> {
        self.rows.iter().map(|m| m.sender.as_str()).collect()
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<ChatMessage> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a ChatTable {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl From<Vec<ChatMessage>> for ChatTable {
    fn from(rows: Vec<ChatMessage>) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(day: u32, sender: &str, body: &str) -> ChatMessage {
        let ts = NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        ChatMessage::new(ts, sender, body)
    }

    #[test]
    fn test_preserves_row_order() {
        let table = ChatTable::from(vec![
            msg(3, "Alice", "later"),
            msg(1, "Bob", "earlier"),
        ]);
        let bodies: Vec<&str> = table.bodies().collect();
        assert_eq!(bodies, vec!["later", "earlier"]);
    }

    #[test]
    fn test_senders_are_distinct() {
        let table = ChatTable::from(vec![
            msg(1, "Bob", "a"),
            msg(1, "Alice", "b"),
            msg(2, "Bob", "c"),
        ]);
        let senders: Vec<&str> = table.senders().into_iter().collect();
        assert_eq!(senders, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_table() {
        let table = ChatTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let table = ChatTable::from(vec![msg(1, "Alice", "hi")]);
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["sender"], "Alice");
    }
}
