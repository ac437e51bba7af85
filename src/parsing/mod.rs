//! Building blocks of the line parser.
//!
//! Each step of turning a raw line into a [`ChatMessage`](crate::ChatMessage)
//! is a separate, independently testable function with an explicit
//! accept/reject result:
//!
//! - [`DateTimeScanner::find_date`] / [`DateTimeScanner::find_time`] locate the
//!   timestamp tokens
//! - [`parse_timestamp`] combines them under the configured format
//! - [`split_sender`] separates author and message text
//! - [`MessageCleaner::clean`] normalizes the message body
//!
//! [`LineParser`](crate::parser::LineParser) wires them together.

mod clean;
mod datetime;
mod sender;

pub use clean::MessageCleaner;
pub use datetime::{
    DateTimeScanner, DateToken, Meridiem, TimeToken, normalize_year, parse_timestamp,
};
pub use sender::split_sender;
