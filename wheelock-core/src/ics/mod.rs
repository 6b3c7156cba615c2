//! ICS generation and parsing.
//!
//! Documents are produced with the icalendar crate and follow RFC 5545.

mod generate;
mod parse;

pub use generate::{generate_ics, CalendarMetadata};
pub use parse::{parse_events, ParsedEvent};
