//! Core of wheelock-ical.
//!
//! Turns a plain-text reading schedule into an ICS calendar:
//! - `schedule` classifies input lines (year markers, assignment lines)
//! - `date` resolves month/day/year text into a date
//! - `event` builds one all-day event with a reminder per assignment
//! - `calendar` runs the read pass and collects the events
//! - `ics` and `writer` serialize the collection to disk

pub mod calendar;
pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod event;
pub mod ics;
pub mod schedule;
pub mod writer;

pub use calendar::{BuildOptions, BuildReport, StudyCalendar};
pub use config::ScheduleConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use event::{Reminder, StudyEvent};
pub use schedule::{AssignmentRecord, ScheduleLine};
