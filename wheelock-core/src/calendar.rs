//! The read pass: schedule text in, collected events out.

use tracing::{debug, error};

use crate::constants::{DEFAULT_ALARM_MESSAGE, DEFAULT_GROUP};
use crate::date::{current_year, resolve_date};
use crate::event::StudyEvent;
use crate::schedule::ScheduleLine;

/// Settings for one read pass.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub group: String,
    pub alarm_message: String,
    /// Year for assignment lines before the first year marker
    pub default_year: i32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            group: DEFAULT_GROUP.to_string(),
            alarm_message: DEFAULT_ALARM_MESSAGE.to_string(),
            default_year: current_year(),
        }
    }
}

/// Counts from one read pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub lines: usize,
    pub events: usize,
    /// Assignment lines dropped because their date did not resolve
    pub bad_dates: usize,
}

/// Events in the order their lines appeared.
#[derive(Debug, Clone, Default)]
pub struct StudyCalendar {
    events: Vec<StudyEvent>,
}

impl StudyCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calendar from the full text of a schedule.
    ///
    /// Year markers apply to every following line until the next marker.
    /// A line whose date cannot be resolved is logged and skipped; the
    /// rest of the schedule is still read.
    pub fn from_schedule(text: &str, options: &BuildOptions) -> (Self, BuildReport) {
        let mut calendar = StudyCalendar::new();
        let mut report = BuildReport::default();
        let mut year = options.default_year;

        for (index, line) in text.lines().enumerate() {
            report.lines += 1;

            match ScheduleLine::classify(line) {
                ScheduleLine::Year(marker) => {
                    debug!("line {}: year set to {}", index + 1, marker);
                    year = marker;
                }
                ScheduleLine::Assignment(record) => {
                    match resolve_date(&record.month, &record.day, year) {
                        Ok(date) => {
                            let event = StudyEvent::new(
                                &options.group,
                                &record,
                                date,
                                &options.alarm_message,
                            );
                            debug!("line {}: {} on {}", index + 1, event.title, event.date);
                            calendar.push(event);
                            report.events += 1;
                        }
                        Err(_) => {
                            error!("Bad date spec: {}", line);
                            report.bad_dates += 1;
                        }
                    }
                }
                ScheduleLine::Other => {}
            }
        }

        (calendar, report)
    }

    pub fn push(&mut self, event: StudyEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[StudyEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
