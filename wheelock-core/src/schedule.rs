//! Line classification for schedule files.
//!
//! A schedule is read one line at a time. A line is either a bare year
//! (`2025`, `2025:`) that sets the year for the lines after it, an
//! assignment line (`Jan. 5: Chapter 1`), or anything else, which is ignored.

use std::sync::LazyLock;

use regex::Regex;

static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]{4})\s*:?\s*$").expect("valid year regex"));

static RE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Z][a-z]+)\s*\.?\s+([0-9]+)\s*:\s*(\S(?:.*\S)?)\s*$")
        .expect("valid assignment regex")
});

/// Month and day as written, plus the assignment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Month name or abbreviation, already normalized (`Sept` becomes `Sep`)
    pub month: String,
    /// Day digits as written; may be out of range for the month
    pub day: String,
    /// Trimmed assignment description
    pub assignment: String,
}

/// What a single schedule line means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleLine {
    Year(i32),
    Assignment(AssignmentRecord),
    Other,
}

impl ScheduleLine {
    /// Classify one line. The year pattern is checked first.
    pub fn classify(line: &str) -> Self {
        if let Some(caps) = RE_YEAR.captures(line) {
            // Four ASCII digits always fit in an i32
            if let Ok(year) = caps[1].parse() {
                return ScheduleLine::Year(year);
            }
        }

        if let Some(caps) = RE_ASSIGNMENT.captures(line) {
            return ScheduleLine::Assignment(AssignmentRecord {
                month: normalize_month(&caps[1]).to_string(),
                day: caps[2].to_string(),
                assignment: caps[3].to_string(),
            });
        }

        ScheduleLine::Other
    }
}

/// `Sept` is common in schedules but not a standard abbreviation.
pub fn normalize_month(month: &str) -> &str {
    if month == "Sept" { "Sep" } else { month }
}
