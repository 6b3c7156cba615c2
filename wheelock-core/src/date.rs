//! Date resolution for assignment lines.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{ScheduleError, ScheduleResult};

/// Accepted layouts for `"<month> <day>, <year>"`, tried in order.
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%B %d, %Y"];

/// Years must be written with exactly four digits and no leading zero.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Combine a month token, day digits and the active year into a date.
///
/// The abbreviated layout (`Jan 5, 2025`) is tried first, then the full
/// month name (`January 5, 2025`). Years outside 1000-9999 never resolve.
/// The error carries the assembled text.
pub fn resolve_date(month: &str, day: &str, year: i32) -> ScheduleResult<NaiveDate> {
    let date_str = format!("{} {}, {}", month, day, year);

    if !YEAR_RANGE.contains(&year) {
        return Err(ScheduleError::BadDate(date_str));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&date_str, format).ok())
        .ok_or(ScheduleError::BadDate(date_str))
}

/// Year used for assignment lines that come before any year marker.
pub fn current_year() -> i32 {
    Local::now().year()
}
