//! Writing the calendar file.

use std::path::Path;

use tracing::debug;

use crate::calendar::StudyCalendar;
use crate::error::ScheduleResult;
use crate::ics::{generate_ics, CalendarMetadata};

/// Serialize the whole calendar and write it in one go, replacing any
/// existing file at `path`.
pub fn write_calendar(
    path: &Path,
    calendar: &StudyCalendar,
    metadata: &CalendarMetadata,
) -> ScheduleResult<()> {
    let content = generate_ics(calendar, metadata);
    debug!("writing {} bytes to {}", content.len(), path.display());
    std::fs::write(path, content)?;
    Ok(())
}
