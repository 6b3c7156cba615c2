//! Calendar events built from assignment lines.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::constants::{ALARM_LEAD_HOURS, UID_DOMAIN};
use crate::schedule::AssignmentRecord;

/// A display reminder attached to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Local wall-clock time the reminder fires
    pub trigger: NaiveDateTime,
    pub message: String,
}

/// One all-day event for an assignment due date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEvent {
    pub uid: String,
    /// `"<group> (<assignment>)"`
    pub title: String,
    pub date: NaiveDate,
    pub alarm: Reminder,
}

impl StudyEvent {
    pub fn new(
        group: &str,
        record: &AssignmentRecord,
        date: NaiveDate,
        alarm_message: &str,
    ) -> Self {
        StudyEvent {
            uid: format!("{}@{}", Uuid::new_v4(), UID_DOMAIN),
            title: format!("{} ({})", group, record.assignment),
            date,
            alarm: Reminder {
                trigger: Self::midnight_of(date) - Duration::hours(ALARM_LEAD_HOURS),
                message: alarm_message.to_string(),
            },
        }
    }

    /// Local midnight the all-day event is anchored at.
    pub fn starts_at(&self) -> NaiveDateTime {
        Self::midnight_of(self.date)
    }

    /// How far ahead of the start the reminder fires.
    pub fn alarm_lead(&self) -> Duration {
        self.starts_at() - self.alarm.trigger
    }

    /// Exclusive end date under the all-day convention.
    pub fn end_date(&self) -> NaiveDate {
        self.date + Duration::days(1)
    }

    fn midnight_of(date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN)
    }
}
