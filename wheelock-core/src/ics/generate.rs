//! ICS document generation.

use chrono::{NaiveDate, Utc};
use icalendar::{Alarm, Calendar, Component, EventLike, Property, Trigger, ValueType};

use crate::calendar::StudyCalendar;
use crate::constants::{DEFAULT_CALENDAR_NAME, PRODID};
use crate::event::StudyEvent;

/// Calendar-level properties written alongside the events
#[derive(Debug, Clone)]
pub struct CalendarMetadata {
    /// Display name (NAME / X-WR-CALNAME)
    pub name: String,
}

impl Default for CalendarMetadata {
    fn default() -> Self {
        CalendarMetadata {
            name: DEFAULT_CALENDAR_NAME.to_string(),
        }
    }
}

/// Generate one .ics document holding every event in the calendar
pub fn generate_ics(calendar: &StudyCalendar, metadata: &CalendarMetadata) -> String {
    let mut cal = Calendar::new();
    cal.name(&metadata.name);

    // One DTSTAMP for the whole run
    let dtstamp = Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for event in calendar.events() {
        cal.push(build_vevent(event, &dtstamp));
    }

    let cal = cal.done();

    strip_ics_bloat(&cal.to_string())
}

fn build_vevent(event: &StudyEvent, dtstamp: &str) -> icalendar::Event {
    let mut vevent = icalendar::Event::new();
    vevent.uid(&event.uid);
    vevent.summary(&event.title);
    vevent.add_property("DTSTAMP", dtstamp);

    // All-day: DTSTART on the due date, exclusive DTEND on the next day
    add_date_property(&mut vevent, "DTSTART", event.date);
    add_date_property(&mut vevent, "DTEND", event.end_date());

    let trigger = Trigger::before_start(event.alarm_lead());
    vevent.alarm(Alarm::display(&event.alarm.message, trigger));

    vevent.done()
}

/// Add a DATE-valued property (`NAME;VALUE=DATE:YYYYMMDD`)
fn add_date_property(vevent: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    vevent.append_property(prop);
}

/// Rewrite icalendar's output into the shape we publish.
///
/// The PRODID becomes ours and the redundant `CALSCALE:GREGORIAN` line is
/// dropped. Reminders lose the `DTSTAMP` and `UID` lines icalendar gives
/// every component; the event keeps its own.
fn strip_ics_bloat(ics: &str) -> String {
    let mut out = String::with_capacity(ics.len());
    let mut alarm_depth = 0usize;

    for line in ics.lines() {
        match line {
            "CALSCALE:GREGORIAN" => continue,
            "BEGIN:VALARM" => alarm_depth += 1,
            "END:VALARM" => alarm_depth = alarm_depth.saturating_sub(1),
            _ if line.starts_with("PRODID:") => {
                out.push_str("PRODID:");
                out.push_str(PRODID);
                out.push_str("\r\n");
                continue;
            }
            _ if alarm_depth > 0
                && (line.starts_with("DTSTAMP:") || line.starts_with("UID:")) =>
            {
                continue
            }
            _ => {}
        }

        out.push_str(line);
        out.push_str("\r\n");
    }

    out
}
