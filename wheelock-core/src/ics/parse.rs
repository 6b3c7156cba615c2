//! Reading generated documents back, using the icalendar crate's parser.

use chrono::{Duration, NaiveDate};
use icalendar::{
    parser::{read_calendar, unfold, Component},
    DatePerhapsTime,
};

use crate::error::{ScheduleError, ScheduleResult};

/// The parts of a VEVENT this tool writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub uid: String,
    pub summary: String,
    pub date: NaiveDate,
    /// Lead time of the first VALARM before the start
    pub alarm_lead: Option<Duration>,
    pub alarm_message: Option<String>,
}

/// Parse every all-day VEVENT in an ICS document, in document order.
///
/// Events without a UID, a SUMMARY or a date-valued DTSTART are skipped.
pub fn parse_events(content: &str) -> ScheduleResult<Vec<ParsedEvent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| ScheduleError::IcsParse(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(parse_vevent)
        .collect())
}

fn parse_vevent(vevent: &Component) -> Option<ParsedEvent> {
    let uid = vevent.find_prop("UID")?.val.to_string();
    let summary = unescape_text(vevent.find_prop("SUMMARY")?.val.as_ref());
    let date = match DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()? {
        DatePerhapsTime::Date(d) => d,
        DatePerhapsTime::DateTime(_) => return None,
    };

    let alarm = vevent.components.iter().find(|c| c.name == "VALARM");
    let alarm_lead = alarm
        .and_then(|a| a.find_prop("TRIGGER"))
        .and_then(|p| parse_trigger_lead(p.val.as_ref()));
    let alarm_message = alarm
        .and_then(|a| a.find_prop("DESCRIPTION"))
        .map(|p| unescape_text(p.val.as_ref()));

    Some(ParsedEvent {
        uid,
        summary,
        date,
        alarm_lead,
        alarm_message,
    })
}

/// Parse a TRIGGER value (`-PT1H`, `-PT3600S`, `-P1D`) into the lead time
/// before the start. Triggers after the start come back negative.
fn parse_trigger_lead(value: &str) -> Option<Duration> {
    let is_before = value.starts_with('-');
    let duration_str = value.trim_start_matches(['-', '+']);

    let duration = iso8601::duration(duration_str).ok()?;
    let std_duration: std::time::Duration = duration.into();
    let lead = Duration::from_std(std_duration).ok()?;

    Some(if is_before { lead } else { -lead })
}

/// Undo RFC 5545 TEXT escaping. Unknown escapes are kept as written.
fn unescape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(c @ ('\\' | ';' | ',')) => out.push(c),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{BuildOptions, StudyCalendar};
    use crate::ics::{generate_ics, CalendarMetadata};

    fn options() -> BuildOptions {
        BuildOptions {
            group: "Wheelock Davenport".to_string(),
            alarm_message: "Wheelock assignment due in 1 day".to_string(),
            default_year: 2025,
        }
    }

    #[test]
    fn test_parse_generated_calendar() {
        let text = "2025\nJan. 5: Chapter 1\n2026\nFeb 3: Chapter 2; drills, part 1\n";
        let (calendar, _) = StudyCalendar::from_schedule(text, &options());
        let ics = generate_ics(&calendar, &CalendarMetadata::default());

        let parsed = parse_events(&ics).expect("Should parse generated ICS");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].summary, "Wheelock Davenport (Chapter 1)");
        assert_eq!(parsed[0].date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
        assert_eq!(parsed[1].summary, "Wheelock Davenport (Chapter 2; drills, part 1)");
        assert_eq!(parsed[1].date, NaiveDate::from_ymd_opt(2026, 2, 3).unwrap());
        assert_eq!(parsed[0].uid, calendar.events()[0].uid);
    }

    #[test]
    fn test_parse_generated_alarm() {
        let (calendar, _) = StudyCalendar::from_schedule("Mar 1: Preface\n", &options());
        let ics = generate_ics(&calendar, &CalendarMetadata::default());

        let parsed = parse_events(&ics).unwrap();

        assert_eq!(parsed[0].alarm_lead, Some(Duration::hours(1)));
        assert_eq!(
            parsed[0].alarm_message.as_deref(),
            Some("Wheelock assignment due in 1 day")
        );
    }

    #[test]
    fn test_parse_long_summary_is_unfolded() {
        let long = "Chapter 12: the passive voice, perfect system, with all of the sentences";
        let text = format!("2025\nApr 2: {}\n", long);
        let (calendar, _) = StudyCalendar::from_schedule(&text, &options());
        let ics = generate_ics(&calendar, &CalendarMetadata::default());

        let parsed = parse_events(&ics).unwrap();

        assert_eq!(parsed[0].summary, format!("Wheelock Davenport ({})", long));
    }

    #[test]
    fn test_parse_skips_timed_events() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:timed-1\r\n\
SUMMARY:Timed\r\n\
DTSTART:20250101T100000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:allday-1\r\n\
SUMMARY:All day\r\n\
DTSTART;VALUE=DATE:20250102\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
DESCRIPTION:Reminder\r\n\
TRIGGER:-P1D\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let parsed = parse_events(ics).unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].uid, "allday-1");
        assert_eq!(parsed[0].alarm_lead, Some(Duration::days(1)));
    }

    #[test]
    fn test_parse_trigger_lead_forms() {
        assert_eq!(parse_trigger_lead("-PT1H"), Some(Duration::hours(1)));
        assert_eq!(parse_trigger_lead("-PT3600S"), Some(Duration::hours(1)));
        assert_eq!(parse_trigger_lead("-PT30M"), Some(Duration::minutes(30)));
        assert_eq!(parse_trigger_lead("PT15M"), Some(-Duration::minutes(15)));
        assert_eq!(parse_trigger_lead("garbage"), None);
    }

    #[test]
    fn test_unescape_text() {
        assert_eq!(unescape_text(r"a\, b\; c"), "a, b; c");
        assert_eq!(unescape_text(r"line\nbreak"), "line\nbreak");
        assert_eq!(unescape_text(r"back\\slash"), r"back\slash");
        assert_eq!(unescape_text(r"odd\q"), r"odd\q");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }
}
