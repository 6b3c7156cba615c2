/// Schedule read from the working directory.
pub const INPUT_FILE: &str = "schedule.in";

/// Calendar written to the working directory, replaced on every run.
pub const OUTPUT_FILE: &str = "wheelock.ics";

/// Optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "wheelock.toml";

pub const DEFAULT_GROUP: &str = "Wheelock Davenport";

pub const DEFAULT_ALARM_MESSAGE: &str = "Wheelock assignment due in 1 day";

pub const DEFAULT_CALENDAR_NAME: &str = "Wheelock";

/// How long before the due date's midnight the reminder fires.
pub const ALARM_LEAD_HOURS: i64 = 1;

pub const PRODID: &str = "-//wheelock//schedule//EN";

/// Suffix appended to generated event UIDs.
pub const UID_DOMAIN: &str = "wheelock";
