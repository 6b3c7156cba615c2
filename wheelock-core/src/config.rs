//! Optional per-directory configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_ALARM_MESSAGE, DEFAULT_CALENDAR_NAME, DEFAULT_GROUP, INPUT_FILE,
    OUTPUT_FILE,
};
use crate::error::{ScheduleError, ScheduleResult};

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_input() -> PathBuf {
    PathBuf::from(INPUT_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(OUTPUT_FILE)
}

fn default_alarm_message() -> String {
    DEFAULT_ALARM_MESSAGE.to_string()
}

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}

/// Settings from `wheelock.toml` in the working directory.
///
/// Every key is optional. Relative paths are resolved against the
/// directory the file was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Study group name used in event titles
    #[serde(default = "default_group")]
    pub group: String,

    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Text shown by each event's reminder
    #[serde(default = "default_alarm_message")]
    pub alarm_message: String,

    #[serde(default = "default_calendar_name")]
    pub calendar_name: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            group: default_group(),
            input: default_input(),
            output: default_output(),
            alarm_message: default_alarm_message(),
            calendar_name: default_calendar_name(),
        }
    }
}

impl ScheduleConfig {
    pub fn config_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load `wheelock.toml` from `dir`, or defaults when there is none.
    pub fn load(dir: &Path) -> ScheduleResult<Self> {
        let path = Self::config_path(dir);

        if !path.exists() {
            return Ok(ScheduleConfig::default().resolved_against(dir));
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            ScheduleError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: ScheduleConfig = toml::from_str(&contents).map_err(|e| {
            ScheduleError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(config.resolved_against(dir))
    }

    fn resolved_against(mut self, dir: &Path) -> Self {
        self.input = dir.join(&self.input);
        self.output = dir.join(&self.output);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScheduleConfig::load(dir.path()).unwrap();

        assert_eq!(config.group, "Wheelock Davenport");
        assert_eq!(config.input, dir.path().join("schedule.in"));
        assert_eq!(config.output, dir.path().join("wheelock.ics"));
        assert_eq!(config.alarm_message, "Wheelock assignment due in 1 day");
        assert_eq!(config.calendar_name, "Wheelock");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("wheelock.toml"),
            "group = \"Latin Tuesdays\"\noutput = \"out/latin.ics\"\n",
        )
        .unwrap();

        let config = ScheduleConfig::load(dir.path()).unwrap();

        assert_eq!(config.group, "Latin Tuesdays");
        assert_eq!(config.output, dir.path().join("out/latin.ics"));
        assert_eq!(config.input, dir.path().join("schedule.in"));
        assert_eq!(config.calendar_name, "Wheelock");
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let input = elsewhere.path().join("plan.txt");
        std::fs::write(
            dir.path().join("wheelock.toml"),
            format!("input = {:?}\n", input.display().to_string()),
        )
        .unwrap();

        let config = ScheduleConfig::load(dir.path()).unwrap();

        assert_eq!(config.input, input);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wheelock.toml"), "groop = \"typo\"\n").unwrap();

        let err = ScheduleConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wheelock.toml"), "group = [unclosed\n").unwrap();

        assert!(ScheduleConfig::load(dir.path()).is_err());
    }
}
