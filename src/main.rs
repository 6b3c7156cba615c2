mod logging;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use wheelock_core::date::current_year;
use wheelock_core::ics::CalendarMetadata;
use wheelock_core::writer::write_calendar;
use wheelock_core::{BuildOptions, ScheduleConfig, StudyCalendar};

#[derive(Parser)]
#[command(name = "wheelock-ical", version)]
#[command(about = "Generate an ICS calendar for the Wheelock Latin study group")]
struct Cli {
    /// Debug mode
    #[arg(short = 'D', long)]
    debug: bool,

    /// Study group name (default "Wheelock Davenport")
    #[arg(short, long, value_name = "NAME")]
    group: Option<String>,

    /// Verbose mode
    #[arg(short, long)]
    verbose: bool,

    /// Arguments to the program (ignored)
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug, cli.verbose);

    if !cli.args.is_empty() {
        debug!("ignoring arguments: {}", cli.args.join(" "));
    }

    let config = ScheduleConfig::load(Path::new("."))?;

    cmd_generate(cli.group, &config)
}

/// Read the schedule, build the events and write the calendar once.
fn cmd_generate(group: Option<String>, config: &ScheduleConfig) -> Result<()> {
    let options = BuildOptions {
        group: group.unwrap_or_else(|| config.group.clone()),
        alarm_message: config.alarm_message.clone(),
        default_year: current_year(),
    };

    let text = std::fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read schedule at {}", config.input.display()))?;

    let (calendar, report) = StudyCalendar::from_schedule(&text, &options);

    let metadata = CalendarMetadata {
        name: config.calendar_name.clone(),
    };
    write_calendar(&config.output, &calendar, &metadata)
        .with_context(|| format!("Failed to write calendar to {}", config.output.display()))?;

    info!(
        "Wrote {} events to {} ({} lines read, {} bad dates skipped)",
        report.events,
        config.output.display(),
        report.lines,
        report.bad_dates
    );

    Ok(())
}
