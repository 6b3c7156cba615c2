use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log to stderr with a severity on every line.
///
/// WARN and up by default, INFO with `--verbose`, DEBUG with `--debug`.
/// `RUST_LOG` directives are applied on top. Colors only on a terminal.
pub fn init(debug: bool, verbose: bool) {
    let level = if debug {
        Level::DEBUG
    } else if verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // The flag level is the global default; RUST_LOG can only add targets
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
