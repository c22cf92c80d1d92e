//! Logging setup.
//!
//! Log lines always go to stderr: `generate --output -` writes the document
//! to stdout and the two streams must not interleave.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_LEVEL_ENV: &str = "CONFDOC_LOG_LEVEL";

/// Log line format on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Plain text, colored when the terminal allows it.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Directive for a `-v` count: warn, info, debug, then trace for 3 and up.
#[must_use]
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the event filter. A parsable `directive_override` wins over the
/// verbosity count; an unparsable one is ignored.
#[must_use]
pub fn build_filter(verbosity: u8, directive_override: Option<&str>) -> EnvFilter {
    directive_override
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_to_directive(verbosity)))
}

/// Whether log output should carry ANSI escapes.
#[must_use]
pub fn wants_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let directive = std::env::var(LOG_LEVEL_ENV).ok();
    let filter = build_filter(verbosity, directive.as_deref());
    let show_target = verbosity >= 2;

    let result = match format {
        LogFormat::Human => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(wants_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ))
            .with_target(show_target)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .with_target(show_target)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(?format, verbosity, "logging initialized");
    }
}
