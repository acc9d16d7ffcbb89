//! Diagnostic logging setup.
//!
//! Logs go to stderr so the help text and notices on stdout stay exact.

use lsw_core::{Modifier, ParsedCommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Maps the modifiers of an invocation to a log level.
///
/// `-trace` beats `-debug`, both beat `-quiet`/`-silent`, which beat `-verbose`.
pub fn level_for(parsed: &ParsedCommand) -> LevelFilter {
    if parsed.has_modifier(Modifier::Trace) {
        LevelFilter::TRACE
    } else if parsed.has_modifier(Modifier::Debug) {
        LevelFilter::DEBUG
    } else if parsed.has_modifier(Modifier::Quiet) || parsed.has_modifier(Modifier::Silent) {
        LevelFilter::OFF
    } else if parsed.has_modifier(Modifier::Verbose) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Installs the global subscriber at `level`. `RUST_LOG` overrides it.
pub fn init(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())),
        )
        .init();
}
