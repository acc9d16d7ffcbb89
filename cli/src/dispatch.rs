//! Routes a classified invocation to its output or handler.

use std::io::Write;

use lsw_core::{ExitStatus, HandlerRegistry, MainCommand, ParsedCommand};
use tracing::{debug, info};

use crate::help::{HELP_TEXT, NOT_IMPLEMENTED};

/// Writes help or the not-implemented notice, or runs a registered handler.
///
/// `Help` and `Unknown` never reach the registry.
pub fn run<W: Write>(
    parsed: &ParsedCommand,
    registry: &HandlerRegistry,
    out: &mut W,
) -> Result<ExitStatus, String> {
    match &parsed.main_command {
        MainCommand::Help => {
            debug!("showing help");
            write_text(out, HELP_TEXT)?;
            Ok(ExitStatus::SUCCESS)
        }
        MainCommand::Unknown(token) => {
            debug!(token = token.as_str(), "unrecognized command");
            write_text(out, NOT_IMPLEMENTED)?;
            Ok(ExitStatus::SUCCESS)
        }
        command => match registry.get(command) {
            Some(handler) => {
                info!(%command, "dispatching to handler");
                let status = handler.execute(parsed);
                debug!(%command, code = status.0, "handler finished");
                Ok(status)
            }
            None => {
                debug!(%command, "no handler registered");
                write_text(out, NOT_IMPLEMENTED)?;
                Ok(ExitStatus::SUCCESS)
            }
        },
    }
}

fn write_text<W: Write>(out: &mut W, text: &str) -> Result<(), String> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|err| format!("Failed to write to stdout: {err}"))
}
