mod dispatch;
mod help;
mod logging;

use std::ffi::OsString;
use std::iter;
use std::process::ExitCode;

use clap::Parser;
use lsw_core::{HandlerRegistry, classify};
use tracing::{debug, warn};

/// LSW collects its arguments untouched; the grammar (`--run`, `-debug`, `?`)
/// is classified by `lsw_core` rather than by clap.
#[derive(Debug, Parser)]
#[command(name = "lsw")]
#[command(about = "LSW - Linux Subsystem for Windows")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Command, subcommand, modifiers and arguments, as typed.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parses a full argv (program name first) without letting clap interpret
    /// any user token.
    ///
    /// An end-of-options marker is inserted after the program name, so a `--`
    /// typed by the user is kept as an argument like any other token.
    fn parse_verbatim<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("lsw"));
        Self::parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(argv),
        )
    }

    /// User tokens as text; invalid UTF-8 is replaced rather than rejected.
    fn tokens(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

fn main() -> ExitCode {
    let tokens = Cli::parse_verbatim(std::env::args_os()).tokens();

    // The first pass only picks the log level; the second runs under the
    // installed subscriber so its trace events are recorded.
    logging::init(logging::level_for(&classify(&tokens)));
    let parsed = classify(&tokens);
    match parsed.to_json() {
        Ok(json) => debug!(parsed = %json, "classified arguments"),
        Err(err) => warn!(%err, "failed to serialize classified arguments"),
    }

    let registry = HandlerRegistry::new();
    let mut stdout = std::io::stdout().lock();
    match dispatch::run(&parsed, &registry, &mut stdout) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
