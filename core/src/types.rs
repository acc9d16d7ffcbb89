//! Classification result types.
//!
//! This module defines the value produced by one pass of the argument
//! classifier. The types are serializable with [`serde`] so a parsed
//! invocation can be logged or handed to another process as JSON.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level action selected by the first token of an invocation.
///
/// Recognized commands match their bare word (`run`) or the `--` form
/// (`--run`). Anything else is kept verbatim in [`MainCommand::Unknown`].
///
/// # Examples
///
/// ```
/// use lsw_core::MainCommand;
///
/// assert_eq!(MainCommand::Winget.name(), "winget");
/// assert_eq!(MainCommand::Unknown("--frobnicate".into()).name(), "--frobnicate");
/// assert_eq!(MainCommand::Run.to_string(), "run");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainCommand {
    /// Show the help text.
    Help,
    /// Show the LSW version.
    Version,
    /// Enable LSW system-wide.
    Enable,
    /// Disable LSW system-wide.
    Disable,
    /// Run a Windows executable.
    Run,
    /// Install a Windows MSI package.
    Install,
    /// Use the Windows Package Manager.
    Winget,
    /// Unrecognized command token, preserved as typed.
    Unknown(String),
}

impl MainCommand {
    /// Returns the canonical bare word, or the original token for `Unknown`.
    pub fn name(&self) -> &str {
        match self {
            Self::Help => "help",
            Self::Version => "version",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Run => "run",
            Self::Install => "install",
            Self::Winget => "winget",
            Self::Unknown(token) => token,
        }
    }

    /// Returns `true` for commands a [`CommandHandler`](crate::CommandHandler)
    /// can be registered for.
    ///
    /// `Help` and `Unknown` are always handled by the front end itself.
    pub fn is_dispatchable(&self) -> bool {
        !matches!(self, Self::Help | Self::Unknown(_))
    }
}

impl fmt::Display for MainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-dash flag that changes how a command runs.
///
/// Ordering is the declaration order, which keeps a [`BTreeSet`] of
/// modifiers stable regardless of the order flags were typed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// `-debug`
    Debug,
    /// `-verbose`, `-v`
    Verbose,
    /// `-quiet`, `-q`
    Quiet,
    /// `-silent`
    Silent,
    /// `-trace`
    Trace,
}

impl Modifier {
    /// Returns the canonical flag spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::Debug => "-debug",
            Self::Verbose => "-verbose",
            Self::Quiet => "-quiet",
            Self::Silent => "-silent",
            Self::Trace => "-trace",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured form of one invocation.
///
/// Built once by [`classify`](crate::classify) and not mutated afterwards.
///
/// # Examples
///
/// ```
/// use lsw_core::{MainCommand, Modifier, classify};
///
/// let parsed = classify(["winget", "install", "-silent", "Microsoft.Office"]);
/// assert_eq!(parsed.main_command, MainCommand::Winget);
/// assert_eq!(parsed.subcommand.as_deref(), Some("install"));
/// assert!(parsed.has_modifier(Modifier::Silent));
/// assert_eq!(parsed.positional_args, vec!["Microsoft.Office"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// Action selected by the first token.
    pub main_command: MainCommand,
    /// Second-level operation for multi-level commands.
    pub subcommand: Option<String>,
    /// Modifier flags; duplicates collapse.
    pub modifiers: BTreeSet<Modifier>,
    /// Remaining tokens in the order they were given.
    pub positional_args: Vec<String>,
    /// Whether help was requested, either up front or after the command.
    pub wants_help: bool,
}

impl ParsedCommand {
    /// Creates an empty result for the given command.
    pub fn new(main_command: MainCommand) -> Self {
        Self {
            main_command,
            subcommand: None,
            modifiers: BTreeSet::new(),
            positional_args: Vec::new(),
            wants_help: false,
        }
    }

    /// The result for an empty invocation or a leading help alias.
    pub fn help() -> Self {
        Self {
            wants_help: true,
            ..Self::new(MainCommand::Help)
        }
    }

    /// Returns `true` if `modifier` was given.
    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// Returns `true` if the command token was not recognized.
    pub fn is_unknown(&self) -> bool {
        matches!(self.main_command, MainCommand::Unknown(_))
    }

    /// Serializes to a single-line JSON string for diagnostics.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
