//! Recognized tokens.
//!
//! A [`Vocabulary`] lists the help aliases, main commands and modifier flags
//! the classifier matches against. Matching is exact and case-sensitive.

use serde::{Deserialize, Serialize};

use crate::{MainCommand, Modifier};

/// A main command and how it is spelled on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Command selected by this entry.
    pub command: MainCommand,
    /// Bare word; the `--` form is derived from it.
    pub name: String,
    /// One-line description from the help text.
    pub description: String,
    /// Whether the first non-flag token after the command is a subcommand.
    pub takes_subcommand: bool,
}

impl CommandSpec {
    /// Creates an entry for a single-level command.
    pub fn new(command: MainCommand, name: &str, description: &str) -> Self {
        Self {
            command,
            name: name.to_string(),
            description: description.to_string(),
            takes_subcommand: false,
        }
    }

    /// Marks the command as taking a subcommand slot.
    pub fn with_subcommand(mut self) -> Self {
        self.takes_subcommand = true;
        self
    }

    /// Returns the `--` spelling (e.g. `--run`).
    pub fn long_form(&self) -> String {
        format!("--{}", self.name)
    }
}

/// A modifier and every flag spelling that selects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierSpec {
    /// Modifier selected by this entry.
    pub modifier: Modifier,
    /// Accepted spellings, canonical first (e.g. `-verbose`, `-v`).
    pub aliases: Vec<String>,
    /// One-line description from the help text.
    pub description: String,
}

impl ModifierSpec {
    /// Creates an entry with the given spellings.
    pub fn new(modifier: Modifier, aliases: &[&str], description: &str) -> Self {
        Self {
            modifier,
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// Returns `true` if `token` is one of this modifier's spellings.
    pub fn matches(&self, token: &str) -> bool {
        self.aliases.iter().any(|alias| alias == token)
    }
}

/// The full set of tokens the classifier understands.
///
/// # Examples
///
/// ```
/// use lsw_core::{MainCommand, Modifier, Vocabulary};
///
/// let vocabulary = Vocabulary::lsw();
/// assert!(vocabulary.is_help_alias("-?"));
/// assert_eq!(vocabulary.find_command("--run").map(|c| &c.command), Some(&MainCommand::Run));
/// assert_eq!(vocabulary.find_command("run").map(|c| &c.command), Some(&MainCommand::Run));
/// assert_eq!(vocabulary.find_modifier("-v"), Some(Modifier::Verbose));
/// assert!(vocabulary.takes_subcommand(&MainCommand::Winget));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Tokens that request help when they come first.
    pub help_aliases: Vec<String>,
    /// Main commands.
    pub commands: Vec<CommandSpec>,
    /// Modifier flags.
    pub modifiers: Vec<ModifierSpec>,
}

impl Vocabulary {
    /// The vocabulary documented in the `lsw --help` text.
    pub fn lsw() -> Self {
        Self {
            help_aliases: ["--help", "--h", "-?", "?"]
                .iter()
                .map(|alias| alias.to_string())
                .collect(),
            commands: vec![
                CommandSpec::new(MainCommand::Version, "version", "Show LSW version"),
                CommandSpec::new(MainCommand::Enable, "enable", "Enable LSW system-wide"),
                CommandSpec::new(MainCommand::Disable, "disable", "Disable LSW system-wide"),
                CommandSpec::new(MainCommand::Run, "run", "Run a Windows executable"),
                CommandSpec::new(MainCommand::Install, "install", "Install Windows MSI package"),
                CommandSpec::new(MainCommand::Winget, "winget", "Use Windows Package Manager")
                    .with_subcommand(),
            ],
            modifiers: vec![
                ModifierSpec::new(Modifier::Debug, &["-debug"], "Run with debug output"),
                ModifierSpec::new(Modifier::Verbose, &["-verbose", "-v"], "Verbose logging"),
                ModifierSpec::new(Modifier::Quiet, &["-quiet", "-q"], "Suppress output"),
                ModifierSpec::new(Modifier::Silent, &["-silent"], "Silent operation"),
                ModifierSpec::new(Modifier::Trace, &["-trace"], "Full execution trace"),
            ],
        }
    }

    /// Returns `true` if `token` is a help alias.
    pub fn is_help_alias(&self, token: &str) -> bool {
        self.help_aliases.iter().any(|alias| alias == token)
    }

    /// Finds a command by its bare or `--` spelling.
    ///
    /// Only one leading `--` is stripped, so `----run` does not match.
    pub fn find_command(&self, token: &str) -> Option<&CommandSpec> {
        let name = token.strip_prefix("--").unwrap_or(token);
        self.commands.iter().find(|spec| spec.name == name)
    }

    /// Finds the modifier selected by a flag spelling.
    pub fn find_modifier(&self, token: &str) -> Option<Modifier> {
        self.modifiers
            .iter()
            .find(|spec| spec.matches(token))
            .map(|spec| spec.modifier)
    }

    /// Returns `true` if `command` reserves a subcommand slot.
    pub fn takes_subcommand(&self, command: &MainCommand) -> bool {
        self.commands
            .iter()
            .any(|spec| &spec.command == command && spec.takes_subcommand)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::lsw()
    }
}
