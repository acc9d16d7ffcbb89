//! Argument classification.
//!
//! Turns a raw argument vector into a [`ParsedCommand`]. The grammar is
//! `lsw <command> [subcommand] [-modifier...] [args...]`, where modifiers and
//! positional arguments may be interleaved freely after the command and only
//! commands that take a subcommand reserve the first non-flag slot.
//!
//! Classification is total: every input, including an empty one, produces a
//! value. Tokens that match nothing are kept rather than rejected.

use tracing::trace;

use crate::{MainCommand, ParsedCommand, Vocabulary};

/// Token that requests help when it follows a command.
const HELP_FLAG: &str = "--help";

/// Classifies `args` (excluding the program name) with the built-in vocabulary.
///
/// # Examples
///
/// ```
/// use lsw_core::{MainCommand, Modifier, classify};
///
/// let parsed = classify(["run", "-verbose", "myapp.exe"]);
/// assert_eq!(parsed.main_command, MainCommand::Run);
/// assert!(parsed.has_modifier(Modifier::Verbose));
/// assert_eq!(parsed.positional_args, vec!["myapp.exe"]);
///
/// let empty: [&str; 0] = [];
/// assert!(classify(empty).wants_help);
/// ```
pub fn classify<I, S>(args: I) -> ParsedCommand
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classify_with(&Vocabulary::lsw(), args)
}

/// Classifies `args` against an explicit vocabulary.
pub fn classify_with<I, S>(vocabulary: &Vocabulary, args: I) -> ParsedCommand
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tokens = args.into_iter();

    let Some(first) = tokens.next() else {
        trace!("no arguments, showing help");
        return ParsedCommand::help();
    };
    let first = first.as_ref();
    if vocabulary.is_help_alias(first) {
        trace!(token = first, "leading help alias");
        return ParsedCommand::help();
    }

    let main_command = match vocabulary.find_command(first) {
        Some(spec) => spec.command.clone(),
        None => MainCommand::Unknown(first.to_string()),
    };
    trace!(token = first, command = %main_command, "command token");

    let takes_subcommand = vocabulary.takes_subcommand(&main_command);
    let mut parsed = ParsedCommand::new(main_command);

    for token in tokens {
        let token = token.as_ref();

        if token == HELP_FLAG {
            trace!("help requested after command");
            parsed.wants_help = true;
            continue;
        }

        if token.starts_with('-') {
            match vocabulary.find_modifier(token) {
                Some(modifier) => {
                    trace!(token, %modifier, "modifier");
                    parsed.modifiers.insert(modifier);
                }
                None => {
                    trace!(token, "unrecognized flag kept as argument");
                    parsed.positional_args.push(token.to_string());
                }
            }
            continue;
        }

        if takes_subcommand && parsed.subcommand.is_none() {
            trace!(token, "subcommand");
            parsed.subcommand = Some(token.to_string());
            continue;
        }

        trace!(token, "positional argument");
        parsed.positional_args.push(token.to_string());
    }

    parsed
}
