//! Argument classification for the LSW command line.
//!
//! This crate turns the raw arguments of an `lsw` invocation into a
//! structured [`ParsedCommand`] and defines the seam through which command
//! implementations are plugged in:
//!
//! - [`classify`] / [`classify_with`] — total, pure classification of an
//!   argument vector into main command, subcommand, modifiers and positional
//!   arguments.
//! - [`Vocabulary`] — the help aliases, main commands and modifier flags the
//!   classifier recognizes, with [`validate_vocabulary`] for structural checks.
//! - [`CommandHandler`] and [`HandlerRegistry`] — the per-command execution
//!   capability and the lookup the front end dispatches through.
//!
//! # Example
//!
//! ```
//! use lsw_core::*;
//!
//! let parsed = classify(["winget", "upgrade", "--all"]);
//! assert_eq!(parsed.main_command, MainCommand::Winget);
//! assert_eq!(parsed.subcommand.as_deref(), Some("upgrade"));
//! assert_eq!(parsed.positional_args, vec!["--all"]);
//! assert!(parsed.modifiers.is_empty());
//!
//! let unknown = classify(["foobar"]);
//! assert_eq!(unknown.main_command, MainCommand::Unknown("foobar".into()));
//! assert!(!unknown.wants_help);
//! ```

mod classify;
mod handler;
mod types;
mod validate;
mod vocabulary;

pub use classify::{classify, classify_with};
pub use handler::{CommandHandler, ExitStatus, HandlerRegistry, RegistryError};
pub use types::*;
pub use validate::{VocabularyError, validate_vocabulary};
pub use vocabulary::{CommandSpec, ModifierSpec, Vocabulary};
