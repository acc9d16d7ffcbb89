//! Vocabulary validation.
//!
//! Catches structural mistakes in a [`Vocabulary`] before they turn into
//! surprising classifications, such as a modifier alias that looks like a
//! command or a token claimed by two entries.
//!
//! # Examples
//!
//! ```
//! use lsw_core::*;
//!
//! assert!(validate_vocabulary(&Vocabulary::lsw()).is_empty());
//!
//! // Invalid: modifier alias without the leading dash
//! let mut bad = Vocabulary::lsw();
//! bad.modifiers.push(ModifierSpec::new(Modifier::Trace, &["trace"], "Trace"));
//! assert!(!validate_vocabulary(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CommandSpec, ModifierSpec, Vocabulary};

/// Vocabulary validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// No help aliases are defined.
    #[error("vocabulary must define at least one help alias")]
    EmptyHelpAliases,
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Command name starts with a dash (the `--` form is derived).
    #[error("invalid command name: {0}")]
    InvalidCommandName(String),
    /// Two commands share a name.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
    /// A modifier has no spellings.
    #[error("modifier has no aliases: {0}")]
    MissingModifierAlias(String),
    /// Modifier alias is not a single-dash flag (e.g. `"v"` or `"--verbose"`).
    #[error("invalid modifier alias: {0}")]
    InvalidModifierAlias(String),
    /// Two modifiers share a spelling.
    #[error("duplicate modifier alias: {0}")]
    DuplicateModifierAlias(String),
    /// A help alias is also a command or modifier spelling.
    #[error("token is both a help alias and a command or modifier: {0}")]
    AmbiguousToken(String),
}

/// Validates a vocabulary, stopping at the first problem found.
///
/// # Examples
///
/// ```
/// use lsw_core::*;
///
/// let mut vocabulary = Vocabulary::lsw();
/// vocabulary
///     .commands
///     .push(CommandSpec::new(MainCommand::Run, "run", "Run again"));
/// assert_eq!(
///     validate_vocabulary(&vocabulary),
///     vec![VocabularyError::DuplicateCommand("run".to_string())]
/// );
/// ```
pub fn validate_vocabulary(vocabulary: &Vocabulary) -> Vec<VocabularyError> {
    let mut errors = Vec::new();

    if vocabulary.help_aliases.is_empty() {
        errors.push(VocabularyError::EmptyHelpAliases);
        return errors;
    }

    errors.extend(validate_commands(&vocabulary.commands));
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_modifiers(&vocabulary.modifiers));
    if !errors.is_empty() {
        return errors;
    }

    for alias in &vocabulary.help_aliases {
        let claimed = vocabulary.find_command(alias).is_some()
            || vocabulary.find_modifier(alias).is_some();
        if claimed {
            errors.push(VocabularyError::AmbiguousToken(alias.clone()));
            return errors;
        }
    }

    errors
}

fn validate_commands(commands: &[CommandSpec]) -> Vec<VocabularyError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for spec in commands {
        let name = spec.name.as_str();
        if name.trim().is_empty() {
            errors.push(VocabularyError::EmptyCommandName);
            return errors;
        }
        if name.starts_with('-') {
            errors.push(VocabularyError::InvalidCommandName(name.to_string()));
            return errors;
        }
        if !seen.insert(name) {
            errors.push(VocabularyError::DuplicateCommand(name.to_string()));
            return errors;
        }
    }

    errors
}

fn validate_modifiers(modifiers: &[ModifierSpec]) -> Vec<VocabularyError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for spec in modifiers {
        if spec.aliases.is_empty() {
            errors.push(VocabularyError::MissingModifierAlias(
                spec.modifier.name().to_string(),
            ));
            return errors;
        }

        for alias in &spec.aliases {
            if !alias.starts_with('-') || alias.starts_with("--") || alias.len() < 2 {
                errors.push(VocabularyError::InvalidModifierAlias(alias.clone()));
                return errors;
            }
            if !seen.insert(alias.as_str()) {
                errors.push(VocabularyError::DuplicateModifierAlias(alias.clone()));
                return errors;
            }
        }
    }

    errors
}
