//! Command handler seam.
//!
//! A [`CommandHandler`] carries out one main command. Handlers live outside
//! this crate; the front end looks them up in a [`HandlerRegistry`] keyed by
//! [`MainCommand`] and falls back to its own notice when none is registered.

use std::collections::HashMap;
use std::process::ExitCode;

use thiserror::Error;

use crate::{MainCommand, ParsedCommand};

/// Process exit status returned by a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(pub i32);

impl ExitStatus {
    /// Exit code 0.
    pub const SUCCESS: Self = Self(0);
    /// Exit code 1.
    pub const FAILURE: Self = Self(1);

    /// Returns `true` for exit code 0.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        // Out-of-range codes report as a generic failure.
        match u8::try_from(status.0) {
            Ok(code) => ExitCode::from(code),
            Err(_) => ExitCode::FAILURE,
        }
    }
}

/// Executes one main command.
pub trait CommandHandler: Send + Sync {
    /// Runs the command described by `command`.
    fn execute(&self, command: &ParsedCommand) -> ExitStatus;
}

impl<F> CommandHandler for F
where
    F: Fn(&ParsedCommand) -> ExitStatus + Send + Sync,
{
    fn execute(&self, command: &ParsedCommand) -> ExitStatus {
        self(command)
    }
}

/// Handler registration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `Help` and `Unknown` are handled by the front end and cannot be registered.
    #[error("command cannot have a handler: {0}")]
    ReservedCommand(String),
}

/// Lookup from main command to handler.
///
/// # Examples
///
/// ```
/// use lsw_core::*;
///
/// let mut registry = HandlerRegistry::new();
/// registry
///     .register(MainCommand::Version, Box::new(|_: &ParsedCommand| ExitStatus::SUCCESS))
///     .unwrap();
///
/// let parsed = classify(["--version"]);
/// let handler = registry.get(&parsed.main_command).unwrap();
/// assert!(handler.execute(&parsed).is_success());
///
/// assert!(registry.register(MainCommand::Help, Box::new(|_: &ParsedCommand| ExitStatus::SUCCESS)).is_err());
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<MainCommand, Box<dyn CommandHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `command`, returning the handler it replaces.
    pub fn register(
        &mut self,
        command: MainCommand,
        handler: Box<dyn CommandHandler>,
    ) -> Result<Option<Box<dyn CommandHandler>>, RegistryError> {
        if !command.is_dispatchable() {
            return Err(RegistryError::ReservedCommand(command.name().to_string()));
        }
        Ok(self.handlers.insert(command, handler))
    }

    /// Returns the handler for `command`, if any.
    pub fn get(&self, command: &MainCommand) -> Option<&dyn CommandHandler> {
        self.handlers.get(command).map(|handler| &**handler)
    }

    /// Returns `true` if a handler is registered for `command`.
    pub fn is_registered(&self, command: &MainCommand) -> bool {
        self.handlers.contains_key(command)
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut commands: Vec<&str> = self.handlers.keys().map(MainCommand::name).collect();
        commands.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("commands", &commands)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::classify;

    struct Counting {
        calls: Arc<AtomicUsize>,
        status: ExitStatus,
    }

    impl CommandHandler for Counting {
        fn execute(&self, _command: &ParsedCommand) -> ExitStatus {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.status
        }
    }

    #[test]
    fn test_register_and_execute() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = HandlerRegistry::new();
        let previous = registry
            .register(
                MainCommand::Run,
                Box::new(Counting {
                    calls: Arc::clone(&calls),
                    status: ExitStatus(3),
                }),
            )
            .unwrap();
        assert!(previous.is_none());

        let parsed = classify(["run", "app.exe"]);
        let status = registry.get(&parsed.main_command).unwrap().execute(&parsed);
        assert_eq!(status, ExitStatus(3));
        assert!(!status.is_success());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_replaces_previous_handler() {
        let mut registry = HandlerRegistry::new();
        registry
            .register(MainCommand::Install, Box::new(|_: &ParsedCommand| ExitStatus::SUCCESS))
            .unwrap();
        let previous = registry
            .register(MainCommand::Install, Box::new(|_: &ParsedCommand| ExitStatus::FAILURE))
            .unwrap();

        assert!(previous.is_some());
        assert!(registry.is_registered(&MainCommand::Install));
        let parsed = classify(["install", "app.msi"]);
        assert_eq!(
            registry.get(&MainCommand::Install).unwrap().execute(&parsed),
            ExitStatus::FAILURE
        );
    }

    #[test]
    fn test_register_rejects_reserved_commands() {
        let mut registry = HandlerRegistry::new();
        let err = registry
            .register(
                MainCommand::Unknown("foobar".to_string()),
                Box::new(|_: &ParsedCommand| ExitStatus::SUCCESS),
            )
            .err();
        assert_eq!(
            err,
            Some(RegistryError::ReservedCommand("foobar".to_string()))
        );
        assert!(!registry.is_registered(&MainCommand::Unknown("foobar".to_string())));
        assert_eq!(format!("{registry:?}"), "HandlerRegistry { commands: [] }");
    }

    #[test]
    fn test_closure_handler_sees_parsed_command() {
        let mut registry = HandlerRegistry::new();
        registry
            .register(
                MainCommand::Winget,
                Box::new(|command: &ParsedCommand| {
                    if command.subcommand.as_deref() == Some("upgrade") {
                        ExitStatus::SUCCESS
                    } else {
                        ExitStatus::FAILURE
                    }
                }),
            )
            .unwrap();

        let handler = registry.get(&MainCommand::Winget).unwrap();
        assert!(handler.execute(&classify(["winget", "upgrade", "--all"])).is_success());
        assert!(!handler.execute(&classify(["winget", "search", "chrome"])).is_success());
        assert!(!registry.is_registered(&MainCommand::Run));
    }
}
