//! Static help text.

/// Full `lsw --help` output, printed verbatim.
pub const HELP_TEXT: &str = include_str!("help.txt");

/// Printed for every command that has no implementation yet.
pub const NOT_IMPLEMENTED: &str = "LSW: Command not yet implemented\nRun 'lsw --help' for usage\n";
