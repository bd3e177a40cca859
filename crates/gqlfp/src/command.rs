use crate::Cli;
use crate::CommandResult;
use std::io::Read;

/// A subcommand, run to completion after argument parsing.
///
/// Commands never touch the process's real stdin directly; it is handed
/// in so tests can substitute an in-memory reader.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    fn run(self, cli: Cli, stdin: &mut dyn Read) -> CommandResult;
}
