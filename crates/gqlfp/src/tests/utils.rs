//! Shared helpers for CLI tests.

use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use std::io::Cursor;
use std::path::PathBuf;

/// Parses `args` and runs the resulting subcommand with `stdin_bytes`
/// standing in for the process's stdin.
pub(super) fn run(args: &[&str], stdin_bytes: &[u8]) -> CommandResult {
    let mut cli = Cli::try_parse_from(args).expect("arguments should parse");
    let command = cli.cmd.take().expect("a subcommand should be given");
    let mut stdin = Cursor::new(stdin_bytes.to_vec());
    command.run(cli, &mut stdin)
}

/// Writes `contents` to a fresh file under the system temp directory
/// and returns its path. The name is keyed on the process id so
/// concurrent test runs do not collide.
pub(super) fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "gqlfp-test-{}-{name}",
        std::process::id(),
    ));
    std::fs::write(&path, contents).expect("temp file should be writable");
    path
}
