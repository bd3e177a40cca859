mod compare;
mod hash;

use crate::Cli;
use crate::CommandResult;
use compare::CompareCmd;
use hash::HashCmd;
use std::io::Read;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlfp")]
pub(crate) enum CommandEnum {
    Hash(Box<HashCmd>),
    Compare(Box<CompareCmd>),
}
impl CommandEnum {
    pub(crate) fn run(self, cli: Cli, stdin: &mut dyn Read) -> CommandResult {
        match self {
            Self::Hash(cmd) => cmd.run(cli, stdin),
            Self::Compare(cmd) => cmd.run(cli, stdin),
        }
    }
}
