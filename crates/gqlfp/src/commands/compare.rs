use crate::Cli;
use crate::CommandResult;
use crate::HashAlgorithm;
use crate::RunnableCommand;
use libgqlfp::Comparison;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CompareCmd {
    #[arg(
        help="Path to the first GraphQL document.",
        name="FIRST_FILE",
    )]
    first_file: PathBuf,

    #[arg(
        help="Path to the second GraphQL document.",
        name="SECOND_FILE",
    )]
    second_file: PathBuf,

    #[arg(
        default_value="sha1",
        help="Digest algorithm for the fingerprints.",
        long,
        value_enum,
    )]
    hash: HashAlgorithm,
}

#[inherent::inherent]
impl RunnableCommand for CompareCmd {
    pub fn run(self, _cli: Cli, _stdin: &mut dyn Read) -> CommandResult {
        let first = match read_source(&self.first_file) {
            Ok(source) => source,
            Err(result) => return result,
        };
        let second = match read_source(&self.second_file) {
            Ok(source) => source,
            Err(result) => return result,
        };
        log::debug!(
            "Comparing {} bytes against {} bytes.",
            first.len(),
            second.len(),
        );

        let mut hasher = self.hash.new_hasher();
        match libgqlfp::compare(hasher.as_mut(), &first, &second) {
            Ok(Comparison::Equal) => CommandResult::success(),
            Ok(Comparison::Differ) => {
                CommandResult::stderr(format_args!("queries differ"))
            },
            Err(e) => CommandResult::stderr(format_args!("syntax error: {e}")),
        }
    }
}

fn read_source(path: &Path) -> Result<Vec<u8>, CommandResult> {
    std::fs::read(path).map_err(|e| {
        CommandResult::stderr(format_args!(
            "error reading file \"{}\": {e}",
            path.display(),
        ))
    })
}
