use crate::Cli;
use crate::CommandResult;
use crate::HashAlgorithm;
use crate::OutputFormat;
use crate::RunnableCommand;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct HashCmd {
    #[arg(
        help="Path to a GraphQL document to fingerprint. Reads stdin when \
             omitted.",
        name="FILE_PATH",
    )]
    file_path: Option<PathBuf>,

    #[arg(
        default_value="sha1",
        help="Digest algorithm for the fingerprint.",
        long,
        value_enum,
    )]
    hash: HashAlgorithm,

    #[arg(
        default_value="hex",
        help="Output encoding for the fingerprint.",
        long,
        value_enum,
    )]
    format: OutputFormat,
}

#[inherent::inherent]
impl RunnableCommand for HashCmd {
    pub fn run(self, _cli: Cli, stdin: &mut dyn Read) -> CommandResult {
        let source = match &self.file_path {
            Some(path) => match std::fs::read(path) {
                Ok(source) => source,
                Err(e) => {
                    return CommandResult::stderr(format_args!(
                        "error reading file \"{}\": {e}",
                        path.display(),
                    ));
                },
            },
            None => {
                log::debug!("No file path given; reading stdin.");
                let mut source = Vec::new();
                if let Err(e) = stdin.read_to_end(&mut source) {
                    return CommandResult::stderr(format_args!(
                        "error reading stdin: {e}",
                    ));
                }
                source
            },
        };
        log::debug!("Read {} bytes of GraphQL source.", source.len());

        if source.is_empty() {
            return CommandResult::stderr(format_args!("no input"));
        }

        let mut hasher = self.hash.new_hasher();
        let mut fingerprint = Vec::with_capacity(hasher.output_len());
        match libgqlfp::fingerprint_into(&mut fingerprint, hasher.as_mut(), &source) {
            Ok(()) => CommandResult::stdout(format_args!(
                "{}",
                self.format.encode(&fingerprint),
            )),
            Err(e) => CommandResult::stderr(format_args!("syntax error: {e}")),
        }
    }
}
