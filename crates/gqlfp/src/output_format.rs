use base64::Engine as _;

/// Encoding applied to the raw digest bytes before printing.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Lowercase hexadecimal.
    Hex,
    /// Standard base64 with padding.
    Base64,
}

impl OutputFormat {
    pub(crate) fn encode(self, fingerprint: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(fingerprint),
            Self::Base64 => base64::engine::general_purpose::STANDARD.encode(fingerprint),
        }
    }
}
