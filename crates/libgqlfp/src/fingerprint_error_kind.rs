/// The category of a [`FingerprintError`](crate::FingerprintError).
///
/// Fingerprinting has exactly two failure modes and both are terminal:
/// the walker performs no recovery and produces no partial digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FingerprintErrorKind {
    /// The input ended while a construct was still incomplete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A byte was present but matched no legal continuation of the
    /// grammar at that position.
    #[error("unexpected token")]
    UnexpectedToken,
}
