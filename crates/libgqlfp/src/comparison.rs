/// Outcome of comparing two documents' fingerprints.
///
/// A comparison only produces a value when both documents fingerprinted
/// successfully; a syntax error in either one surfaces as a
/// [`FingerprintError`](crate::FingerprintError) instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Comparison {
    /// Both documents canonicalize to the same digest.
    Equal,
    /// Both documents are well formed but structurally different.
    Differ,
}
