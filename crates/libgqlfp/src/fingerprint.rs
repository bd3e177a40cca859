//! Top-level fingerprinting and comparison entry points.

use crate::Comparison;
use crate::FingerprintError;
use crate::FingerprintHasher;
use crate::read_document;

/// Fingerprints one executable document, appending the digest to `buffer`.
///
/// The hasher is reset first, so any prior state is discarded; `buffer` is
/// not cleared, so successive fingerprints can be packed into one
/// allocation. The whole input must parse: an input that is empty after
/// skipping insignificant bytes, or that carries trailing bytes which do
/// not begin another definition, is an error, and nothing is appended.
///
/// ```rust
/// use libgqlfp::DigestHasher;
/// use sha1::Sha1;
///
/// let mut hasher = DigestHasher::<Sha1>::new();
/// let mut spaced = Vec::new();
/// let mut minified = Vec::new();
/// libgqlfp::fingerprint_into(&mut spaced, &mut hasher, b"{ user { name } }").unwrap();
/// libgqlfp::fingerprint_into(&mut minified, &mut hasher, b"{user{name}}").unwrap();
/// assert_eq!(spaced, minified);
/// ```
pub fn fingerprint_into<H>(
    buffer: &mut Vec<u8>,
    hasher: &mut H,
    input: &[u8],
) -> Result<(), FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    hasher.reset();
    read_document(hasher, input)?;
    hasher.finalize_into(buffer);
    Ok(())
}

/// Compares two documents by fingerprint using a scratch buffer sized
/// from the hasher's output length.
///
/// A syntax error in either document is returned as the error; it is
/// never reported as [`Comparison::Differ`].
pub fn compare<H>(hasher: &mut H, a: &[u8], b: &[u8]) -> Result<Comparison, FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    let mut buffer = Vec::with_capacity(hasher.output_len() * 2);
    compare_with_buffer(&mut buffer, hasher, a, b)
}

/// Like [`compare`], but fingerprints into a caller-owned buffer so
/// repeated comparisons can reuse one allocation. The buffer is cleared
/// first.
pub fn compare_with_buffer<H>(
    buffer: &mut Vec<u8>,
    hasher: &mut H,
    a: &[u8],
    b: &[u8],
) -> Result<Comparison, FingerprintError>
where
    H: FingerprintHasher + ?Sized,
{
    buffer.clear();
    fingerprint_into(buffer, hasher, a)?;
    let split = buffer.len();
    fingerprint_into(buffer, hasher, b)?;
    if buffer[..split] == buffer[split..] {
        Ok(Comparison::Equal)
    } else {
        Ok(Comparison::Differ)
    }
}
