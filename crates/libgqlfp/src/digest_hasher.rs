use crate::FingerprintHasher;
use digest::Digest;
use inherent::inherent;

/// Adapter presenting any [`digest::Digest`] implementation as a
/// [`FingerprintHasher`].
///
/// ```rust
/// use libgqlfp::DigestHasher;
/// use sha1::Sha1;
///
/// let mut hasher = DigestHasher::<Sha1>::new();
/// let mut fingerprint = Vec::new();
/// libgqlfp::fingerprint_into(&mut fingerprint, &mut hasher, b"{ foo }").unwrap();
/// assert_eq!(fingerprint.len(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct DigestHasher<D: Digest> {
    digest: D,
}

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self {
        Self { digest: D::new() }
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[inherent]
impl<D: Digest> FingerprintHasher for DigestHasher<D> {
    pub fn reset(&mut self) {
        // Rebuilding is equivalent to an in-place reset and keeps the
        // bound at plain `Digest`.
        self.digest = D::new();
    }

    pub fn write(&mut self, bytes: &[u8]) {
        self.digest.update(bytes);
    }

    pub fn finalize_into(&mut self, buffer: &mut Vec<u8>) {
        let digest = std::mem::replace(&mut self.digest, D::new());
        buffer.extend_from_slice(&digest.finalize());
    }

    pub fn output_len(&self) -> usize {
        <D as Digest>::output_size()
    }
}
