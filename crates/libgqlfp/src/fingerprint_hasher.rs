/// The incremental digest a fingerprinting pass writes into.
///
/// The walker treats the hasher as completely opaque: it calls
/// [`reset`](FingerprintHasher::reset) once at the start of a pass, then
/// [`write`](FingerprintHasher::write) for every framing marker and
/// payload slice in document order, then
/// [`finalize_into`](FingerprintHasher::finalize_into) once at the end.
/// The resulting fingerprint depends only on the concatenation of the
/// written bytes, never on how they were chunked into `write` calls.
///
/// The trait is object safe so an algorithm can be picked at runtime
/// behind `Box<dyn FingerprintHasher>`. For anything implementing
/// [`digest::Digest`], use the [`DigestHasher`](crate::DigestHasher)
/// adapter instead of implementing this by hand.
pub trait FingerprintHasher {
    /// Returns the hasher to its initial state.
    fn reset(&mut self);

    /// Absorbs `bytes` into the running digest. Infallible.
    fn write(&mut self, bytes: &[u8]);

    /// Appends the final digest to `buffer` without clearing it.
    ///
    /// The hasher may be left in an unspecified state afterwards; callers
    /// always [`reset`](FingerprintHasher::reset) before reuse.
    fn finalize_into(&mut self, buffer: &mut Vec<u8>);

    /// Digest length in bytes, for pre-sizing output buffers.
    fn output_len(&self) -> usize;
}
