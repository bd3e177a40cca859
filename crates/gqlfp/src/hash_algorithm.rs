use libgqlfp::DigestHasher;
use libgqlfp::FingerprintHasher;

/// Blake2b parameterized to a 32-byte digest. The `blake2` crate only
/// aliases the 512-bit variant.
type Blake2b256 = blake2::Blake2b<blake2::digest::consts::U32>;

/// Digest algorithm selected with `--hash`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum HashAlgorithm {
    /// 160-bit SHA-1.
    Sha1,
    /// SHA-256 from the SHA-2 family.
    Sha2,
    /// 512-bit SHA-3.
    Sha3,
    /// 128-bit MD5.
    Md5,
    /// 256-bit Blake2b.
    Blake2b,
    /// 256-bit Blake2s.
    Blake2s,
}

impl HashAlgorithm {
    pub(crate) fn new_hasher(self) -> Box<dyn FingerprintHasher> {
        match self {
            Self::Sha1 => Box::new(DigestHasher::<sha1::Sha1>::new()),
            Self::Sha2 => Box::new(DigestHasher::<sha2::Sha256>::new()),
            Self::Sha3 => Box::new(DigestHasher::<sha3::Sha3_512>::new()),
            Self::Md5 => Box::new(DigestHasher::<md5::Md5>::new()),
            Self::Blake2b => Box::new(DigestHasher::<Blake2b256>::new()),
            Self::Blake2s => Box::new(DigestHasher::<blake2::Blake2s256>::new()),
        }
    }
}
