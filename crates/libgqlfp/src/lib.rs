//! Structural fingerprinting for GraphQL executable documents.
//!
//! Two documents that differ only in formatting (whitespace, commas,
//! comments, indentation, block-string indentation) produce the same
//! fingerprint; documents that differ structurally or in literal content
//! produce different ones. The fingerprint is computed in a single pass
//! over the raw bytes with no syntax tree and no intermediate
//! allocation: the walker streams framing markers and payload slices
//! into a caller-supplied digest as it descends.
//!
//! The digest itself is opaque to the walker. Anything implementing
//! [`FingerprintHasher`] works; [`DigestHasher`] adapts the RustCrypto
//! hash crates.
//!
//! ```rust
//! use libgqlfp::{Comparison, DigestHasher, compare};
//! use sha2::Sha256;
//!
//! let mut hasher = DigestHasher::<Sha256>::new();
//! let a = b"query Hero { hero { name } }";
//! let b = b"query Hero{hero{name}}";
//! assert_eq!(compare(&mut hasher, a, b).unwrap(), Comparison::Equal);
//! ```

mod block_string;
mod byte_classes;
mod comparison;
mod digest_hasher;
mod document_walker;
mod fingerprint;
mod fingerprint_error;
mod fingerprint_error_kind;
mod fingerprint_hasher;
mod framing_marker;
mod value_kind;

pub use comparison::Comparison;
pub use digest_hasher::DigestHasher;
pub use document_walker::MAX_NESTING_DEPTH;
pub use document_walker::read_document;
pub use document_walker::read_name;
pub use document_walker::read_selection_set;
pub use document_walker::read_type;
pub use document_walker::read_value;
pub use document_walker::skip_insignificant;
pub use fingerprint::compare;
pub use fingerprint::compare_with_buffer;
pub use fingerprint::fingerprint_into;
pub use fingerprint_error::FingerprintError;
pub use fingerprint_error_kind::FingerprintErrorKind;
pub use fingerprint_hasher::FingerprintHasher;
pub use framing_marker::FramingMarker;
pub use value_kind::ValueKind;

#[cfg(test)]
mod tests;
