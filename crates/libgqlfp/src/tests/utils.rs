//! Shared helpers for the fingerprint test suite.

use crate::FingerprintError;
use crate::FingerprintHasher;
use crate::FramingMarker;

/// A hasher double that keeps every `write` as its own record so tests can
/// assert on the exact sequence of framing markers and payloads a read
/// produced.
///
/// `finalize_into` appends the concatenation of all records, which makes
/// the "digest" the canonical byte stream itself.
#[derive(Debug, Default)]
pub(super) struct RecordingHasher {
    pub(super) records: Vec<Vec<u8>>,
}

impl RecordingHasher {
    pub(super) fn new() -> Self {
        Self::default()
    }
}

impl FingerprintHasher for RecordingHasher {
    fn reset(&mut self) {
        self.records.clear();
    }

    fn write(&mut self, bytes: &[u8]) {
        self.records.push(bytes.to_vec());
    }

    fn finalize_into(&mut self, fingerprint: &mut Vec<u8>) {
        for record in &self.records {
            fingerprint.extend_from_slice(record);
        }
    }

    fn output_len(&self) -> usize {
        0
    }
}

// ===========================================================================
// Record shorthands
// ===========================================================================

/// The one-byte record a framing marker produces.
pub(super) fn marker(marker: FramingMarker) -> Vec<u8> {
    vec![marker.as_byte()]
}

/// A literal payload record.
pub(super) fn payload(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

// ===========================================================================
// Read helpers
// ===========================================================================

/// Reads a whole document and returns the recorded write sequence,
/// panicking on error or leftover input.
pub(super) fn document_records(source: &str) -> Vec<Vec<u8>> {
    let mut hasher = RecordingHasher::new();
    let remainder = crate::read_document(&mut hasher, source.as_bytes())
        .unwrap_or_else(|err| panic!("document {source:?} failed: {err}"));
    assert!(
        remainder.is_empty(),
        "document {source:?} left {remainder:?} behind",
    );
    hasher.records
}

/// Asserts that every source produces exactly `expected` as its write
/// sequence.
pub(super) fn assert_same_records(sources: &[&str], expected: &[Vec<u8>]) {
    for source in sources {
        assert_eq!(
            document_records(source),
            expected,
            "unexpected records for {source:?}",
        );
    }
}

/// Reads a whole document expecting failure and returns the error.
pub(super) fn document_error(source: &str) -> FingerprintError {
    let mut hasher = RecordingHasher::new();
    match crate::read_document(&mut hasher, source.as_bytes()) {
        Ok(_) => panic!("document {source:?} unexpectedly parsed"),
        Err(err) => err,
    }
}

/// Reads one value expecting failure and returns the error.
pub(super) fn value_error(source: &str) -> FingerprintError {
    let mut hasher = RecordingHasher::new();
    match crate::read_value(&mut hasher, source.as_bytes()) {
        Ok(_) => panic!("value {source:?} unexpectedly parsed"),
        Err(err) => err,
    }
}
