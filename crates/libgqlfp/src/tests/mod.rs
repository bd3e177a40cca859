//! Test suite for the document walker and the fingerprint entry points.

mod document_record_tests;
mod utils;
