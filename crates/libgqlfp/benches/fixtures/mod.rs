//! Fixture documents and generators shared by the benchmark groups.

pub mod operations;

/// A product-catalog query with variable definitions, directives, aliases,
/// and a fragment, formatted across multiple lines with comments.
pub const PRETTY_QUERY: &str = include_str!("pretty_query.graphql");

/// The same document as [`PRETTY_QUERY`] with every insignificant byte
/// removed. Both produce the same canonical stream.
pub const MINIFIED_QUERY: &str = include_str!("minified_query.graphql");
