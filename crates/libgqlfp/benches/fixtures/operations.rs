//! Generated documents for scaling benchmarks.

use std::fmt::Write;

/// Builds a query whose selection sets nest `depth` levels below the root.
///
/// Keep `depth` comfortably under the walker's nesting limit of 128.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut document = String::with_capacity(depth * 24 + 64);
    document.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        writeln!(document, "{indent}level{level} {{").unwrap();
    }
    let indent = "  ".repeat(depth + 1);
    writeln!(document, "{indent}id").unwrap();
    writeln!(document, "{indent}name").unwrap();
    for level in (0..=depth).rev() {
        let indent = "  ".repeat(level);
        writeln!(document, "{indent}}}").unwrap();
    }
    document
}

/// Builds a document holding `count` small named operations.
pub fn many_operations(count: usize) -> String {
    let mut document = String::with_capacity(count * 96);
    for i in 0..count {
        writeln!(document, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(document, "  node(id: $id) {{").unwrap();
        writeln!(document, "    description{i}: description").unwrap();
        writeln!(document, "  }}").unwrap();
        writeln!(document, "}}").unwrap();
    }
    document
}
