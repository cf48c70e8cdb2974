//! Per-language rules for which root children count as definitions.

pub mod c;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

use tree_sitter::Node;

/// Text covered by a node, or "" if it is not valid UTF-8.
pub(crate) fn node_text<'a>(node: &Node, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.start_byte()..node.end_byte()]).unwrap_or("")
}

/// Text of the node's `name` field.
pub(crate) fn name_field(node: &Node, source: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
pub(crate) fn parse(language: crate::symbol::SourceLanguage, source: &str) -> tree_sitter::Tree {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language.grammar().expect("language has a grammar"))
        .expect("Failed to set language");
    parser.parse(source, None).expect("Failed to parse")
}
