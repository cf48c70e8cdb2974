//! JavaScript and TypeScript (including TSX).
//!
//! Function, generator and class declarations at program level, plus the same
//! declarations wrapped in an `export` statement. Arrow functions bound to
//! variables are not definitions here.

use tree_sitter::Node;

use super::name_field;

pub fn top_level_defs(root: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = root.walk();
    let defs = root
        .children(&mut cursor)
        .filter_map(|node| definition_name(&node, source))
        .collect();
    defs
}

fn definition_name(node: &Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "function_declaration"
        | "generator_function_declaration"
        | "class_declaration"
        | "abstract_class_declaration" => name_field(node, source),
        "export_statement" => node
            .child_by_field_name("declaration")
            .and_then(|declaration| definition_name(&declaration, source)),
        _ => None,
    }
}
