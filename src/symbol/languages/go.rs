//! Go: plain functions and named struct or interface types.
//!
//! Method declarations sit at file level in Go but belong to a receiver type,
//! so they are left out like methods in other languages.

use tree_sitter::Node;

use super::name_field;

pub fn top_level_defs(root: Node, source: &[u8]) -> Vec<String> {
    let mut defs = Vec::new();
    let mut cursor = root.walk();

    for node in root.children(&mut cursor) {
        match node.kind() {
            "function_declaration" => defs.extend(name_field(&node, source)),
            "type_declaration" => {
                let mut spec_cursor = node.walk();
                for spec in node.named_children(&mut spec_cursor) {
                    if spec.kind() == "type_spec" && is_class_like(&spec) {
                        defs.extend(name_field(&spec, source));
                    }
                }
            }
            _ => {}
        }
    }

    defs
}

fn is_class_like(spec: &Node) -> bool {
    spec.child_by_field_name("type")
        .map(|ty| matches!(ty.kind(), "struct_type" | "interface_type"))
        .unwrap_or(false)
}
