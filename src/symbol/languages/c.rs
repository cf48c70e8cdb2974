//! C and C++.
//!
//! Both report function definitions. C++ additionally reports classes and
//! structs that have a body, whether written as a bare specifier, as the type
//! of a declaration, or under a `template` prefix. A definition whose name is
//! qualified (`Widget::draw`, `ns::helper`) belongs to another scope and is
//! not reported.

use tree_sitter::Node;

use super::{name_field, node_text};

pub fn top_level_defs(root: Node, source: &[u8], cpp: bool) -> Vec<String> {
    let mut defs = Vec::new();
    let mut cursor = root.walk();

    for node in root.children(&mut cursor) {
        collect(&node, source, cpp, &mut defs);
    }

    defs
}

fn collect(node: &Node, source: &[u8], cpp: bool, defs: &mut Vec<String>) {
    match node.kind() {
        "function_definition" => {
            defs.extend(
                node.child_by_field_name("declarator")
                    .and_then(|d| declarator_name(&d, source)),
            );
        }
        "class_specifier" | "struct_specifier" if cpp => {
            defs.extend(class_name(node, source));
        }
        "declaration" if cpp => {
            defs.extend(
                node.child_by_field_name("type")
                    .and_then(|ty| class_name(&ty, source)),
            );
        }
        "template_declaration" if cpp => {
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                if child.kind() != "template_declaration" {
                    collect(&child, source, cpp, defs);
                }
            }
        }
        _ => {}
    }
}

/// Name of a class or struct specifier, skipping forward declarations.
fn class_name(node: &Node, source: &[u8]) -> Option<String> {
    if !matches!(node.kind(), "class_specifier" | "struct_specifier") {
        return None;
    }
    node.child_by_field_name("body")?;
    name_field(node, source)
}

/// Walk nested declarators (pointer, reference, function) down to the name.
fn declarator_name(node: &Node, source: &[u8]) -> Option<String> {
    match node.kind() {
        "qualified_identifier" => None,
        "identifier" | "field_identifier" | "operator_name" | "destructor_name" => {
            Some(node_text(node, source).to_string())
        }
        _ => {
            if let Some(inner) = node.child_by_field_name("declarator") {
                return declarator_name(&inner, source);
            }
            // reference_declarator has no field name on its inner declarator
            let mut cursor = node.walk();
            let name = node
                .named_children(&mut cursor)
                .find_map(|child| declarator_name(&child, source));
            name
        }
    }
}
