use tree_sitter::Node;

use super::name_field;

const DEFINITION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
];

pub fn top_level_defs(root: Node, source: &[u8]) -> Vec<String> {
    let mut cursor = root.walk();
    let defs = root
        .children(&mut cursor)
        .filter(|node| DEFINITION_KINDS.contains(&node.kind()))
        .filter_map(|node| name_field(&node, source))
        .collect();
    defs
}
