//! Python: `def`, `async def` and `class` at module level, decorated or not.

use tree_sitter::Node;

use super::name_field;

pub fn top_level_defs(root: Node, source: &[u8]) -> Vec<String> {
    let mut defs = Vec::new();
    let mut cursor = root.walk();

    for node in root.children(&mut cursor) {
        let definition = match node.kind() {
            "function_definition" | "class_definition" => Some(node),
            "decorated_definition" => node.child_by_field_name("definition"),
            _ => None,
        };

        if let Some(name) = definition.and_then(|d| name_field(&d, source)) {
            defs.push(name);
        }
    }

    defs
}
