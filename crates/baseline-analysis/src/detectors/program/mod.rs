//! Program (JavaScript/TypeScript) detectors and the syntax helpers they share.

pub mod legacy;
pub mod member_call;
pub mod method_access;

pub use legacy::LegacyProgramScanner;
pub use member_call::StaticMemberDetector;
pub use method_access::MethodAccessDetector;

use tree_sitter::Node;

/// Node kinds that open a new function scope.
const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "arrow_function",
    "method_definition",
    "generator_function",
    "generator_function_declaration",
    "class_static_block",
];

/// `(object, property)` of a `member_expression`, if `node` is one.
pub(crate) fn member_parts<'t>(node: Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
    if node.kind() != "member_expression" {
        return None;
    }
    let object = node.child_by_field_name("object")?;
    let property = node.child_by_field_name("property")?;
    Some((object, property))
}

/// Whether the nearest enclosing scope of `node` is the program itself.
pub(crate) fn is_top_level(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if FUNCTION_KINDS.contains(&parent.kind()) {
            return false;
        }
        current = parent.parent();
    }
    true
}
