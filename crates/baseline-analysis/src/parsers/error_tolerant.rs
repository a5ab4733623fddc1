//! Syntax error accounting for trees with ERROR or MISSING nodes.

use tree_sitter::Node;

/// Count ERROR and MISSING nodes, returning the count and their 1-based lines.
pub fn count_errors(root: Node) -> (u32, Vec<u32>) {
    let mut count = 0u32;
    let mut lines = Vec::new();
    if root.has_error() {
        collect_errors(root, &mut count, &mut lines);
    }
    (count, lines)
}

fn collect_errors(node: Node, count: &mut u32, lines: &mut Vec<u32>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        lines.push(node.start_position().row as u32 + 1);
    }
    let child_count = node.child_count();
    for i in 0..child_count {
        if let Some(child) = node.child(i) {
            if child.has_error() || child.is_missing() {
                collect_errors(child, count, lines);
            }
        }
    }
}
