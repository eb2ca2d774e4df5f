//! Tree-sitter Utility Functions
//!
//! Common helpers for working with tree-sitter nodes in the C++ adapter.

use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.kind() == kind {
                return Some(child);
            }
        }
    }
    None
}

/// Collect all named children in order
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .collect()
}

/// Collect every child stored under `field` (a node may carry several declarators)
pub fn children_by_field<'a>(node: &Node<'a>, field: &str) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    let children = node.children_by_field_name(field, &mut cursor).collect();
    children
}

// ═══════════════════════════════════════════════════════════════════════════
// Text and Position Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Get node text from source
#[inline]
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Node text with every run of whitespace collapsed to one space
pub fn normalized_text(node: &Node, source: &str) -> String {
    node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 1-based start line of a node
#[inline]
pub fn start_line(node: &Node) -> u32 {
    node.start_position().row as u32 + 1
}

/// Count ERROR / MISSING nodes below `node`
pub fn count_errors(node: &Node) -> usize {
    if !node.has_error() {
        return 0;
    }
    let own = usize::from(node.is_error() || node.is_missing());
    own + (0..node.child_count())
        .filter_map(|i| node.child(i))
        .map(|c| count_errors(&c))
        .sum::<usize>()
}
