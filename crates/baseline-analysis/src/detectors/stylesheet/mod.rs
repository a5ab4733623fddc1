//! Style sheet detectors and the style tree helpers they share.

pub mod container_queries;
pub mod has_pseudo;
pub mod is_where;
pub mod legacy;
pub mod math_functions;

pub use container_queries::ContainerQueriesDetector;
pub use has_pseudo::HasPseudoDetector;
pub use is_where::IsWherePseudoDetector;
pub use legacy::LegacyStylesheetScanner;
pub use math_functions::MathFunctionsDetector;

use tree_sitter::Node;

use crate::engine::context::StylesheetContext;

/// A declaration's property name and value text (without `!important`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

/// Name of an at-rule without the `@`, e.g. `container` for `@container`.
///
/// Covers the generic `at_rule` node and the dedicated `*_statement` nodes
/// (`@media`, `@import`, `@keyframes`, ...). A preamble the grammar cannot
/// read, such as `@scope (.card)`, leaves a bare `at_keyword` under an
/// `ERROR` node; that keyword names the rule as well.
pub(crate) fn at_rule_name<'a>(sheet: &StylesheetContext<'a>, node: Node) -> Option<&'a str> {
    let kind = node.kind();
    let is_rule = is_at_rule_kind(kind);
    let is_stray_keyword = kind == "at_keyword" && !node.parent().is_some_and(|p| is_at_rule_kind(p.kind()));
    if !is_rule && !is_stray_keyword {
        return None;
    }
    let rest = sheet.text(node).strip_prefix('@')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn is_at_rule_kind(kind: &str) -> bool {
    kind == "at_rule" || kind.ends_with("_statement")
}

/// Selector text of a rule set.
pub(crate) fn rule_selector<'a>(sheet: &StylesheetContext<'a>, node: Node) -> Option<&'a str> {
    if node.kind() != "rule_set" {
        return None;
    }
    let mut cursor = node.walk();
    let selectors = node
        .children(&mut cursor)
        .find(|child| child.kind() == "selectors")?;
    Some(sheet.text(selectors))
}

/// Property and value of a declaration node.
pub(crate) fn declaration<'a>(sheet: &StylesheetContext<'a>, node: Node) -> Option<Declaration<'a>> {
    if node.kind() != "declaration" {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node> = node.children(&mut cursor).collect();

    let property = children.iter().find(|c| c.kind() == "property_name")?;
    let colon = children.iter().position(|c| c.kind() == ":")?;

    let value_nodes: Vec<&Node> = children[colon + 1..]
        .iter()
        .filter(|c| c.kind() != ";" && c.kind() != "important")
        .collect();
    let value = match (value_nodes.first(), value_nodes.last()) {
        (Some(first), Some(last)) => sheet
            .source
            .get(first.start_byte()..last.end_byte())
            .unwrap_or("")
            .trim(),
        _ => "",
    };

    Some(Declaration {
        property: sheet.text(*property),
        value,
    })
}
