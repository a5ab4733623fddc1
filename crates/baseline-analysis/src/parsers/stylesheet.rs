//! Style sheet (CSS/SCSS) parsing. Permissive: a tree is always produced
//! for any input once the grammar loads.
//!
//! SCSS is read with the CSS grammar. Variable sigils are masked first so
//! `$space: 1rem` and `gap: $space` parse as ordinary declarations; the
//! masking keeps every byte offset, so the tree still indexes the original
//! text.

use std::borrow::Cow;
use std::path::Path;

use baseline_core::errors::ParseError;
use tree_sitter::Tree;

use super::error_tolerant::count_errors;
use super::parse_tree;
use crate::scanner::SourceLanguage;

/// Parse style sheet text into a best-effort syntax tree.
pub fn parse_stylesheet(source: &str, path: &Path, language: SourceLanguage) -> Result<Tree, ParseError> {
    let text = match language {
        SourceLanguage::Scss => mask_scss_variables(source),
        _ => Cow::Borrowed(source),
    };
    let tree = parse_tree(&text, path, language)?;

    let (error_count, _) = count_errors(tree.root_node());
    if error_count > 0 {
        tracing::debug!(
            file = %path.display(),
            error_count,
            "style sheet contains unparsed regions"
        );
    }

    Ok(tree)
}

/// Replace each `$` that starts a variable name with `-`, which the CSS
/// grammar accepts as an identifier prefix. Output length equals input length.
fn mask_scss_variables(source: &str) -> Cow<'_, str> {
    if !source.contains('$') {
        return Cow::Borrowed(source);
    }

    let mut masked = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        let starts_variable = c == '$' && chars.peek().is_some_and(|next| next.is_ascii_alphabetic() || *next == '_');
        masked.push(if starts_variable { '-' } else { c });
    }
    Cow::Owned(masked)
}
