//! Tree-sitter parsing for program and style sheet sources.

pub mod error_tolerant;
pub mod program;
pub mod stylesheet;

pub use program::parse_program;
pub use stylesheet::parse_stylesheet;

use std::path::Path;

use baseline_core::errors::ParseError;
use tree_sitter::{Parser, Tree};

use crate::scanner::SourceLanguage;

/// Run tree-sitter over `source` with the grammar for `language`.
pub(crate) fn parse_tree(source: &str, path: &Path, language: SourceLanguage) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.ts_language())
        .map_err(|_e| ParseError::GrammarNotFound {
            language: language.name().to_string(),
        })?;

    parser
        .parse(source, None)
        .ok_or_else(|| ParseError::TreeSitterError {
            path: path.to_path_buf(),
            message: "tree-sitter returned None".to_string(),
        })
}
