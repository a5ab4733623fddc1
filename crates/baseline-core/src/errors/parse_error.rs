//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, BaselineErrorCode};

/// Errors that can occur while building a syntax tree from source text.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },

    #[error("Partial parse of {path}: {error_count} syntax error(s), first at line {first_line}")]
    PartialParse {
        path: PathBuf,
        error_count: u32,
        first_line: u32,
    },

    #[error("Unsupported extension: {extension}")]
    UnsupportedExtension { extension: String },
}

impl BaselineErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedExtension { .. } => error_code::UNSUPPORTED_EXTENSION,
            Self::PartialParse { .. } => error_code::PARTIAL_PARSE,
            _ => error_code::PARSE_ERROR,
        }
    }
}
