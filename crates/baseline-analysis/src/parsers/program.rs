//! Program (JavaScript/TypeScript) parsing.

use std::path::Path;

use baseline_core::errors::ParseError;
use tree_sitter::Tree;

use super::error_tolerant::count_errors;
use super::parse_tree;
use crate::scanner::SourceLanguage;

/// Parse program text into a syntax tree.
///
/// Trees with syntax errors are rejected with [`ParseError::PartialParse`]
/// unless `tolerate_errors` is set, in which case the partial tree is returned.
pub fn parse_program(
    source: &str,
    path: &Path,
    language: SourceLanguage,
    tolerate_errors: bool,
) -> Result<Tree, ParseError> {
    let tree = parse_tree(source, path, language)?;

    let (error_count, error_lines) = count_errors(tree.root_node());
    if error_count > 0 {
        if !tolerate_errors {
            return Err(ParseError::PartialParse {
                path: path.to_path_buf(),
                error_count,
                first_line: error_lines.first().copied().unwrap_or(1),
            });
        }
        tracing::debug!(
            file = %path.display(),
            error_count,
            "using partial program tree"
        );
    }

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typescript_syntax() {
        let source = "const x: number = 1;\nexport { x };\n";
        let tree = parse_program(source, Path::new("a.ts"), SourceLanguage::TypeScript, false).unwrap();
        assert_eq!(tree.root_node().kind(), "program");
    }

    #[test]
    fn rejects_syntax_errors_by_default() {
        let source = "const = = ;\n";
        let err = parse_program(source, Path::new("bad.js"), SourceLanguage::JavaScript, false).unwrap_err();
        assert!(matches!(err, ParseError::PartialParse { .. }));
    }

    #[test]
    fn tolerates_syntax_errors_when_asked() {
        let source = "const = = ;\n";
        assert!(parse_program(source, Path::new("bad.js"), SourceLanguage::JavaScript, true).is_ok());
    }
}
