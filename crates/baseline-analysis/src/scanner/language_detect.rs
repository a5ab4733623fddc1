//! Language detection from file extension.

use baseline_core::errors::ParseError;
use baseline_core::types::SourceKind;
use serde::{Deserialize, Serialize};

/// Source languages the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLanguage {
    JavaScript,
    TypeScript,
    Tsx,
    Css,
    Scss,
}

impl SourceLanguage {
    /// Detect language from an extension string. Matching is case-insensitive.
    pub fn from_extension(ext: Option<&str>) -> Option<SourceLanguage> {
        match ext?.to_ascii_lowercase().as_str() {
            "js" | "jsx" => Some(SourceLanguage::JavaScript),
            "ts" => Some(SourceLanguage::TypeScript),
            "tsx" => Some(SourceLanguage::Tsx),
            "css" => Some(SourceLanguage::Css),
            "scss" => Some(SourceLanguage::Scss),
            _ => None,
        }
    }

    /// Detect language from the text after the last `.` of a filename.
    pub fn from_filename(filename: &str) -> Option<SourceLanguage> {
        Self::from_extension(filename.rsplit_once('.').map(|(_, ext)| ext))
    }

    /// Like [`from_filename`](Self::from_filename), but an unrecognized
    /// extension is an [`ParseError::UnsupportedExtension`].
    pub fn resolve(filename: &str) -> Result<SourceLanguage, ParseError> {
        Self::from_filename(filename).ok_or_else(|| ParseError::UnsupportedExtension {
            extension: filename
                .rsplit_once('.')
                .map(|(_, ext)| ext)
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Whether this is script or style sheet source.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceLanguage::JavaScript | SourceLanguage::TypeScript | SourceLanguage::Tsx => {
                SourceKind::Program
            }
            SourceLanguage::Css | SourceLanguage::Scss => SourceKind::Stylesheet,
        }
    }

    /// Returns all file extensions associated with this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            SourceLanguage::JavaScript => &["js", "jsx"],
            SourceLanguage::TypeScript => &["ts"],
            SourceLanguage::Tsx => &["tsx"],
            SourceLanguage::Css => &["css"],
            SourceLanguage::Scss => &["scss"],
        }
    }

    /// Returns the display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            SourceLanguage::JavaScript => "JavaScript",
            SourceLanguage::TypeScript => "TypeScript",
            SourceLanguage::Tsx => "TSX",
            SourceLanguage::Css => "CSS",
            SourceLanguage::Scss => "SCSS",
        }
    }

    /// Get the tree-sitter grammar for this language.
    ///
    /// SCSS is read with the CSS grammar; nesting and variables degrade to
    /// error nodes that the style sheet path tolerates.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            SourceLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            SourceLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            SourceLanguage::Css | SourceLanguage::Scss => tree_sitter_css::LANGUAGE.into(),
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_last_extension() {
        assert_eq!(SourceLanguage::from_filename("src/app.test.ts"), Some(SourceLanguage::TypeScript));
        assert_eq!(SourceLanguage::from_filename("App.JSX"), Some(SourceLanguage::JavaScript));
        assert_eq!(SourceLanguage::from_filename("theme.SCSS"), Some(SourceLanguage::Scss));
        assert_eq!(SourceLanguage::from_filename("README.md"), None);
        assert_eq!(SourceLanguage::from_filename("Makefile"), None);
    }

    #[test]
    fn resolve_reports_unsupported_extension() {
        let err = SourceLanguage::resolve("notes.md").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedExtension { ref extension } if extension == "md"));
        assert_eq!(SourceLanguage::resolve("a.css").unwrap(), SourceLanguage::Css);
    }

    #[test]
    fn kinds() {
        assert_eq!(SourceLanguage::Tsx.kind(), SourceKind::Program);
        assert_eq!(SourceLanguage::Css.kind(), SourceKind::Stylesheet);
    }
}
