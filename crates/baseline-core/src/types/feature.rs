//! Detected feature occurrences.

use serde::{Deserialize, Serialize};

/// The kind of source a detector analyzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Script source (JavaScript, TypeScript, JSX, TSX).
    Program,
    /// Style sheet source (CSS, SCSS).
    Stylesheet,
}

impl SourceKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Stylesheet => "stylesheet",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One concrete usage site of a tracked feature.
///
/// Serializes to `{ "name", "kind", "file", "line"? }`; `line` is omitted
/// when the detector could not attribute a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectedFeature {
    pub name: String,
    pub kind: SourceKind,
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl DetectedFeature {
    pub fn new(
        name: impl Into<String>,
        kind: SourceKind,
        file: impl Into<String>,
        line: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            file: file.into(),
            line,
        }
    }

    /// Occurrence in a program file at a 1-based line.
    pub fn program(name: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self::new(name, SourceKind::Program, file, Some(line))
    }

    /// Occurrence in a style sheet at a 1-based line.
    pub fn stylesheet(name: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self::new(name, SourceKind::Stylesheet, file, Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_exact_record_shape() {
        let feature = DetectedFeature::program("Promise.try", "src/a.ts", 3);
        let json = serde_json::to_value(&feature).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Promise.try",
                "kind": "program",
                "file": "src/a.ts",
                "line": 3
            })
        );
    }

    #[test]
    fn omits_missing_line() {
        let feature = DetectedFeature::new("gap", SourceKind::Stylesheet, "a.css", None);
        let json = serde_json::to_string(&feature).unwrap();
        assert!(!json.contains("line"));
        assert!(json.contains("\"kind\":\"stylesheet\""));
    }
}
