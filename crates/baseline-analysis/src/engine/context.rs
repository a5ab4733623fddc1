//! Detection contexts.
//!
//! A context is either a program or a style sheet. Detectors narrow with
//! [`DetectionContext::as_program`] / [`DetectionContext::as_stylesheet`] and
//! return nothing for the other variant.

use baseline_core::types::{DetectedFeature, SourceKind};
use tree_sitter::{Node, Tree};

/// Raw program text, its filename, and its syntax tree.
#[derive(Debug, Clone, Copy)]
pub struct ProgramContext<'a> {
    pub source: &'a str,
    pub file: &'a str,
    pub tree: &'a Tree,
}

/// Raw style sheet text, its filename, and its style tree.
#[derive(Debug, Clone, Copy)]
pub struct StylesheetContext<'a> {
    pub source: &'a str,
    pub file: &'a str,
    pub tree: &'a Tree,
}

/// Context passed to every detector.
#[derive(Debug, Clone, Copy)]
pub enum DetectionContext<'a> {
    Program(ProgramContext<'a>),
    Stylesheet(StylesheetContext<'a>),
}

impl<'a> DetectionContext<'a> {
    pub fn program(source: &'a str, file: &'a str, tree: &'a Tree) -> Self {
        Self::Program(ProgramContext { source, file, tree })
    }

    pub fn stylesheet(source: &'a str, file: &'a str, tree: &'a Tree) -> Self {
        Self::Stylesheet(StylesheetContext { source, file, tree })
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Program(_) => SourceKind::Program,
            Self::Stylesheet(_) => SourceKind::Stylesheet,
        }
    }

    pub fn file(&self) -> &'a str {
        match self {
            Self::Program(ctx) => ctx.file,
            Self::Stylesheet(ctx) => ctx.file,
        }
    }

    pub fn source(&self) -> &'a str {
        match self {
            Self::Program(ctx) => ctx.source,
            Self::Stylesheet(ctx) => ctx.source,
        }
    }

    pub fn as_program(&self) -> Option<&ProgramContext<'a>> {
        match self {
            Self::Program(ctx) => Some(ctx),
            Self::Stylesheet(_) => None,
        }
    }

    pub fn as_stylesheet(&self) -> Option<&StylesheetContext<'a>> {
        match self {
            Self::Stylesheet(ctx) => Some(ctx),
            Self::Program(_) => None,
        }
    }

    pub fn is_program(&self) -> bool {
        matches!(self, Self::Program(_))
    }

    pub fn is_stylesheet(&self) -> bool {
        matches!(self, Self::Stylesheet(_))
    }
}

impl<'a> ProgramContext<'a> {
    /// Source text covered by `node`.
    pub fn text(&self, node: Node) -> &'a str {
        node_text(self.source, node)
    }

    /// Occurrence of `name` at `node`'s starting line.
    pub fn occurrence(&self, name: impl Into<String>, node: Node) -> DetectedFeature {
        DetectedFeature::program(name, self.file, line_of(node))
    }
}

impl<'a> StylesheetContext<'a> {
    /// Source text covered by `node`.
    pub fn text(&self, node: Node) -> &'a str {
        node_text(self.source, node)
    }

    /// Occurrence of `name` at `node`'s starting line.
    pub fn occurrence(&self, name: impl Into<String>, node: Node) -> DetectedFeature {
        DetectedFeature::stylesheet(name, self.file, line_of(node))
    }
}

/// 1-based line of a node's start.
pub fn line_of(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}

fn node_text<'a>(source: &'a str, node: Node) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}
