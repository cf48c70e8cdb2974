//! Closed set of languages with top-level definition support.

use std::path::Path;

use tree_sitter::{Language, Node};

use super::languages;

/// Source language of a file, decided by extension.
///
/// `Unsupported` is the no-op variant: it has no grammar and yields no
/// definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceLanguage {
    Python,
    Rust,
    JavaScript,
    TypeScript,
    Tsx,
    Go,
    Java,
    C,
    Cpp,
    Unsupported,
}

impl SourceLanguage {
    /// Every variant that has a grammar.
    pub const SUPPORTED: [SourceLanguage; 9] = [
        SourceLanguage::Python,
        SourceLanguage::Rust,
        SourceLanguage::JavaScript,
        SourceLanguage::TypeScript,
        SourceLanguage::Tsx,
        SourceLanguage::Go,
        SourceLanguage::Java,
        SourceLanguage::C,
        SourceLanguage::Cpp,
    ];

    /// Detect the language of a path from its extension.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(SourceLanguage::Unsupported)
    }

    /// Map a file extension (without the dot) to a language.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "py" | "pyi" => SourceLanguage::Python,
            "rs" => SourceLanguage::Rust,
            "js" | "jsx" | "mjs" | "cjs" => SourceLanguage::JavaScript,
            "ts" | "mts" | "cts" => SourceLanguage::TypeScript,
            "tsx" => SourceLanguage::Tsx,
            "go" => SourceLanguage::Go,
            "java" => SourceLanguage::Java,
            "c" | "h" => SourceLanguage::C,
            "cc" | "cpp" | "cxx" | "c++" | "hh" | "hpp" | "hxx" | "h++" => SourceLanguage::Cpp,
            _ => SourceLanguage::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::Python => "python",
            SourceLanguage::Rust => "rust",
            SourceLanguage::JavaScript => "javascript",
            SourceLanguage::TypeScript => "typescript",
            SourceLanguage::Tsx => "tsx",
            SourceLanguage::Go => "go",
            SourceLanguage::Java => "java",
            SourceLanguage::C => "c",
            SourceLanguage::Cpp => "cpp",
            SourceLanguage::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        *self != SourceLanguage::Unsupported
    }

    /// The tree-sitter grammar for this language.
    pub fn grammar(&self) -> Option<Language> {
        let language: Language = match self {
            SourceLanguage::Python => tree_sitter_python::LANGUAGE.into(),
            SourceLanguage::Rust => tree_sitter_rust::LANGUAGE.into(),
            SourceLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            SourceLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SourceLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            SourceLanguage::Go => tree_sitter_go::LANGUAGE.into(),
            SourceLanguage::Java => tree_sitter_java::LANGUAGE.into(),
            SourceLanguage::C => tree_sitter_c::LANGUAGE.into(),
            SourceLanguage::Cpp => tree_sitter_cpp::LANGUAGE.into(),
            SourceLanguage::Unsupported => return None,
        };
        Some(language)
    }

    /// Names of the definitions directly under `root`, in source order.
    pub fn top_level_defs(&self, root: Node, source: &[u8]) -> Vec<String> {
        match self {
            SourceLanguage::Python => languages::python::top_level_defs(root, source),
            SourceLanguage::Rust => languages::rust::top_level_defs(root, source),
            SourceLanguage::JavaScript | SourceLanguage::TypeScript | SourceLanguage::Tsx => {
                languages::javascript::top_level_defs(root, source)
            }
            SourceLanguage::Go => languages::go::top_level_defs(root, source),
            SourceLanguage::Java => languages::java::top_level_defs(root, source),
            SourceLanguage::C => languages::c::top_level_defs(root, source, false),
            SourceLanguage::Cpp => languages::c::top_level_defs(root, source, true),
            SourceLanguage::Unsupported => Vec::new(),
        }
    }
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
