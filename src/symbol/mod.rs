//! Top-level symbol extraction.
//!
//! Given a file, parse it with tree-sitter (when its language is supported)
//! and list the names of functions and classes declared directly in the
//! outermost scope. Nested definitions such as methods are not reported.

pub mod extractor;
pub mod language;
mod languages;

pub use extractor::{ExtractError, SymbolExtractor};
pub use language::SourceLanguage;
