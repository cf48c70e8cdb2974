//! File-level symbol extraction with cached parsers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace};
use tree_sitter::Parser;

use super::SourceLanguage;
use crate::config::SymbolsConfig;
use crate::metrics::{FILES_PARSED, PARSE_FAILURES};

/// Reasons a supported file produced no definitions.
///
/// `SymbolExtractor::top_level_defs` absorbs these; `try_extract` exposes them
/// for callers that want to know why.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no grammar for {0}")]
    Unsupported(SourceLanguage),

    #[error("failed to load {language} grammar: {message}")]
    Grammar {
        language: SourceLanguage,
        message: String,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is {size} bytes, over the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("parser produced no tree")]
    Parse,

    #[error("source contains syntax errors")]
    Syntax,
}

/// Extracts top-level definition names from source files.
///
/// One parser per language is created on first use and reused for later
/// files. An extractor is not shared between threads; parallel callers create
/// one per worker.
pub struct SymbolExtractor {
    parsers: HashMap<SourceLanguage, Parser>,
    max_file_bytes: u64,
}

impl SymbolExtractor {
    pub fn new() -> Self {
        Self::from_config(&SymbolsConfig::default())
    }

    pub fn from_config(config: &SymbolsConfig) -> Self {
        Self {
            parsers: HashMap::new(),
            max_file_bytes: config.max_file_bytes,
        }
    }

    /// Names of the top-level functions and classes in `path`, in source order.
    ///
    /// Unsupported languages return an empty list without touching the file.
    /// Read and parse failures are logged and also return an empty list.
    pub fn top_level_defs(&mut self, path: &Path) -> Vec<String> {
        let language = SourceLanguage::from_path(path);
        if !language.is_supported() {
            trace!("Skipping {:?}: unsupported language", path);
            return Vec::new();
        }

        match self.try_extract(path, language) {
            Ok(defs) => {
                FILES_PARSED.inc();
                defs
            }
            Err(e) => {
                PARSE_FAILURES.inc();
                debug!("No definitions for {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Read and parse `path` as `language`.
    pub fn try_extract(
        &mut self,
        path: &Path,
        language: SourceLanguage,
    ) -> Result<Vec<String>, ExtractError> {
        let read_error = |source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(read_error)?.len();
        if size > self.max_file_bytes {
            return Err(ExtractError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_bytes,
            });
        }

        let source = std::fs::read(path).map_err(read_error)?;
        self.extract_source(language, &source)
    }

    /// Parse in-memory source as `language`.
    ///
    /// A tree containing any syntax error counts as a failure, so a file that
    /// does not parse cleanly reports no definitions at all.
    pub fn extract_source(
        &mut self,
        language: SourceLanguage,
        source: &[u8],
    ) -> Result<Vec<String>, ExtractError> {
        let parser = self.parser_for(language)?;
        let tree = parser.parse(source, None).ok_or(ExtractError::Parse)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(ExtractError::Syntax);
        }

        Ok(language.top_level_defs(root, source))
    }

    fn parser_for(&mut self, language: SourceLanguage) -> Result<&mut Parser, ExtractError> {
        if !self.parsers.contains_key(&language) {
            let grammar = language
                .grammar()
                .ok_or(ExtractError::Unsupported(language))?;

            let mut parser = Parser::new();
            parser
                .set_language(&grammar)
                .map_err(|e| ExtractError::Grammar {
                    language,
                    message: format!("{:?}", e),
                })?;
            self.parsers.insert(language, parser);
        }

        self.parsers
            .get_mut(&language)
            .ok_or(ExtractError::Unsupported(language))
    }
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new()
    }
}
