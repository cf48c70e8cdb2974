//! Folding raw matches into one section per file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use super::{CodeSection, CodeSections};
use crate::config::SymbolsConfig;
use crate::grep::GrepMatch;
use crate::symbol::SymbolExtractor;

/// Build sections from matches, calling `extract` once per new file.
///
/// Matches are processed in order. The first match for a path creates its
/// section; every later match for that path is dropped without touching the
/// section or calling `extract` again.
pub fn aggregate_with<I, F>(query: &str, matches: I, mut extract: F) -> CodeSections
where
    I: IntoIterator<Item = GrepMatch>,
    F: FnMut(&str) -> Vec<String>,
{
    let mut seen = HashSet::new();
    let mut sections = Vec::new();

    for m in matches {
        if !seen.insert(m.file_path.clone()) {
            continue;
        }
        let included_defs = extract(&m.file_path);
        sections.push(CodeSection::new(m.file_path, m.matched_line, included_defs));
    }

    CodeSections {
        sections,
        search_query: query.to_string(),
    }
}

/// Keep only the first match for each file, preserving order.
pub fn first_match_per_file<I>(matches: I) -> Vec<GrepMatch>
where
    I: IntoIterator<Item = GrepMatch>,
{
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert(m.file_path.clone()))
        .collect()
}

/// Turns a query's matches into `CodeSections`, extracting definitions from
/// files under `root`.
///
/// Holds only configuration; every call starts from scratch.
#[derive(Debug, Clone)]
pub struct SectionAggregator {
    root: PathBuf,
    symbols: SymbolsConfig,
}

impl SectionAggregator {
    pub fn new(root: impl Into<PathBuf>, symbols: SymbolsConfig) -> Self {
        Self {
            root: root.into(),
            symbols,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn aggregate(&self, query: &str, matches: Vec<GrepMatch>) -> CodeSections {
        if !self.symbols.enabled {
            return aggregate_with(query, matches, |_| Vec::new());
        }

        if self.symbols.parallel {
            return self.aggregate_parallel(query, matches);
        }

        let mut extractor = SymbolExtractor::from_config(&self.symbols);
        aggregate_with(query, matches, |file_path| {
            extractor.top_level_defs(&self.resolve(file_path))
        })
    }

    /// Same result as the sequential path, with extraction spread over rayon.
    fn aggregate_parallel(&self, query: &str, matches: Vec<GrepMatch>) -> CodeSections {
        let firsts = first_match_per_file(matches);
        debug!(files = firsts.len(), "Extracting definitions in parallel");

        let defs: Vec<Vec<String>> = firsts
            .par_iter()
            .map_init(
                || SymbolExtractor::from_config(&self.symbols),
                |extractor, m| extractor.top_level_defs(&self.resolve(&m.file_path)),
            )
            .collect();

        let sections = firsts
            .into_iter()
            .zip(defs)
            .map(|(m, included_defs)| CodeSection::new(m.file_path, m.matched_line, included_defs))
            .collect();

        CodeSections {
            sections,
            search_query: query.to_string(),
        }
    }

    fn resolve(&self, file_path: &str) -> PathBuf {
        self.root.join(file_path)
    }
}
