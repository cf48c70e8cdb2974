//! Result types returned to callers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Score given to every section; exact matching carries no ranking.
pub const EXACT_MATCH_SCORE: f32 = 1.0;

/// One file's contribution to a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CodeSection {
    /// First matching line found in this file
    pub search_result: String,
    /// Path of the file containing the match
    pub file_path: String,
    /// Top-level classes and functions defined in this file
    pub included_defs: Vec<String>,
    /// Always 1.0 for exact matches
    pub similarity_score: f32,
}

impl CodeSection {
    pub fn new(
        file_path: impl Into<String>,
        search_result: impl Into<String>,
        included_defs: Vec<String>,
    ) -> Self {
        Self {
            search_result: search_result.into(),
            file_path: file_path.into(),
            included_defs,
            similarity_score: EXACT_MATCH_SCORE,
        }
    }
}

/// All sections produced by one query, in first-occurrence order.
///
/// No two sections share a `file_path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CodeSections {
    /// Sections of the codebase matching the query
    pub sections: Vec<CodeSection>,
    /// Query used to produce these sections
    pub search_query: String,
}

impl CodeSections {
    /// An empty result for `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            sections: Vec::new(),
            search_query: query.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up the section for a file.
    pub fn get(&self, file_path: &str) -> Option<&CodeSection> {
        self.sections.iter().find(|s| s.file_path == file_path)
    }
}
