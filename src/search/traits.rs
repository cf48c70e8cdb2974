//! Search trait for the layers that sit on top of the pipeline.
//!
//! The CLI and the MCP server talk to a `Search` so they can be driven by the
//! real `git grep` pipeline or by a canned implementation in tests.

use async_trait::async_trait;

use crate::sections::CodeSections;

/// Turns a query into a result collection.
#[async_trait]
pub trait Search: Send + Sync {
    /// Run one query.
    ///
    /// Never fails: a search that cannot run yields an empty collection whose
    /// `search_query` is still `query`.
    async fn search(&self, query: &str) -> CodeSections;

    /// Get the search type identifier, such as "git-grep".
    fn search_type(&self) -> &'static str;
}
