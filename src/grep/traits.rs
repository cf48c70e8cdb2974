//! Match source trait for pluggable query executors.

use std::path::Path;

use async_trait::async_trait;

use super::GrepMatch;

/// Anything that can turn a query into raw line matches.
///
/// Implementations never fail: problems running the underlying search are
/// logged and reported as an empty match list.
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Find every line matching `query`, in the order the backend reports them.
    async fn find_matches(&self, query: &str) -> Vec<GrepMatch>;

    /// Directory that match paths are relative to.
    fn root(&self) -> &Path;

    /// Identifier of the backend, such as "git-grep".
    fn source_type(&self) -> &'static str;
}
