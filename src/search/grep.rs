//! The `git grep` search pipeline.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::traits::Search;
use crate::config::{Config, SymbolsConfig};
use crate::grep::{GitGrep, MatchSource};
use crate::metrics::{QUERIES, QUERY_LATENCY, SECTIONS_RETURNED};
use crate::sections::{CodeSections, SectionAggregator};

/// Runs a match source and aggregates its output into sections.
///
/// Keeps no state between queries.
#[derive(Clone)]
pub struct GrepSearch {
    source: Arc<dyn MatchSource>,
    aggregator: SectionAggregator,
}

impl GrepSearch {
    /// Create a pipeline over any match source.
    pub fn new(source: Arc<dyn MatchSource>, symbols: SymbolsConfig) -> Self {
        let aggregator = SectionAggregator::new(source.root(), symbols);
        Self { source, aggregator }
    }

    /// Create the `git grep` pipeline for a working tree.
    pub fn from_config(root: &Path, config: &Config) -> Self {
        let source = Arc::new(GitGrep::from_config(root, &config.search));
        Self::new(source, config.symbols.clone())
    }

    pub fn root(&self) -> &Path {
        self.aggregator.root()
    }
}

#[async_trait]
impl Search for GrepSearch {
    async fn search(&self, query: &str) -> CodeSections {
        QUERIES.inc();
        let timer = QUERY_LATENCY.start_timer();

        let matches = self.source.find_matches(query).await;
        let match_count = matches.len();

        // Parsing reads files, keep it off the async workers
        let aggregator = self.aggregator.clone();
        let owned_query = query.to_string();
        let sections = match tokio::task::spawn_blocking(move || {
            aggregator.aggregate(&owned_query, matches)
        })
        .await
        {
            Ok(sections) => sections,
            Err(e) => {
                error!(query = %query, error = %e, "Aggregation task failed");
                CodeSections::empty(query)
            }
        };

        SECTIONS_RETURNED.observe(sections.len() as f64);
        timer.observe_duration();

        info!(
            query = %query,
            source = self.source.source_type(),
            matches = match_count,
            sections = sections.len(),
            "Query finished"
        );

        sections
    }

    fn search_type(&self) -> &'static str {
        self.source.source_type()
    }
}
