//! Per-file result sections.
//!
//! - `types` - `CodeSection` and `CodeSections`, the values handed to callers
//! - `aggregator` - deduplication by file and symbol enrichment

pub mod aggregator;
pub mod types;

pub use aggregator::{aggregate_with, first_match_per_file, SectionAggregator};
pub use types::{CodeSection, CodeSections, EXACT_MATCH_SCORE};
