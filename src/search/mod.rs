//! Search entry points.
//!
//! This module contains:
//! - `traits` - Common `Search` trait used by the CLI and MCP server
//! - `grep` - `GrepSearch`, the git grep pipeline

pub mod grep;
pub mod traits;

pub use grep::GrepSearch;
pub use traits::Search;
