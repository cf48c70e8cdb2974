//! Query execution over a git working tree.
//!
//! This module contains:
//! - `traits` - The `MatchSource` trait consumed by the aggregator
//! - `parser` - Parsing of `path:line:content` output lines
//! - `executor` - `GitGrep`, which runs `git grep -n` under a timeout

mod executor;
pub mod parser;
pub mod traits;

pub use executor::{GitGrep, GrepError};
pub use parser::{parse_line, parse_output, GrepMatch};
pub use traits::MatchSource;
