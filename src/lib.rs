pub mod cli;
pub mod commands;
pub mod config;
pub mod grep;
pub mod logging;
pub mod mcp;
pub mod metrics;
pub mod search;
pub mod sections;
pub mod symbol;

pub use config::Config;
pub use search::{GrepSearch, Search};
pub use sections::{CodeSection, CodeSections};
