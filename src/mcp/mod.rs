//! MCP (Model Context Protocol) server module for grepctx.
//!
//! Exposes the search pipeline to LLM clients over stdio. A client sends a
//! query through the `git_grep` tool and receives the `CodeSections` JSON as
//! the tool result.
//!
//! ```ignore
//! use std::sync::Arc;
//! use grepctx::mcp::GrepServer;
//! use grepctx::search::GrepSearch;
//!
//! let search = GrepSearch::from_config(&root, &config);
//! GrepServer::new(Arc::new(search)).run().await?;
//! ```

mod server;

pub use server::{GrepRequest, GrepServer, WELCOME};
