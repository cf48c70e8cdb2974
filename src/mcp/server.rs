//! MCP server exposing exact-match search as a tool.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::metrics::gather_metrics;
use crate::search::Search;
use crate::sections::CodeSections;

pub const WELCOME: &str = "Give me a search query (function name, class name, etc.) \
                           and I'll return exact matches from the codebase.";

/// Request parameters for exact-match search
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GrepRequest {
    #[serde(alias = "payload")]
    #[schemars(
        description = "git grep pattern to search for, such as a function or class name. \
                       Regex characters like [ ] . * are special unless the server \
                       has search.fixed_strings enabled"
    )]
    query: String,
}

/// MCP server for grepctx.
///
/// Each `git_grep` call is one turn: the query goes through the search
/// pipeline and the resulting `CodeSections` is returned as JSON.
#[derive(Clone)]
pub struct GrepServer {
    search: Arc<dyn Search>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GrepServer {
    pub fn new(search: Arc<dyn Search>) -> Self {
        Self {
            search,
            tool_router: Self::tool_router(),
        }
    }

    /// Exact-match search grouped by file
    #[tool(
        name = "git_grep",
        description = "Find matches of a git grep pattern in the repository. Returns one section per matching file with the first matching line and the file's top-level functions and classes."
    )]
    async fn git_grep(
        &self,
        Parameters(req): Parameters<GrepRequest>,
    ) -> Result<CallToolResult, McpError> {
        let sections = self.run_turn(&req.query).await;
        let output = serde_json::to_string_pretty(&sections).map_err(|e| {
            McpError::internal_error(format!("Failed to encode results: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Prometheus metrics for this server process
    #[tool(
        name = "stats",
        description = "Show query, failure and latency metrics for this server in Prometheus text format."
    )]
    async fn stats(&self) -> Result<CallToolResult, McpError> {
        let metrics = gather_metrics();
        let output = if metrics.is_empty() {
            "No metrics recorded.".to_string()
        } else {
            metrics
        };

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    /// Run one query as a logged turn.
    pub async fn run_turn(&self, query: &str) -> CodeSections {
        let request_id = Uuid::new_v4();
        let span = info_span!("turn", %request_id);

        async {
            info!(query = %query, "Turn started");
            let sections = self.search.search(query).await;
            info!(sections = sections.len(), "Turn finished");
            sections
        }
        .instrument(span)
        .await
    }

    /// Run the MCP server using stdio transport
    pub async fn run(self) -> anyhow::Result<()> {
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for GrepServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "grepctx".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("grepctx exact-match search".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "{}\n\n\
                 Available tools:\n\
                 - git_grep: exact matches grouped by file, with each file's top-level definitions\n\
                 - stats: query metrics for this server",
                WELCOME
            )),
        }
    }
}
