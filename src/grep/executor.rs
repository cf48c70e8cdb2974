//! `git grep` runner with a bounded wait.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use super::parser::{parse_output, GrepMatch};
use super::traits::MatchSource;
use crate::config::SearchConfig;
use crate::metrics::{SEARCH_FAILURES, SEARCH_TIMEOUTS};

/// Errors from a single search invocation.
///
/// These never leave the module through `MatchSource`; they are logged and
/// turned into an empty result.
#[derive(Error, Debug)]
pub enum GrepError {
    /// The search program could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The search did not finish before the deadline.
    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    /// The search exited unsuccessfully without producing output.
    #[error("search exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },
}

/// Runs `git grep -n -z <query>` inside a working tree.
#[derive(Debug, Clone)]
pub struct GitGrep {
    root: PathBuf,
    program: String,
    timeout: Duration,
    fixed_strings: bool,
    ignore_case: bool,
    pathspecs: Vec<String>,
}

impl GitGrep {
    /// Create a runner for `root` with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::from_config(root, &SearchConfig::default())
    }

    /// Create a runner for `root` from the `[search]` config section.
    pub fn from_config(root: impl Into<PathBuf>, config: &SearchConfig) -> Self {
        Self {
            root: root.into(),
            program: config.program.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            fixed_strings: config.fixed_strings,
            ignore_case: config.ignore_case,
            pathspecs: config.pathspecs.clone(),
        }
    }

    /// Override the executable used in place of `git`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Arguments passed to the program. The query is a single argv element.
    ///
    /// Paths are printed verbatim (`core.quotePath=false`) and terminated by
    /// NUL (`-z`) so non-ASCII names and names containing `:` survive parsing.
    fn build_args(&self, query: &str) -> Vec<String> {
        let mut args: Vec<String> =
            ["-c", "core.quotePath=false", "grep", "-n", "-z", "--no-color"]
                .iter()
                .map(|arg| arg.to_string())
                .collect();
        if self.fixed_strings {
            args.push("-F".to_string());
        }
        if self.ignore_case {
            args.push("-i".to_string());
        }
        // -e keeps a leading dash in the query from being read as an option
        args.push("-e".to_string());
        args.push(query.to_string());
        if !self.pathspecs.is_empty() {
            args.push("--".to_string());
            args.extend(self.pathspecs.iter().cloned());
        }
        args
    }

    /// Run the search and parse its output.
    pub async fn run(&self, query: &str) -> Result<Vec<GrepMatch>, GrepError> {
        let args = self.build_args(query);
        debug!(program = %self.program, args = ?args, dir = %self.root.display(), "Running search");

        let mut command = Command::new(&self.program);
        command
            .args(&args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(GrepError::Spawn {
                    program: self.program.clone(),
                    source,
                })
            }
            Err(_) => return Err(GrepError::Timeout(self.timeout)),
        };

        let stdout = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() && stdout.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

            // git grep exits 1 with no output when nothing matched
            if output.status.code() == Some(1) && stderr.is_empty() {
                debug!(query = %query, "No matches");
                return Ok(Vec::new());
            }

            return Err(GrepError::Failed {
                code: output.status.code(),
                stderr,
            });
        }

        let matches = parse_output(&stdout);
        debug!(query = %query, matches = matches.len(), "Search finished");
        Ok(matches)
    }
}

#[async_trait]
impl MatchSource for GitGrep {
    async fn find_matches(&self, query: &str) -> Vec<GrepMatch> {
        match self.run(query).await {
            Ok(matches) => matches,
            Err(e) => {
                if matches!(e, GrepError::Timeout(_)) {
                    SEARCH_TIMEOUTS.inc();
                }
                SEARCH_FAILURES.inc();
                warn!(query = %query, error = %e, "Error running git grep");
                Vec::new()
            }
        }
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn source_type(&self) -> &'static str {
        "git-grep"
    }
}
