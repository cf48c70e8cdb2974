use anyhow::Result;
use rmcp::ServerHandler;
use std::sync::Arc;

use grepctx::mcp::{GrepServer, WELCOME};
use grepctx::{Config, GrepSearch};

use crate::helpers::git_repo::GitRepo;

fn server_for(repo: &GitRepo) -> GrepServer {
    let search = GrepSearch::from_config(repo.path(), &Config::default());
    GrepServer::new(Arc::new(search))
}

#[tokio::test]
async fn test_turn_returns_sections_for_repo() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("agent.py", "from tools import RAGTool\n\ndef build():\n    return RAGTool()\n")?;
    repo.write("README.md", "Uses RAGTool for retrieval\n")?;

    let server = server_for(&repo);
    let sections = server.run_turn("RAGTool").await;

    assert_eq!(sections.search_query, "RAGTool");
    assert_eq!(sections.len(), 2);

    let agent = sections.get("agent.py").expect("agent.py section");
    assert_eq!(agent.search_result, "from tools import RAGTool");
    assert_eq!(agent.included_defs, vec!["build"]);

    let readme = sections.get("README.md").expect("README.md section");
    assert!(readme.included_defs.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_turns_are_independent() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("a.py", "ALPHA = 1\n")?;
    repo.write("b.py", "BETA = 2\n")?;

    let server = server_for(&repo);
    let first = server.run_turn("ALPHA").await;
    let second = server.run_turn("BETA").await;
    let again = server.run_turn("ALPHA").await;

    assert_eq!(first.sections[0].file_path, "a.py");
    assert_eq!(second.sections[0].file_path, "b.py");
    assert_eq!(first, again);
    Ok(())
}

#[tokio::test]
async fn test_server_info_carries_welcome() -> Result<()> {
    let repo = GitRepo::new()?;
    let info = server_for(&repo).get_info();

    assert_eq!(info.server_info.name, "grepctx");
    let instructions = info.instructions.unwrap_or_default();
    assert!(instructions.starts_with(WELCOME));
    assert!(instructions.contains("git_grep"));
    Ok(())
}
