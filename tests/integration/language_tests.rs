use anyhow::Result;

use grepctx::{Config, GrepSearch, Search};

use crate::helpers::git_repo::GitRepo;

/// Search a single fixture for its marker comment and return the defs.
async fn defs_for_fixture(fixture: &str) -> Result<Vec<String>> {
    let repo = GitRepo::new()?;
    repo.add_fixture(fixture)?;

    let search = GrepSearch::from_config(repo.path(), &Config::default());
    let sections = search.search("MARKER").await;

    assert_eq!(sections.len(), 1, "{} should match once", fixture);
    Ok(sections.sections[0].included_defs.clone())
}

#[tokio::test]
async fn test_python_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.py").await?;
    assert_eq!(defs, vec!["load", "Loader", "decorated"]);
    Ok(())
}

#[tokio::test]
async fn test_rust_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.rs").await?;
    assert_eq!(defs, vec!["Registry", "State", "Handler", "main"]);
    Ok(())
}

#[tokio::test]
async fn test_go_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.go").await?;
    // Methods are not top-level definitions
    assert_eq!(defs, vec!["Server", "Runner", "NewServer"]);
    Ok(())
}

#[tokio::test]
async fn test_typescript_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.ts").await?;
    assert_eq!(defs, vec!["parse", "Tokenizer", "Lexer"]);
    Ok(())
}

#[tokio::test]
async fn test_java_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.java").await?;
    assert_eq!(defs, vec!["Greeter", "Speaker", "Mood"]);
    Ok(())
}

#[tokio::test]
async fn test_cpp_fixture() -> Result<()> {
    let defs = defs_for_fixture("languages/sample.cpp").await?;
    assert_eq!(defs, vec!["Widget", "count"]);
    Ok(())
}

#[tokio::test]
async fn test_syntax_error_yields_no_defs() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("broken.py", "def ok():\n    pass\n\ndef broken(:\n    MARKER\n")?;

    let search = GrepSearch::from_config(repo.path(), &Config::default());
    let sections = search.search("MARKER").await;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections.sections[0].file_path, "broken.py");
    assert!(sections.sections[0].included_defs.is_empty());
    Ok(())
}
