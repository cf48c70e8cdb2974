use anyhow::Result;
use std::collections::HashSet;
use tempfile::TempDir;

use grepctx::sections::EXACT_MATCH_SCORE;
use grepctx::{Config, GrepSearch, Search};

use crate::helpers::git_repo::GitRepo;

const B_PY: &str = "def foo():\n    return TARGET\n\nclass Bar:\n    pass\n";

fn search_for(repo: &GitRepo) -> GrepSearch {
    GrepSearch::from_config(repo.path(), &Config::default())
}

#[tokio::test]
async fn test_match_inside_function_reports_file_defs() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;

    let sections = search_for(&repo).search("TARGET").await;

    assert_eq!(sections.search_query, "TARGET");
    assert_eq!(sections.len(), 1);
    let section = &sections.sections[0];
    assert_eq!(section.file_path, "b.py");
    assert_eq!(section.search_result, "    return TARGET");
    assert_eq!(section.included_defs, vec!["foo", "Bar"]);
    assert_eq!(section.similarity_score, EXACT_MATCH_SCORE);
    Ok(())
}

#[tokio::test]
async fn test_no_match_keeps_query() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;

    let sections = search_for(&repo).search("NOT_PRESENT_ANYWHERE").await;

    assert!(sections.is_empty());
    assert_eq!(sections.search_query, "NOT_PRESENT_ANYWHERE");
    Ok(())
}

#[tokio::test]
async fn test_outside_repository_is_empty() -> Result<()> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("b.py"), B_PY)?;

    let sections = GrepSearch::from_config(dir.path(), &Config::default())
        .search("TARGET")
        .await;

    assert!(sections.is_empty());
    assert_eq!(sections.search_query, "TARGET");
    Ok(())
}

#[tokio::test]
async fn test_missing_tool_is_empty() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;

    let mut config = Config::default();
    config.search.program = "grepctx-no-such-binary".to_string();
    let sections = GrepSearch::from_config(repo.path(), &config)
        .search("TARGET")
        .await;

    assert!(sections.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_first_match_per_file_wins() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("a.py", "x = 'TARGET one'\ny = 'TARGET two'\n")?;

    let sections = search_for(&repo).search("TARGET").await;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections.sections[0].search_result, "x = 'TARGET one'");
    Ok(())
}

#[tokio::test]
async fn test_non_source_file_has_no_defs() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("notes.txt", "remember TARGET\n")?;

    let sections = search_for(&repo).search("TARGET").await;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections.sections[0].file_path, "notes.txt");
    assert!(sections.sections[0].included_defs.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_one_section_per_file_across_tree() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;
    repo.write("src/lib.rs", "// TARGET\npub fn target() {}\n// TARGET again\n")?;
    repo.write("docs/readme.md", "TARGET\nTARGET\nTARGET\n")?;

    let sections = search_for(&repo).search("TARGET").await;

    let paths: HashSet<_> = sections.sections.iter().map(|s| s.file_path.as_str()).collect();
    assert_eq!(paths.len(), sections.len());
    assert_eq!(paths, HashSet::from(["b.py", "src/lib.rs", "docs/readme.md"]));
    assert!(sections
        .sections
        .iter()
        .all(|s| s.similarity_score == EXACT_MATCH_SCORE));
    assert_eq!(
        sections.get("src/lib.rs").map(|s| s.included_defs.clone()),
        Some(vec!["target".to_string()])
    );
    Ok(())
}

#[tokio::test]
async fn test_parallel_extraction_matches_sequential() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;
    repo.write("lib.rs", "fn TARGET() {}\nstruct Holder;\n")?;
    repo.write("notes.txt", "TARGET\n")?;

    let sequential = search_for(&repo).search("TARGET").await;

    let mut config = Config::default();
    config.symbols.parallel = true;
    let parallel = GrepSearch::from_config(repo.path(), &config)
        .search("TARGET")
        .await;

    assert_eq!(sequential, parallel);
    Ok(())
}

#[tokio::test]
async fn test_pathspecs_narrow_search() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;
    repo.write("notes.txt", "TARGET\n")?;

    let mut config = Config::default();
    config.search.pathspecs = vec!["*.py".to_string()];
    let sections = GrepSearch::from_config(repo.path(), &config)
        .search("TARGET")
        .await;

    assert_eq!(sections.len(), 1);
    assert_eq!(sections.sections[0].file_path, "b.py");
    Ok(())
}

#[tokio::test]
async fn test_local_config_is_loaded() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("b.py", B_PY)?;

    let mut config = Config::default();
    config.symbols.enabled = false;
    config.save(repo.path())?;

    let loaded = Config::load(repo.path())?;
    let sections = GrepSearch::from_config(repo.path(), &loaded)
        .search("TARGET")
        .await;

    assert_eq!(sections.len(), 1);
    assert!(sections.sections[0].included_defs.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_non_ascii_file_name_is_reported_verbatim() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("café.py", "def brew():\n    return TARGET\n")?;

    let sections = search_for(&repo).search("TARGET").await;

    assert_eq!(sections.len(), 1);
    let section = &sections.sections[0];
    assert_eq!(section.file_path, "café.py");
    assert_eq!(section.search_result, "    return TARGET");
    assert_eq!(section.included_defs, vec!["brew"]);
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn test_colon_in_file_name_is_not_split() -> Result<()> {
    let repo = GitRepo::new()?;
    repo.write("pkg/a:b.py", "def first():\n    return TARGET\n")?;

    let sections = search_for(&repo).search("TARGET").await;

    assert_eq!(sections.len(), 1);
    let section = &sections.sections[0];
    assert_eq!(section.file_path, "pkg/a:b.py");
    assert_eq!(section.search_result, "    return TARGET");
    assert_eq!(section.included_defs, vec!["first"]);
    Ok(())
}
