use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway git working tree. Files written through it are staged so
/// `git grep` sees them without a commit.
pub struct GitRepo {
    pub temp_dir: TempDir,
}

impl GitRepo {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let repo = Self { temp_dir };
        repo.git(&["init", "--quiet"])?;
        Ok(repo)
    }

    pub fn write(&self, path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&file_path, content)?;
        self.git(&["add", "--", path])?;
        Ok(file_path)
    }

    /// Copy a file from `tests/fixtures` into the tree under the same name.
    pub fn add_fixture(&self, fixture: &str) -> Result<PathBuf> {
        let source = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(fixture);
        let content = std::fs::read_to_string(&source)?;
        let name = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(fixture)
            .to_string();
        self.write(&name, &content)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.temp_dir.path())
            .status()?;
        if !status.success() {
            bail!("git {:?} failed with {}", args, status);
        }
        Ok(())
    }
}
