//! Git invocation for the extension directory.
//!
//! The engine needs exactly two things from version control: creating
//! a repository and listing historic file deletions. Both are narrow
//! capabilities so the reconciler and the init command can be tested
//! without spawning a real process.

use crate::error::{DevError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Yields the paths of all file-deletion events in the full history,
/// in log order, possibly with duplicates and blank separators.
pub trait HistoryProvider {
    fn deleted_paths(&self) -> Result<Vec<String>>;
}

/// Creates a fresh repository in the extension directory.
pub trait RepositoryInitializer {
    fn init_repository(&self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Git
// ---------------------------------------------------------------------------

pub struct Git {
    dir: PathBuf,
}

impl Git {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn is_repository(&self) -> bool {
        self.dir.join(".git").is_dir()
    }

    fn run(&self, args: &[&str]) -> Result<Vec<String>> {
        if which::which("git").is_err() {
            return Err(DevError::GitNotFound);
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .map_err(|e| DevError::GitFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let hint = stderr.trim().chars().take(500).collect::<String>();
            return Err(DevError::GitFailed(hint));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

impl HistoryProvider for Git {
    /// Rename detection is disabled so a renamed file's old path shows
    /// up as a deletion.
    fn deleted_paths(&self) -> Result<Vec<String>> {
        self.run(&[
            "log",
            "--no-renames",
            "--pretty=format:",
            "--name-only",
            "--diff-filter=D",
        ])
    }
}

impl RepositoryInitializer for Git {
    fn init_repository(&self) -> Result<()> {
        self.run(&["init"]).map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_is_not_a_repository() {
        let dir = TempDir::new().unwrap();
        assert!(!Git::new(dir.path()).is_repository());
    }

    #[test]
    fn init_creates_a_repository() {
        if which::which("git").is_err() {
            return; // environment without git
        }
        let dir = TempDir::new().unwrap();
        let git = Git::new(dir.path());
        git.init_repository().unwrap();
        assert!(git.is_repository());
    }

    #[test]
    fn run_surfaces_git_errors() {
        if which::which("git").is_err() {
            return;
        }
        let dir = TempDir::new().unwrap();
        // not a repository: log must fail
        let err = Git::new(dir.path()).deleted_paths().unwrap_err();
        assert!(matches!(err, DevError::GitFailed(_)));
    }
}
