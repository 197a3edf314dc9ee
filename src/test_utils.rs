//! Test utilities for creating temporary project trees and git repositories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// Provides methods for creating files, git initialization, and commits.
/// The directory is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// Create a new temporary directory with git initialized.
    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Initialize a git repository in the temporary directory.
    ///
    /// Uses `main` as the initial branch and configures user.email and
    /// user.name for commits.
    pub fn init_git(&mut self) {
        self.git(&["init", "-q"]);
        self.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self.git_initialized = true;
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw contents, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create an (empty) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Stage everything and create a commit with the given message.
    pub fn commit(&self, message: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message, "--allow-empty"]);
    }

    /// Switch HEAD to a new branch.
    pub fn checkout_new_branch(&self, name: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["checkout", "-q", "-b", name]);
    }

    /// Run a git command inside the directory.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
