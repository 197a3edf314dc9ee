//! Test harness for ctxsnap integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

pub use ctxsnap::test_utils::TestRepo;

pub const JSON_FILE: &str = "copilot_project_context.json";
pub const MARKDOWN_FILE: &str = "copilot_session_context.md";

/// Run the binary with `dir` as working directory.
pub fn run_ctxsnap(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_ctxsnap");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ctxsnap");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Read and parse the JSON artifact written into `dir`.
pub fn read_json(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join(JSON_FILE)).expect("JSON artifact missing");
    serde_json::from_str(&text).expect("JSON artifact is not valid JSON")
}

/// Read the Markdown artifact written into `dir`.
pub fn read_markdown(dir: &Path) -> String {
    fs::read_to_string(dir.join(MARKDOWN_FILE)).expect("Markdown artifact missing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let repo = TestRepo::new();
        assert!(repo.path().exists());
    }

    #[test]
    fn test_harness_git_init() {
        let repo = TestRepo::with_git();
        assert!(repo.path().join(".git").exists());
    }

    #[test]
    fn test_harness_add_file() {
        let repo = TestRepo::new();
        let file_path = repo.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
