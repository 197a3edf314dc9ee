//! Snapshot rendering and artifact writing
//!
//! This module turns a [`ScanResult`] into the two run artifacts:
//! - the full JSON snapshot
//! - a Markdown session summary
//!
//! # Module Structure
//!
//! - `config` - Output configuration and fixed file names
//! - `json` - JSON rendering and decoding
//! - `markdown` - Markdown summary rendering

mod config;
mod json;
mod markdown;

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, SnapshotError};
use crate::snapshot::ScanResult;

// Re-export public types and functions
pub use config::{DEFAULT_STRUCTURE_CHAR_BUDGET, JSON_FILE_NAME, MARKDOWN_FILE_NAME, OutputConfig};
pub use json::{parse_json, render_json, to_pretty_json};
pub use markdown::{MarkdownFormatter, STRUCTURE_TRUNCATION_NOTICE, render_markdown};

/// Paths of the artifacts written by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub json: PathBuf,
    pub markdown: PathBuf,
}

/// Render both artifacts and write them, replacing any previous run's files.
///
/// Both documents are rendered before anything is written, so a rendering
/// failure leaves existing files untouched. A write failure is fatal and
/// may leave the JSON artifact written without the Markdown one.
pub fn write_artifacts(result: &ScanResult, config: &OutputConfig) -> Result<Artifacts> {
    let json = render_json(result)?;
    let markdown = render_markdown(result, config)?;

    let artifacts = Artifacts {
        json: config.json_path(),
        markdown: config.markdown_path(),
    };

    for (path, contents) in [(&artifacts.json, &json), (&artifacts.markdown, &markdown)] {
        fs::write(path, contents).map_err(|e| SnapshotError::write(path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    }

    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::GitInfo;
    use crate::test_utils::TestRepo;
    use crate::tree::{Children, Node};

    fn empty_result() -> ScanResult {
        ScanResult {
            timestamp: "2024-01-01T00:00:00.000000".to_string(),
            structure: Node::Directory(Children::new()),
            git: GitInfo::unavailable(),
        }
    }

    #[test]
    fn test_writes_both_artifacts() {
        let dir = TestRepo::new();
        let config = OutputConfig::default().with_output_dir(dir.path());

        let artifacts = write_artifacts(&empty_result(), &config).unwrap();
        assert_eq!(artifacts.json, dir.path().join(JSON_FILE_NAME));
        assert_eq!(artifacts.markdown, dir.path().join(MARKDOWN_FILE_NAME));

        let json = fs::read_to_string(&artifacts.json).unwrap();
        assert_eq!(parse_json(&json).unwrap(), empty_result());

        let markdown = fs::read_to_string(&artifacts.markdown).unwrap();
        assert!(markdown.starts_with("# Project Context for GitHub Copilot\n"));
        assert!(markdown.contains("```\n{}\n... [truncated for readability]\n```"));
    }

    #[test]
    fn test_overwrites_previous_run() {
        let dir = TestRepo::new();
        dir.add_file(JSON_FILE_NAME, &"stale ".repeat(1000));
        dir.add_file(MARKDOWN_FILE_NAME, "stale");
        let config = OutputConfig::default().with_output_dir(dir.path());

        write_artifacts(&empty_result(), &config).unwrap();

        let json = fs::read_to_string(dir.path().join(JSON_FILE_NAME)).unwrap();
        assert!(!json.contains("stale"));
        let markdown = fs::read_to_string(dir.path().join(MARKDOWN_FILE_NAME)).unwrap();
        assert!(!markdown.contains("stale"));
    }

    #[test]
    fn test_missing_output_dir_is_fatal() {
        let dir = TestRepo::new();
        let config = OutputConfig::default().with_output_dir(dir.path().join("nope"));

        let err = write_artifacts(&empty_result(), &config).unwrap_err();
        match err {
            SnapshotError::Write { path, .. } => {
                assert_eq!(path, dir.path().join("nope").join(JSON_FILE_NAME))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
