//! Output configuration types

use std::path::{Path, PathBuf};

/// File name of the full JSON snapshot.
pub const JSON_FILE_NAME: &str = "copilot_project_context.json";

/// File name of the Markdown summary.
pub const MARKDOWN_FILE_NAME: &str = "copilot_session_context.md";

/// Characters of structure JSON embedded in the Markdown summary.
pub const DEFAULT_STRUCTURE_CHAR_BUDGET: usize = 2000;

/// Configuration for artifact rendering and writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory both artifacts are written into.
    pub output_dir: PathBuf,
    pub structure_char_budget: usize,
}

impl OutputConfig {
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(JSON_FILE_NAME)
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.output_dir.join(MARKDOWN_FILE_NAME)
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            structure_char_budget: DEFAULT_STRUCTURE_CHAR_BUDGET,
        }
    }
}
