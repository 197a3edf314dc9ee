//! Markdown output formatting
//!
//! Renders the human-oriented session summary: timestamp, git state, a
//! bounded excerpt of the structure JSON and fixed usage instructions.

use std::fmt::Write;

use crate::error::Result;
use crate::git::GitInfo;
use crate::snapshot::ScanResult;

use super::config::OutputConfig;
use super::json::to_pretty_json;

/// Notice closing the structure excerpt.
pub const STRUCTURE_TRUNCATION_NOTICE: &str = "... [truncated for readability]";

const TITLE: &str = "# Project Context for GitHub Copilot";

const USAGE_INSTRUCTIONS: &[&str] = &[
    "Start each Copilot session by sharing this context",
    "Refer to existing file structures before making changes",
    "Document completed and pending tasks in each session",
];

/// Markdown formatter for a finished snapshot.
pub struct MarkdownFormatter {
    config: OutputConfig,
    output: String,
}

impl MarkdownFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Render the whole document.
    pub fn format(mut self, result: &ScanResult) -> Result<String> {
        self.write_header(&result.timestamp);
        self.write_git(&result.git);
        let structure = to_pretty_json(&result.structure)?;
        self.write_structure(&structure);
        self.write_usage();
        Ok(self.output)
    }

    fn write_header(&mut self, timestamp: &str) {
        self.output.push_str(TITLE);
        self.output.push_str("\n\n");
        let _ = write!(self.output, "Generated: {}\n\n", timestamp);
    }

    fn write_git(&mut self, git: &GitInfo) {
        let GitInfo::Available {
            branch,
            recent_commits,
        } = git
        else {
            return;
        };

        self.output.push_str("## Git Information\n\n");
        let _ = write!(self.output, "Branch: `{}`\n\n", branch);
        if !recent_commits.is_empty() {
            self.output.push_str("Recent commits:\n\n");
            for commit in recent_commits {
                let _ = writeln!(self.output, "- {}", commit);
            }
            self.output.push('\n');
        }
    }

    fn write_structure(&mut self, structure_json: &str) {
        self.output.push_str("## Project Structure\n\n");
        self.output.push_str("```\n");
        self.output
            .push_str(truncate_chars(structure_json, self.config.structure_char_budget));
        self.output.push('\n');
        self.output.push_str(STRUCTURE_TRUNCATION_NOTICE);
        self.output.push_str("\n```\n\n");
    }

    fn write_usage(&mut self) {
        self.output.push_str("## Usage Instructions\n\n");
        for (i, line) in USAGE_INSTRUCTIONS.iter().enumerate() {
            let _ = writeln!(self.output, "{}. {}", i + 1, line);
        }
    }
}

/// Render the Markdown artifact.
pub fn render_markdown(result: &ScanResult, config: &OutputConfig) -> Result<String> {
    MarkdownFormatter::new(config.clone()).format(result)
}

/// First `max_chars` characters of `text`.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
