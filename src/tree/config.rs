//! Configuration types for the tree walker

/// Patterns excluded from every snapshot.
///
/// Each is a regular expression searched (unanchored) against the path
/// relative to the scan root, so `build` also hides `my-build-notes.txt`.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"\.git",
    r"node_modules",
    r"__pycache__",
    r"\.env",
    r"\.vscode",
    r"\.idea",
    r"venv",
    r"dist",
    r"build",
    r"\.DS_Store",
];

/// Deepest directory level that is still enumerated (root = 0).
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Maximum number of characters kept in a file preview.
pub const MAX_FILE_PREVIEW_CHARS: usize = 1000;

/// Files larger than this (in bytes) never get a preview.
pub const MAX_FILE_SIZE_TO_READ: u64 = 100_000;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Directories deeper than this become `MAX_DEPTH_REACHED`.
    pub max_depth: usize,
    /// Attach text previews to small files.
    pub include_content: bool,
    pub preview_chars: usize,
    pub max_read_size: u64,
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    /// Append extra ignore patterns to the current set.
    pub fn with_extra_ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include_content: true,
            preview_chars: MAX_FILE_PREVIEW_CHARS,
            max_read_size: MAX_FILE_SIZE_TO_READ,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_depth, 4);
        assert!(config.include_content);
        assert_eq!(config.preview_chars, 1000);
        assert_eq!(config.max_read_size, 100_000);
        assert_eq!(config.ignore_patterns.len(), DEFAULT_IGNORE_PATTERNS.len());
    }

    #[test]
    fn test_extra_ignores_are_appended() {
        let config = WalkerConfig::default().with_extra_ignores(["target", r"\.log$"]);
        let n = config.ignore_patterns.len();
        assert_eq!(&config.ignore_patterns[n - 2..], &["target", r"\.log$"]);
        assert_eq!(config.ignore_patterns[0], r"\.git");
    }
}
