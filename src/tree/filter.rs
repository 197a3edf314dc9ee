//! Path filtering for tree walking

use regex::RegexSet;

use crate::error::{Result, SnapshotError};

/// Ignore filter built from regular-expression patterns.
///
/// A path is ignored when any pattern matches anywhere in its
/// root-relative, `/`-separated form.
#[derive(Debug, Clone)]
pub struct IgnoreFilter(RegexSet);

impl IgnoreFilter {
    /// Compile the given patterns into a filter.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let exprs: Vec<&str> = patterns.iter().map(|p| p.as_ref()).collect();
        // Compile one by one first so the error names the bad pattern.
        for pattern in &exprs {
            if let Err(source) = regex::Regex::new(pattern) {
                return Err(SnapshotError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                });
            }
        }
        let set = RegexSet::new(&exprs).map_err(|source| SnapshotError::InvalidPattern {
            pattern: exprs.join(" | "),
            source,
        })?;
        Ok(Self(set))
    }

    /// Check if a relative path should be left out of the snapshot.
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.0.is_match(relative_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::config::DEFAULT_IGNORE_PATTERNS;

    fn default_filter() -> IgnoreFilter {
        IgnoreFilter::new(DEFAULT_IGNORE_PATTERNS).unwrap()
    }

    #[test]
    fn test_default_patterns() {
        let filter = default_filter();
        assert!(filter.is_ignored(".git"));
        assert!(filter.is_ignored("node_modules"));
        assert!(filter.is_ignored("pkg/node_modules/left-pad/index.js"));
        assert!(filter.is_ignored("src/__pycache__"));
        assert!(filter.is_ignored(".env"));
        assert!(filter.is_ignored(".vscode/settings.json"));
        assert!(filter.is_ignored(".idea"));
        assert!(filter.is_ignored("venv/bin/python"));
        assert!(filter.is_ignored("dist"));
        assert!(filter.is_ignored("build"));
        assert!(filter.is_ignored("assets/.DS_Store"));

        assert!(!filter.is_ignored("src/main.rs"));
        assert!(!filter.is_ignored("README.md"));
        assert!(!filter.is_ignored("docs/guide.md"));
    }

    #[test]
    fn test_unanchored_search_quirk() {
        let filter = default_filter();
        // Substring search: anything containing a pattern is dropped.
        assert!(filter.is_ignored("my-build-notes.txt"));
        assert!(filter.is_ignored(".gitignore"));
        assert!(filter.is_ignored(".env.example"));
        assert!(filter.is_ignored("docs/distribution.md"));
        // `\.git` needs the literal dot.
        assert!(!filter.is_ignored("digit.txt"));
    }

    #[test]
    fn test_custom_anchored_pattern() {
        let filter = IgnoreFilter::new(&[r"^target(/|$)", r"\.log$"]).unwrap();
        assert!(filter.is_ignored("target"));
        assert!(filter.is_ignored("target/debug/app"));
        assert!(!filter.is_ignored("src/target.rs"));
        assert!(filter.is_ignored("logs/app.log"));
        assert!(!filter.is_ignored("logs/app.log.gz"));
    }

    #[test]
    fn test_empty_pattern_list_ignores_nothing() {
        let filter = IgnoreFilter::new::<&str>(&[]).unwrap();
        assert!(!filter.is_ignored(".git"));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = IgnoreFilter::new(&["ok", "(broken"]).unwrap_err();
        match err {
            SnapshotError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(broken"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
