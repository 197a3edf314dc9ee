//! Snapshot collection
//!
//! The Collect stage of a run: walk the tree, stamp the time and probe git.

use std::path::Path;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::git::GitInfo;
use crate::tree::{Node, TreeWalker, WalkerConfig};

/// Everything one run captured, in artifact key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Local time the snapshot was taken, ISO-8601 without offset.
    pub timestamp: String,
    pub structure: Node,
    pub git: GitInfo,
}

impl ScanResult {
    /// Walk `root` and collect git metadata for it.
    pub fn collect(root: &Path, config: WalkerConfig) -> Result<Self> {
        let walker = TreeWalker::new(config)?;
        Ok(Self::collect_with(&walker, root))
    }

    /// Same as [`ScanResult::collect`] with an already built walker.
    pub fn collect_with(walker: &TreeWalker, root: &Path) -> Self {
        Self {
            timestamp: timestamp_now(),
            structure: walker.walk(root),
            git: GitInfo::collect(root),
        }
    }
}

/// Current local time as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn timestamp_now() -> String {
    format_timestamp(chrono::Local::now().naive_local())
}

/// ISO 8601 without offset; the fraction is left out when it is zero.
fn format_timestamp(time: NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
