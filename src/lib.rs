//! ctxsnap - snapshot a project's structure and git state as assistant context

pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, SnapshotError};
pub use git::GitInfo;
pub use output::{Artifacts, OutputConfig, parse_json, render_json, render_markdown, write_artifacts};
pub use snapshot::ScanResult;
pub use tree::{FileRecord, Marker, Node, Preview, TreeWalker, WalkerConfig};
