//! Snapshot tree types
//!
//! The JSON shape is kept compatible with plain-string sentinels
//! (`"MAX_DEPTH_REACHED"`, `"[PERMISSION_DENIED]"`, ...), but in memory every
//! sentinel is its own variant so real file content can never be mistaken
//! for a control signal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Suffix appended to a preview that was cut at the character cap.
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Preview value for files that are binary or could not be read.
pub const UNREADABLE_PREVIEW: &str = "[binary or unreadable file]";

/// Children of a directory, in sorted name order.
pub type Children = IndexMap<String, Node>;

/// A node in the snapshot tree.
///
/// Serialized untagged: a directory is a JSON object keyed by child name,
/// a file is a `{path, size, preview?}` record, and a marker is a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    File(FileRecord),
    Marker(Marker),
    Directory(Children),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Children of a directory node.
    pub fn children(&self) -> Option<&Children> {
        match self {
            Node::Directory(children) => Some(children),
            _ => None,
        }
    }

    /// Look up a descendant by `/`-separated path relative to this node.
    pub fn get(&self, relative_path: &str) -> Option<&Node> {
        relative_path
            .split('/')
            .filter(|part| !part.is_empty())
            .try_fold(self, |node, part| node.children()?.get(part))
    }

    pub fn as_file(&self) -> Option<&FileRecord> {
        match self {
            Node::File(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_marker(&self) -> Option<Marker> {
        match self {
            Node::Marker(marker) => Some(*marker),
            _ => None,
        }
    }
}

/// Stand-in for a subtree that was not enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The directory lies deeper than the configured maximum depth.
    #[serde(rename = "MAX_DEPTH_REACHED")]
    DepthLimitReached,
    /// The directory's entries could not be listed.
    #[serde(rename = "[PERMISSION_DENIED]")]
    PermissionDenied,
}

/// Leaf record for a regular file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRecord {
    /// Path relative to the scan root, `/`-separated.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

/// Text preview of a file, or the marker for content that could not be read.
///
/// Both cases serialize as a plain string. A text file whose content is
/// exactly [`UNREADABLE_PREVIEW`] therefore decodes back as `Unreadable`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Preview {
    Text(String),
    Unreadable,
}

impl Preview {
    pub fn text(&self) -> Option<&str> {
        match self {
            Preview::Text(text) => Some(text),
            Preview::Unreadable => None,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.text().is_some_and(|t| t.ends_with(TRUNCATION_MARKER))
    }
}

impl From<String> for Preview {
    fn from(value: String) -> Self {
        if value == UNREADABLE_PREVIEW {
            Preview::Unreadable
        } else {
            Preview::Text(value)
        }
    }
}

impl From<Preview> for String {
    fn from(value: Preview) -> Self {
        match value {
            Preview::Text(text) => text,
            Preview::Unreadable => UNREADABLE_PREVIEW.to_string(),
        }
    }
}
