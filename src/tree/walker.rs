//! TreeWalker - builds the snapshot tree in memory
//!
//! Traversal is iterative: each open directory is a frame on an explicit
//! stack, so native stack depth stays constant no matter how deep the tree
//! goes. Finished frames are folded into their parent's children map.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;
use super::node::{Children, FileRecord, Marker, Node};
use super::preview::read_preview;

/// A directory entry, resolved once when its parent is listed.
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// A directory whose entries are still being consumed.
struct Frame {
    /// Key of this directory in its parent.
    name: String,
    /// Path relative to the scan root ("" for the root).
    relative: String,
    depth: usize,
    entries: std::vec::IntoIter<Entry>,
    children: Children,
}

impl Frame {
    fn new(name: String, relative: String, depth: usize, entries: Vec<Entry>) -> Self {
        Self {
            name,
            relative,
            depth,
            entries: entries.into_iter(),
            children: Children::new(),
        }
    }
}

/// Tree walker producing the root [`Node`] of a snapshot.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: IgnoreFilter,
}

impl TreeWalker {
    /// Create a walker, compiling the configured ignore patterns.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let filter = IgnoreFilter::new(&config.ignore_patterns)?;
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and return its directory node.
    ///
    /// Never fails: a root that cannot be listed becomes
    /// [`Marker::PermissionDenied`], as does any unlistable subdirectory.
    pub fn walk(&self, root: &Path) -> Node {
        let entries = match list_dir(root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %root.display(), error = %err, "cannot list scan root");
                return Node::Marker(Marker::PermissionDenied);
            }
        };

        let mut stack = vec![Frame::new(String::new(), String::new(), 0, entries)];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                let Some(done) = stack.pop() else { break };
                let node = Node::Directory(done.children);
                match stack.last_mut() {
                    Some(parent) => {
                        parent.children.insert(done.name, node);
                    }
                    None => return node,
                }
                continue;
            };

            let relative = join_relative(&frame.relative, &entry.name);
            if self.filter.is_ignored(&relative) {
                continue;
            }

            if !entry.is_dir {
                let record = self.file_record(&entry.path, relative);
                frame.children.insert(entry.name, Node::File(record));
                continue;
            }

            let depth = frame.depth + 1;
            if depth > self.config.max_depth {
                frame
                    .children
                    .insert(entry.name, Node::Marker(Marker::DepthLimitReached));
                continue;
            }

            match list_dir(&entry.path) {
                Ok(entries) => stack.push(Frame::new(entry.name, relative, depth, entries)),
                Err(err) => {
                    debug!(path = %entry.path.display(), error = %err, "cannot list directory");
                    frame
                        .children
                        .insert(entry.name, Node::Marker(Marker::PermissionDenied));
                }
            }
        }

        // The root frame always returns from inside the loop.
        Node::Directory(Children::new())
    }

    fn file_record(&self, path: &Path, relative: String) -> FileRecord {
        let size = file_size(path);
        let preview = (self.config.include_content && size <= self.config.max_read_size)
            .then(|| {
                read_preview(path, self.config.preview_chars, self.config.max_read_size)
            });
        FileRecord {
            path: relative,
            size,
            preview,
        }
    }
}

/// Read and sort the entries of a directory.
fn list_dir(path: &Path) -> std::io::Result<Vec<Entry>> {
    let mut entries: Vec<_> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    Ok(entries
        .into_iter()
        .map(|e| {
            let path = e.path();
            // Follows symlinks; a broken link counts as a file.
            let is_dir = fs::metadata(&path).is_ok_and(|m| m.is_dir());
            Entry {
                name: e.file_name().to_string_lossy().into_owned(),
                path,
                is_dir,
            }
        })
        .collect())
}

/// Size of the file a path points to, falling back to the link itself.
fn file_size(path: &Path) -> u64 {
    fs::metadata(path)
        .or_else(|_| fs::symlink_metadata(path))
        .map(|m| m.len())
        .unwrap_or(0)
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
