//! Directory tree walking logic
//!
//! `TreeWalker` enumerates a directory in sorted order, drops ignored paths,
//! attaches size and preview data to files and stops at a configured depth.
//! The result is a [`Node`] tree that serializes to the snapshot JSON.

mod config;
mod filter;
mod node;
mod preview;
mod walker;

// Re-export public types
pub use config::{
    DEFAULT_IGNORE_PATTERNS, DEFAULT_MAX_DEPTH, MAX_FILE_PREVIEW_CHARS, MAX_FILE_SIZE_TO_READ,
    WalkerConfig,
};
pub use filter::IgnoreFilter;
pub use node::{Children, FileRecord, Marker, Node, Preview, TRUNCATION_MARKER, UNREADABLE_PREVIEW};
pub use preview::{decode_preview, read_preview};
pub use walker::TreeWalker;
