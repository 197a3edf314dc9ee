//! File preview reading
//!
//! Reads the head of small files as UTF-8 text with universal newlines,
//! capped at a character budget.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use super::node::{Preview, TRUNCATION_MARKER};

/// Read a preview of at most `max_chars` characters from the first
/// `max_bytes` bytes of a file.
///
/// Never fails: binary content, permission errors and any other I/O error
/// produce [`Preview::Unreadable`]. The byte bound also holds for devices
/// and pseudo-files that report a size of zero.
pub fn read_preview(path: &Path, max_chars: usize, max_bytes: u64) -> Preview {
    // One byte over the bound tells a cut-off read from a file that fits.
    let limit = max_bytes.saturating_add(1);
    let mut bytes = match read_head(path, limit) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "preview read failed");
            return Preview::Unreadable;
        }
    };
    if bytes.len() as u64 == limit {
        trim_partial_char(&mut bytes);
    }

    match decode_preview(&bytes, max_chars) {
        Some(text) => Preview::Text(text),
        None => {
            debug!(path = %path.display(), "preview is not valid UTF-8");
            Preview::Unreadable
        }
    }
}

fn read_head(path: &Path, limit: u64) -> io::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    File::open(path)?.take(limit).read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Drop a multi-byte sequence split by the end of a bounded read.
fn trim_partial_char(bytes: &mut Vec<u8>) {
    if let Err(err) = std::str::from_utf8(bytes) {
        if err.error_len().is_none() {
            bytes.truncate(err.valid_up_to());
        }
    }
}

/// Decode raw bytes into preview text, or `None` if they are not UTF-8.
///
/// Any invalid byte makes the whole input unreadable, wherever it sits.
pub fn decode_preview(bytes: &[u8], max_chars: usize) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?;
    let normalized = normalize_newlines(text);
    Some(truncate_chars(&normalized, max_chars))
}

/// Translate `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Keep the first `max_chars` characters, marking the cut when the text
/// reaches the cap.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{}", &text[..end], TRUNCATION_MARKER),
        None if text.chars().count() == max_chars => format!("{}{}", text, TRUNCATION_MARKER),
        None => text.to_string(),
    }
}
