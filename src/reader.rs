use crate::entry::Entry;
use crate::error::{Error, Result};
use encoding_rs::UTF_16LE;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lines starting with this character are comments.
const COMMENT_MARKER: char = '!';

/// Read a UTF-16LE IME dictionary file and return its entries in file order.
pub fn read_dictionary(path: &Path) -> Result<Vec<Entry>> {
    let bytes = fs::read(path).map_err(|source| Error::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_dictionary(&bytes))
}

/// Decode and parse an in-memory dictionary.
///
/// The bytes are UTF-16LE unless a byte-order mark says otherwise; a BOM is
/// stripped. Malformed code units decode to U+FFFD.
pub fn parse_dictionary(bytes: &[u8]) -> Vec<Entry> {
    let (text, encoding, had_errors) = UTF_16LE.decode(bytes);
    if had_errors {
        warn!("Source contains malformed {} sequences, replaced with U+FFFD", encoding.name());
    }
    debug!("Decoded source as {}", encoding.name());

    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match Entry::from_line(line) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!("Parsed {} entries, skipped {} incomplete rows", entries.len(), skipped);
    entries
}
