// src/core/locator.rs
use crate::core::line::KeyValueLine;
use crate::models::ScanResult;

/// The front-matter delimiter. No other marker is recognised.
pub const DELIMITER: &str = "---";

/// Scans `lines` from the top for `key` until the second delimiter.
///
/// The first matching line wins. Lines at or after the closing delimiter are
/// never inspected. A document without a closing delimiter reports the key as
/// missing with no `block_end`, exactly like a document that lacks the key.
#[must_use]
pub fn locate(lines: &[String], key: &str) -> ScanResult {
    let mut delimiters: u8 = 0;

    for (index, line) in lines.iter().enumerate() {
        if line == DELIMITER {
            delimiters = delimiters.saturating_add(1);
            if delimiters == 2 {
                return ScanResult::missing(Some(index));
            }
            continue;
        }

        let kv = KeyValueLine::parse(line);
        if kv.key == key {
            return ScanResult::found(index, kv.value);
        }
    }

    ScanResult::missing(None)
}
