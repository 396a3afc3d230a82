//! Line-based detection of untranslated catalog entries.
//!
//! This is not a `.po` parser. A catalog is treated as a flat
//! list of lines:
//!
//! - An entry marker is any line whose trimmed content is exactly `msgstr ""`.
//! - A marker directly below a trimmed `msgid ""` line is the header entry and
//!   is never reported. This holds wherever the pair appears in the file.
//! - Context is every consecutive line above the marker that starts with
//!   `msgid` (untrimmed), collected bottom-up.

use tracing::debug;

use super::Catalog;
use crate::issues::MissingTranslation;

/// Trimmed content of an empty translated string.
pub const EMPTY_MSGSTR: &str = r#"msgstr """#;

/// Trimmed content of an empty source string (the header entry).
pub const EMPTY_MSGID: &str = r#"msgid """#;

/// Prefix of lines collected as context above an entry marker.
pub const MSGID_PREFIX: &str = "msgid";

/// Find every non-header empty `msgstr` in a catalog, in file order.
pub fn scan(catalog: &Catalog) -> Vec<MissingTranslation> {
    let missing = scan_lines(catalog.lines());
    debug!(
        file = catalog.file_path(),
        lines = catalog.lines().len(),
        missing = missing.len(),
        "scanned catalog"
    );
    missing
}

/// Scan raw catalog lines.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Vec<MissingTranslation> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == EMPTY_MSGSTR)
        .filter(|&(index, _)| {
            let header = is_header(&lines, index);
            if header {
                debug!(line = index + 1, "skipping header entry");
            }
            !header
        })
        .map(|(index, line)| {
            MissingTranslation::new(index + 1, line.trim(), collect_context(&lines, index))
        })
        .collect()
}

fn is_header(lines: &[&str], index: usize) -> bool {
    index > 0 && lines[index - 1].trim() == EMPTY_MSGID
}

fn collect_context(lines: &[&str], index: usize) -> Vec<String> {
    lines[..index]
        .iter()
        .rev()
        .take_while(|line| line.starts_with(MSGID_PREFIX))
        .map(|line| line.trim().to_string())
        .collect()
}
