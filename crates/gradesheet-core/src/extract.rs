//! HTML-to-text extraction.
//!
//! Markup handling is delegated to the `scraper` crate; this module only
//! linearizes a document's text nodes and reads file content as best-effort
//! text.

use std::path::Path;

use scraper::Html;

/// Render markup to plain text: text nodes concatenated in document order.
///
/// Whitespace already present between tags survives as-is; no other
/// structure (tables, lists) is preserved.
pub fn html_to_text(html: &str) -> String {
    Html::parse_document(html).root_element().text().collect()
}

/// Read a file's content as best-effort text.
///
/// Invalid UTF-8 sequences are replaced rather than surfaced. Returns
/// `None` (with a warning) when the file cannot be read at all; the caller
/// skips such files.
pub fn read_text(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!("skipping {}: {}", path.display(), e);
            None
        }
    }
}
