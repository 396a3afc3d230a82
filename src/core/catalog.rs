use std::{fs, path::Path};

use anyhow::{Context, Result};

/// A gettext catalog (`.po`) held as raw lines.
///
/// Lines keep their original line endings. The catalog is loaded once,
/// scanned once and dropped; nothing here writes back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    file_path: String,
    lines: Vec<String>,
}

impl Catalog {
    /// Read a catalog from disk as UTF-8 text.
    ///
    /// Fails if the file cannot be opened, read, or is not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Ok(Self::from_text(path.to_string_lossy(), &content))
    }

    /// Build a catalog from already loaded text.
    pub fn from_text(file_path: impl Into<String>, content: &str) -> Self {
        Self {
            file_path: file_path.into(),
            lines: split_lines(content),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Split text into lines, keeping each terminator.
///
/// `\r\n`, `\r` and `\n` all end a line, the same set universal-newline
/// readers accept.
fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        let end = match ch {
            '\n' => index + 1,
            '\r' => match chars.peek() {
                Some(&(next, '\n')) => {
                    chars.next();
                    next + 1
                }
                _ => index + 1,
            },
            _ => continue,
        };
        lines.push(content[start..end].to_string());
        start = end;
    }

    if start < content.len() {
        lines.push(content[start..].to_string());
    }
    lines
}
