//! Result types produced by scanning catalogs.
//!
//! These types carry everything the reporters need, so the scanner itself
//! never prints anything:
//! - `MissingTranslation`: one empty `msgstr` that is not the header entry
//! - `CatalogReport`: the outcome of scanning one catalog file

use serde::Serialize;

/// An empty translated string found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTranslation {
    /// Line number of the `msgstr ""` marker (1-indexed).
    pub line: usize,
    /// The trimmed marker line, always `msgstr ""`.
    pub marker: String,
    /// Trimmed `msgid` lines directly above the marker, nearest first.
    pub context: Vec<String>,
}

impl MissingTranslation {
    pub fn new(line: usize, marker: impl Into<String>, context: Vec<String>) -> Self {
        Self {
            line,
            marker: marker.into(),
            context,
        }
    }
}

/// Outcome of scanning a single catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOutcome {
    /// The catalog was read; entries are in file order.
    Scanned(Vec<MissingTranslation>),
    /// The catalog could not be opened, read or decoded.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub file_path: String,
    pub outcome: CatalogOutcome,
}

impl CatalogReport {
    pub fn scanned(file_path: impl Into<String>, missing: Vec<MissingTranslation>) -> Self {
        Self {
            file_path: file_path.into(),
            outcome: CatalogOutcome::Scanned(missing),
        }
    }

    pub fn unreadable(file_path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            outcome: CatalogOutcome::Unreadable(error.into()),
        }
    }

    /// Missing translations in this catalog; empty when it could not be read.
    pub fn missing(&self) -> &[MissingTranslation] {
        match &self.outcome {
            CatalogOutcome::Scanned(missing) => missing,
            CatalogOutcome::Unreadable(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            CatalogOutcome::Scanned(_) => None,
            CatalogOutcome::Unreadable(error) => Some(error.as_str()),
        }
    }
}
