//! Catalog loading, discovery and scanning.
//!
//! - `catalog`: a `.po` file held as raw lines
//! - `file_scanner`: resolve paths, directories and globs to catalog files
//! - `scanner`: find empty `msgstr` entries that are not the header

mod catalog;
pub mod file_scanner;
pub mod scanner;

pub use catalog::Catalog;
pub use file_scanner::{CatalogFiles, collect_catalog_files};
pub use scanner::{scan, scan_lines};

use std::path::Path;

use crate::issues::CatalogReport;

/// Load and scan one catalog, capturing read failures in the report.
pub fn check_catalog(path: &Path) -> CatalogReport {
    match Catalog::load(path) {
        Ok(catalog) => CatalogReport::scanned(catalog.file_path(), scan(&catalog)),
        Err(err) => {
            tracing::debug!(file = %path.display(), error = %err, "catalog could not be read");
            CatalogReport::unreadable(path.to_string_lossy(), format!("{:#}", err))
        }
    }
}
