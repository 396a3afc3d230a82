use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::args::Arguments;
use crate::config::{ConfigLoadResult, load_config, load_config_file};
use crate::core::{check_catalog, collect_catalog_files};
use crate::issues::CatalogReport;

/// Result of scanning every requested catalog.
#[derive(Debug)]
pub struct RunResult {
    /// One report per catalog file, in scan order.
    pub reports: Vec<CatalogReport>,
    /// Directory entries that could not be accessed while collecting catalogs.
    pub skipped_count: usize,
}

impl RunResult {
    pub fn missing_count(&self) -> usize {
        self.reports.iter().map(|r| r.missing().len()).sum()
    }

    pub fn unreadable_count(&self) -> usize {
        self.reports.iter().filter(|r| r.error().is_some()).count()
    }
}

/// Resolve the catalogs to scan and scan each one in order.
///
/// Paths given on the command line are scanned as-is. Otherwise the catalogs
/// come from the config file (`--config` or the nearest `.pocheckrc.json`),
/// falling back to the built-in default.
///
/// # Returns
/// - `Ok(RunResult)` even when some catalogs could not be read
/// - `Err` if the config file is unreadable or invalid
pub fn run(args: &Arguments) -> Result<RunResult> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;

    let (base_dir, inputs, ignores) = if args.paths.is_empty() {
        let ConfigLoadResult {
            config,
            base_dir,
            from_file,
        } = match &args.config {
            Some(path) => load_config_file(path)?,
            None => load_config(&cwd)?,
        };
        debug!(from_file, base_dir = %base_dir.display(), "loaded configuration");
        (base_dir, config.catalogs, config.ignores)
    } else {
        (PathBuf::new(), args.paths.clone(), Vec::new())
    };

    let collected = collect_catalog_files(&base_dir, &inputs, &ignores);
    debug!(count = collected.files.len(), "collected catalog files");

    let reports = collected
        .files
        .iter()
        .map(|path| check_catalog(display_path(path, &cwd)))
        .collect();

    Ok(RunResult {
        reports,
        skipped_count: collected.skipped_count,
    })
}

/// Shorten paths under the working directory so reports stay readable.
fn display_path<'a>(path: &'a Path, cwd: &Path) -> &'a Path {
    match path.strip_prefix(cwd) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative,
        _ => path,
    }
}
