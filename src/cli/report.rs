//! Report formatting and printing utilities.
//!
//! Text output keeps the plain `Line <n>: ` / `  Context: ` layout so it can
//! be grepped and diffed. Separate from core logic to allow pocheck to be
//! used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use super::run::RunResult;
use crate::issues::{CatalogOutcome, CatalogReport, MissingTranslation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the scan result to stdout, plus a summary on stderr when verbose.
pub fn print(result: &RunResult, format: OutputFormat, verbose: bool) -> Result<()> {
    {
        let mut stdout = io::stdout().lock();
        match format {
            OutputFormat::Text => report_text_to(&result.reports, &mut stdout),
            OutputFormat::Json => report_json_to(&result.reports, &mut stdout)?,
        }
    }

    if verbose {
        print_summary_to(result, &mut io::stderr().lock());
    }

    Ok(())
}

/// Write text report blocks to a custom writer.
///
/// With a single catalog the output is only the report blocks (or the read
/// error). With several, each catalog that has output is introduced by a
/// `--> <path>` line.
pub fn report_text_to<W: Write>(reports: &[CatalogReport], writer: &mut W) {
    let show_paths = reports.len() > 1;

    for report in reports {
        let has_output = match &report.outcome {
            CatalogOutcome::Scanned(missing) => !missing.is_empty(),
            CatalogOutcome::Unreadable(_) => true,
        };
        if show_paths && has_output {
            let _ = writeln!(writer, "{} {}", "-->".blue(), report.file_path);
        }

        match &report.outcome {
            CatalogOutcome::Scanned(missing) => {
                for entry in missing {
                    print_missing(entry, writer);
                }
            }
            CatalogOutcome::Unreadable(error) => {
                let _ = writeln!(writer, "{}", error);
            }
        }
    }
}

/// Write a JSON array report to a custom writer.
pub fn report_json_to<W: Write>(reports: &[CatalogReport], writer: &mut W) -> Result<()> {
    let entries: Vec<JsonCatalogReport<'_>> = reports.iter().map(JsonCatalogReport::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &entries).context("Failed to write JSON report")?;
    writeln!(writer).context("Failed to write JSON report")?;
    Ok(())
}

/// Write a one-line summary of the run.
pub fn print_summary_to<W: Write>(result: &RunResult, writer: &mut W) {
    let catalogs = result.reports.len();
    let missing = result.missing_count();
    let unreadable = result.unreadable_count();
    let catalog_word = if catalogs == 1 { "catalog" } else { "catalogs" };

    if unreadable > 0 {
        let _ = writeln!(
            writer,
            "{} {} of {} {} could not be read",
            "warning:".bold().yellow(),
            unreadable,
            catalogs,
            catalog_word
        );
    }
    if result.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            result.skipped_count
        );
    }

    let msg = if missing == 0 {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} {} - no missing translations", catalogs, catalog_word).green()
        )
    } else {
        format!(
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "Checked {} {} - {} missing {}",
                catalogs,
                catalog_word,
                missing,
                if missing == 1 { "translation" } else { "translations" }
            )
            .red()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

fn print_missing<W: Write>(entry: &MissingTranslation, writer: &mut W) {
    let _ = writeln!(writer, "Line {}: {}", entry.line, entry.marker);
    for context in &entry.context {
        let _ = writeln!(writer, "  Context: {}", context);
    }
}

#[derive(Serialize)]
struct JsonCatalogReport<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'a [MissingTranslation]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<'a> From<&'a CatalogReport> for JsonCatalogReport<'a> {
    fn from(report: &'a CatalogReport) -> Self {
        match &report.outcome {
            CatalogOutcome::Scanned(missing) => Self {
                file: &report.file_path,
                missing: Some(missing.as_slice()),
                error: None,
            },
            CatalogOutcome::Unreadable(error) => Self {
                file: &report.file_path,
                missing: None,
                error: Some(error.as_str()),
            },
        }
    }
}
