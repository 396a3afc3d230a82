//! pocheck - missing translation finder for gettext catalogs
//!
//! pocheck is a CLI tool and library that scans `.po` files for entries whose
//! `msgstr` is empty, skipping the header entry, and reports each one with
//! the `msgid` lines above it.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, orchestration, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog loading, discovery and the line scanner
//! - `issues`: Result types produced by scanning

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
