//! Report rendering and writing.
//!
//! The core hands a finished [`Report`] to one of these writers. Rendering is
//! pure; only [`write_report`] touches the filesystem.

mod console;
mod json;
mod table;
mod text;

pub use console::print_summary;

use crate::error::{Result, SpscanError};
use crate::types::Report;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Spreadsheet table, one row per file.
    #[default]
    Csv,
    Json,
    Text,
}

impl OutputFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Text => "txt",
        }
    }
}

/// Renders the report in the requested format.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Csv => table::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Text => text::render(report),
    }
}

/// Renders and writes the report to `path`.
///
/// # Errors
/// Returns `Write` error if the file cannot be written.
pub fn write_report(report: &Report, format: OutputFormat, path: &Path) -> Result<()> {
    let out = render(report, format)?;
    fs::write(path, out).map_err(|source| SpscanError::Write {
        source,
        path: path.to_path_buf(),
    })
}
