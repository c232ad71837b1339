//! Plain-text listing for terminals and diffs.

use std::fmt::Write;

use crate::error::Result;
use crate::types::{LineRef, Report};

pub(super) fn render(report: &Report) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "SPSCAN REPORT")?;
    writeln!(
        out,
        "Files: {} | Stored procedure calls: {} | Table references: {}",
        report.len(),
        report.total_stored_procedures(),
        report.total_table_refs()
    )?;

    for record in report.records() {
        writeln!(out)?;
        writeln!(out, "{}", record.path().display())?;
        write_section(&mut out, "stored procedures", record.stored_procedures())?;
        write_section(&mut out, "tables", record.tables())?;
    }
    Ok(out)
}

fn write_section(out: &mut String, title: &str, refs: &[LineRef]) -> std::fmt::Result {
    writeln!(out, "  {title} ({})", refs.len())?;
    let width = refs.last().map_or(1, |r| r.line.to_string().len());
    for r in refs {
        writeln!(out, "    {:>width$}  {}", r.line, r.name)?;
    }
    Ok(())
}
