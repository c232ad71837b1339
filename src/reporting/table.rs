//! Spreadsheet table: one row per file, multi-value cells newline-joined.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{Result, SpscanError};
use crate::types::{LineRef, Record, Report};

pub const HEADERS: [&str; 7] = [
    "File Path",
    "SP Count",
    "SP Line No.",
    "SP List",
    "Table Count",
    "Table List",
    "Query Line No.",
];

pub(super) fn render(report: &Report) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::with_capacity(256 + report.len() * 128));
    wtr.write_record(HEADERS)?;
    for record in report.records() {
        wtr.write_record(cells(record))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| SpscanError::Csv(e.into_error().into()))?;
    // Cells come from `str` and `Path::display`, so the buffer is UTF-8.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn cells(record: &Record) -> [String; 7] {
    [
        record.path().display().to_string(),
        record.stored_procedure_count().to_string(),
        join_lines(record.stored_procedures()),
        join_names(record.stored_procedures()),
        record.table_count().to_string(),
        join_names(record.tables()),
        record
            .table_lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    ]
}

fn join_lines(refs: &[LineRef]) -> String {
    refs.iter()
        .map(|r| r.line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_names(refs: &[LineRef]) -> String {
    refs.iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
