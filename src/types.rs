use serde::Serialize;
use std::path::{Path, PathBuf};

/// One extracted name and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRef {
    pub line: usize,
    pub name: String,
}

/// Per-file results. Grows by appends only; counts always equal list lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    path: PathBuf,
    stored_procedure_count: usize,
    stored_procedures: Vec<LineRef>,
    table_count: usize,
    tables: Vec<LineRef>,
}

impl Record {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            stored_procedure_count: 0,
            stored_procedures: Vec::new(),
            table_count: 0,
            tables: Vec::new(),
        }
    }

    pub fn push_stored_procedure(&mut self, line: usize, name: String) {
        self.stored_procedures.push(LineRef { line, name });
        self.stored_procedure_count += 1;
    }

    /// Records every table token found on `line`, in order.
    pub fn push_tables(&mut self, line: usize, names: Vec<String>) {
        for name in names {
            self.tables.push(LineRef { line, name });
            self.table_count += 1;
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn stored_procedure_count(&self) -> usize {
        self.stored_procedure_count
    }

    #[must_use]
    pub fn stored_procedures(&self) -> &[LineRef] {
        &self.stored_procedures
    }

    #[must_use]
    pub fn table_count(&self) -> usize {
        self.table_count
    }

    #[must_use]
    pub fn tables(&self) -> &[LineRef] {
        &self.tables
    }

    /// Distinct line numbers that produced table references, ascending.
    #[must_use]
    pub fn table_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self.tables.iter().map(|t| t.line).collect();
        lines.dedup();
        lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stored_procedures.is_empty() && self.tables.is_empty()
    }
}

/// All records of one scan, in file discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    records: Vec<Record>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn total_stored_procedures(&self) -> usize {
        self.records.iter().map(Record::stored_procedure_count).sum()
    }

    #[must_use]
    pub fn total_table_refs(&self) -> usize {
        self.records.iter().map(Record::table_count).sum()
    }
}

impl From<Vec<Record>> for Report {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
