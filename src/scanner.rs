// src/scanner.rs
//! Per-file line walk: classify, extract, fold into a [`Record`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, SpscanError};
use crate::extract::{extract_sp_name, extract_table_names_with};
use crate::rules::{MatchCategory, RuleSet};
use crate::types::Record;

pub struct FileScanner<'a> {
    rules: &'a RuleSet,
}

impl<'a> FileScanner<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Opens `path` and scans it line by line.
    ///
    /// # Errors
    /// Returns `Io` if the path is not a readable regular file.
    pub fn scan_file(&self, path: &Path) -> Result<Record> {
        let io_err = |source| SpscanError::Io {
            source,
            path: path.to_path_buf(),
        };
        let file = File::open(path).map_err(io_err)?;
        if !file.metadata().map_err(io_err)?.is_file() {
            return Err(io_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        let record = self.scan_reader(path, BufReader::new(file))?;
        debug!(
            "{}: {} stored procedure call(s), {} table reference(s)",
            path.display(),
            record.stored_procedure_count(),
            record.table_count()
        );
        Ok(record)
    }

    /// Scans any line source. Invalid UTF-8 is replaced, not rejected.
    ///
    /// A read error after the first line ends the walk; lines already seen are kept.
    ///
    /// # Errors
    /// Returns `Io` if the very first read fails.
    pub fn scan_reader<R: BufRead>(&self, path: &Path, mut reader: R) -> Result<Record> {
        let mut record = Record::new(path);
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    line_no += 1;
                    let line = String::from_utf8_lossy(strip_eol(&buf));
                    self.scan_line(&mut record, line_no, &line);
                }
                Err(source) if line_no == 0 => {
                    return Err(SpscanError::Io {
                        source,
                        path: path.to_path_buf(),
                    });
                }
                Err(e) => {
                    warn!("{}: read stopped after line {line_no}: {e}", path.display());
                    break;
                }
            }
        }
        Ok(record)
    }

    fn scan_line(&self, record: &mut Record, line_no: usize, line: &str) {
        match self.rules.classify(line) {
            MatchCategory::None => {}
            MatchCategory::StoredProcedure => match extract_sp_name(line) {
                Ok(name) => record.push_stored_procedure(line_no, name),
                Err(e) => warn!("{}:{line_no}: {e}", record.path().display()),
            },
            MatchCategory::TableQuery => {
                match extract_table_names_with(line, self.rules.table_pattern()) {
                    Ok(names) => record.push_tables(line_no, names),
                    Err(e) => warn!("{}:{line_no}: {e}", record.path().display()),
                }
            }
        }
    }
}

/// Free-function form of [`FileScanner::scan_file`].
///
/// # Errors
/// Returns `Io` if the file cannot be opened.
pub fn scan_file(path: &Path, rules: &RuleSet) -> Result<Record> {
    FileScanner::new(rules).scan_file(path)
}

fn strip_eol(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tracing_test::traced_test;

    fn scan(src: &str) -> Record {
        let rules = RuleSet::builtin();
        FileScanner::new(&rules)
            .scan_reader(Path::new("mem.cs"), Cursor::new(src.as_bytes()))
            .unwrap()
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn line_numbers_survive_comments_and_misses() {
        let src = "\
// ExecuteReader(\"usp_Commented\")
var a = 1;
ExecuteNonQuery(cmd);
db.ExecuteScalar(cn, \"usp_Count\");
";
        let r = scan(src);
        assert_eq!(r.stored_procedure_count(), 1);
        assert_eq!(r.stored_procedures()[0].line, 4);
        assert_eq!(r.stored_procedures()[0].name, "usp_Count");
    }

    #[test]
    fn crlf_and_missing_trailing_newline() {
        let r = scan("x\r\nFillDropDownOnly(ddl, \"select a from tblA\")");
        assert_eq!(r.table_count(), 1);
        assert_eq!(r.tables()[0].line, 2);
        assert_eq!(r.tables()[0].name, "tblA");
    }

    #[test]
    fn invalid_utf8_does_not_stop_the_scan() {
        let mut bytes = b"caf\xe9\n".to_vec();
        bytes.extend_from_slice(b"ExecuteReader(cn, \"usp_After\")\n");
        let r = FileScanner::new(&RuleSet::builtin())
            .scan_reader(Path::new("x.cs"), Cursor::new(bytes))
            .unwrap();
        assert_eq!(r.stored_procedures()[0].line, 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let rules = RuleSet::builtin();
        let err = scan_file(Path::new("/definitely/not/here.cs"), &rules).unwrap_err();
        assert!(matches!(err, SpscanError::Io { .. }));
    }

    #[test]
    fn directory_is_not_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("Weird.cs");
        std::fs::create_dir(&fake).unwrap();
        let err = scan_file(&fake, &RuleSet::builtin()).unwrap_err();
        assert!(matches!(err, SpscanError::Io { .. }));
    }

    #[test]
    fn read_failure_before_first_line_is_an_error() {
        let rules = RuleSet::builtin();
        let reader = BufReader::new(FailingReader);
        let res = FileScanner::new(&rules).scan_reader(Path::new("gone.cs"), reader);
        assert!(matches!(res, Err(SpscanError::Io { .. })));
    }

    #[traced_test]
    #[test]
    fn extraction_miss_warns_with_location() {
        let r = scan("var a = ExecuteNonQuery;\nExecuteNonQuery(cmd);\n");
        assert_eq!(r.stored_procedure_count(), 0);
        assert!(logs_contain("mem.cs:2: No stored procedure name found on line"));
    }

    #[traced_test]
    #[test]
    fn table_miss_warns_with_location() {
        let r = scan("FillDropDownOnly(ddl, \"select 1\")\n");
        assert_eq!(r.table_count(), 0);
        assert!(logs_contain("mem.cs:1: No table name found on line"));
    }

    #[traced_test]
    #[test]
    fn unmatched_and_comment_lines_log_nothing() {
        let r = scan("var total = a + b;\n// ExecuteNonQuery(cmd);\n");
        assert!(r.is_empty());
        assert!(!logs_contain("mem.cs:"));
    }
}
