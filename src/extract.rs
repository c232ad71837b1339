// src/extract.rs
//! Pulls the referenced identifier out of a classified line.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_TABLE_PREFIX, QUOTED_LITERAL_PATTERN};
use crate::error::{ExtractKind, Result, SpscanError};

static QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(QUOTED_LITERAL_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});
static TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?-u:\b){DEFAULT_TABLE_PREFIX}(?-u:\w)+"))
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Returns the inner text of the first double-quoted literal on the line.
///
/// Later literals (parameter values and the like) are ignored. No escape handling.
///
/// # Errors
/// Returns `ExtractionNotFound` if the line holds no non-empty quoted literal.
pub fn extract_sp_name(line: &str) -> Result<String> {
    let m = QUOTED_RE
        .find(line)
        .ok_or(SpscanError::ExtractionNotFound {
            kind: ExtractKind::StoredProcedure,
        })?;
    let quoted = m.as_str();
    Ok(quoted[1..quoted.len() - 1].to_string())
}

/// Returns every `tbl`-prefixed token on the line, left to right, duplicates kept.
///
/// Word characters and boundaries are ASCII only: `étblX` yields `tblX`, and a
/// token stops at the first non-ASCII letter.
///
/// # Errors
/// Returns `ExtractionNotFound` if no token matches.
pub fn extract_table_names(line: &str) -> Result<Vec<String>> {
    extract_table_names_with(line, &TABLE_RE)
}

/// Same as [`extract_table_names`] with a caller-supplied token pattern.
///
/// # Errors
/// Returns `ExtractionNotFound` if no token matches.
pub fn extract_table_names_with(line: &str, pattern: &Regex) -> Result<Vec<String>> {
    let names: Vec<String> = pattern
        .find_iter(line)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(SpscanError::ExtractionNotFound {
            kind: ExtractKind::Table,
        });
    }
    Ok(names)
}
