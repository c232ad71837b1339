// src/constants.rs
//! Built-in rule catalog and scan defaults.

/// Data-access methods that execute a named stored procedure, in match order.
pub const STORED_PROCEDURE_METHODS: &[&str] = &[
    "ExecuteNonQuery",
    "ExecuteDataSet",
    "ExecuteNonQueryAsync",
    "ExecuteReader",
    "ExecuteReaderAsync",
    "ExecuteScalar",
    "ExecuteScalarAsync",
];

/// Helper methods that run an ad-hoc query against `tbl*` tables.
pub const TABLE_QUERY_METHODS: &[&str] = &["FillDropDownOnly"];

pub const DEFAULT_EXTENSION: &str = "cs";
pub const DEFAULT_COMMENT_MARKER: &str = "//";
pub const DEFAULT_TABLE_PREFIX: &str = "tbl";
pub const DEFAULT_OUTPUT_FILE: &str = "spscan_output.csv";

pub const CONFIG_FILE: &str = "spscan.toml";
pub const IGNORE_FILE: &str = ".spscanignore";

/// First double-quoted literal with at least one character inside.
pub const QUOTED_LITERAL_PATTERN: &str = r#""[^"]+""#;

// Build output and tooling directories never hold hand-written sources.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".vs",
    ".idea",
    "bin",
    "obj",
    "packages",
    "node_modules",
    "TestResults",
];

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}
