use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_COMMENT_MARKER, DEFAULT_EXTENSION, DEFAULT_OUTPUT_FILE, DEFAULT_TABLE_PREFIX,
    STORED_PROCEDURE_METHODS, TABLE_QUERY_METHODS,
};
use crate::reporting::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_sp_methods")]
    pub stored_procedure_methods: Vec<String>,
    #[serde(default = "default_table_methods")]
    pub table_query_methods: Vec<String>,
    #[serde(default = "default_table_prefix")]
    pub table_prefix: String,
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            stored_procedure_methods: default_sp_methods(),
            table_query_methods: default_table_methods(),
            table_prefix: default_table_prefix(),
            comment_marker: default_comment_marker(),
        }
    }
}

fn default_sp_methods() -> Vec<String> {
    STORED_PROCEDURE_METHODS.iter().map(|s| (*s).to_string()).collect()
}
fn default_table_methods() -> Vec<String> {
    TABLE_QUERY_METHODS.iter().map(|s| (*s).to_string()).collect()
}
fn default_table_prefix() -> String { DEFAULT_TABLE_PREFIX.to_string() }
fn default_comment_marker() -> String { DEFAULT_COMMENT_MARKER.to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Source file suffix, with or without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub parallel: bool,
    /// Regexes matched against `/`-separated paths relative to the scan root.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            parallel: false,
            exclude: Vec::new(),
        }
    }
}

fn default_extension() -> String { DEFAULT_EXTENSION.to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub open: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: OutputFormat::default(),
            open: false,
        }
    }
}

fn default_output_path() -> PathBuf { PathBuf::from(DEFAULT_OUTPUT_FILE) }

/// On-disk shape of `spscan.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpscanToml {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub root: PathBuf,
    pub rules: RuleConfig,
    pub scan: ScanSettings,
    pub output: OutputSettings,
    pub exclude_patterns: Vec<regex::Regex>,
}
