//! `spscan` inventories data-access calls in a source tree.
//!
//! Each line of every source file is classified against a catalog of
//! stored-procedure and table-query helper methods; the referenced procedure
//! or table names are extracted and folded into one [`types::Record`] per file.

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod extract;
pub mod logging;
pub mod platform;
pub mod reporting;
pub mod rules;
pub mod scanner;
pub mod types;

pub use aggregator::{aggregate, scan_tree, Aggregator};
pub use extract::{extract_sp_name, extract_table_names};
pub use rules::{classify, MatchCategory, RuleSet};
pub use scanner::{scan_file, FileScanner};
pub use types::{LineRef, Record, Report};
