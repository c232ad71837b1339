// src/aggregator.rs
//! Runs the file scanner over a discovered file list and collects the [`Report`].

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{error, info};

use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::rules::RuleSet;
use crate::scanner::FileScanner;
use crate::types::{Record, Report};

pub struct Aggregator<'a> {
    rules: &'a RuleSet,
    extension: String,
    parallel: bool,
}

impl<'a> Aggregator<'a> {
    /// `extension` may be given with or without its leading dot.
    #[must_use]
    pub fn new(rules: &'a RuleSet, extension: &str) -> Self {
        Self {
            rules,
            extension: extension.trim_start_matches('.').to_string(),
            parallel: false,
        }
    }

    /// Scan files on the rayon pool. Record order still follows the input order.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn is_eligible(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Scans every eligible file, in the order given.
    ///
    /// Files of another type are skipped silently. Files that cannot be opened
    /// are logged and left out of the report.
    #[must_use]
    pub fn aggregate(&self, files: &[PathBuf]) -> Report {
        let scanner = FileScanner::new(self.rules);

        let records: Vec<Record> = if self.parallel {
            files
                .par_iter()
                .filter(|p| self.is_eligible(p))
                .filter_map(|p| scan_or_log(&scanner, p))
                .collect()
        } else {
            files
                .iter()
                .filter(|p| self.is_eligible(p))
                .filter_map(|p| scan_or_log(&scanner, p))
                .collect()
        };

        info!("scanned {} .{} file(s)", records.len(), self.extension);
        Report::from(records)
    }
}

fn scan_or_log(scanner: &FileScanner<'_>, path: &Path) -> Option<Record> {
    match scanner.scan_file(path) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("Error reading file: {e}");
            None
        }
    }
}

/// Free-function form of [`Aggregator::aggregate`] with sequential scanning.
#[must_use]
pub fn aggregate(files: &[PathBuf], rules: &RuleSet, extension: &str) -> Report {
    Aggregator::new(rules, extension).aggregate(files)
}

/// Discovers files under `config.root` and scans them with the configured rules.
///
/// # Errors
/// Returns error if the rule set is invalid or the root cannot be enumerated.
pub fn scan_tree(config: &Config) -> Result<Report> {
    let rules = RuleSet::from_config(&config.rules)?;
    let files = discovery::discover(config)?;
    Ok(Aggregator::new(&rules, config.extension())
        .parallel(config.scan.parallel)
        .aggregate(&files))
}
