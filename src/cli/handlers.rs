//! Scan and rules command handlers.

use crate::aggregator;
use crate::config::Config;
use crate::constants::DEFAULT_OUTPUT_FILE;
use crate::exit::SpscanExit;
use crate::platform;
use crate::reporting::{self, OutputFormat};
use crate::rules::RuleSet;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::args::ScanArgs;

/// Handles the scan command.
///
/// # Errors
/// Returns error if config loading, enumeration, or report writing fails.
pub fn handle_scan(args: &ScanArgs) -> Result<SpscanExit> {
    let config = build_config(args)?;
    let report = aggregator::scan_tree(&config)
        .with_context(|| format!("Scan of {} failed", config.root.display()))?;

    let format = config.output.format;
    if args.stdout {
        print!("{}", reporting::render(&report, format)?);
        return Ok(SpscanExit::Success);
    }

    let out_path = output_path(&config.output.path, format);
    reporting::write_report(&report, format, &out_path)?;
    info!("report saved to {}", out_path.display());
    reporting::print_summary(&report, Some(&out_path));

    if config.output.open {
        let dir = platform::report_dir(&out_path);
        if let Err(e) = platform::open_in_file_manager(dir) {
            warn!("{e:#}");
        }
    }
    Ok(SpscanExit::Success)
}

/// Handles the rules command.
///
/// # Errors
/// Returns error if the config file is malformed.
pub fn handle_rules(root: &Path, config_path: Option<&Path>) -> Result<SpscanExit> {
    let config = Config::load(root, config_path)?;
    let rules = RuleSet::from_config(&config.rules)?;

    println!("{}", "Stored procedure methods".yellow().bold());
    for m in rules.stored_procedure_methods() {
        println!("  {m}");
    }
    println!("{}", "Table query methods".yellow().bold());
    for m in rules.table_query_methods() {
        println!("  {m}");
    }
    println!("{} {}", "Table pattern:".white(), rules.table_pattern().as_str());
    println!("{} {}", "Comment marker:".white(), rules.comment_marker());
    println!("{} .{}", "Extension:".white(), config.extension());
    Ok(SpscanExit::Success)
}

/// Loads the config for `args.root` and applies command-line overrides.
///
/// # Errors
/// Returns error if the config file or an exclude pattern is invalid.
pub fn build_config(args: &ScanArgs) -> Result<Config> {
    let mut config = Config::load(&args.root, args.config.as_deref())?;

    if let Some(ext) = &args.ext {
        config.scan.extension.clone_from(ext);
    }
    if let Some(path) = &args.output {
        config.output.path.clone_from(path);
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.output.open |= args.open;
    config.scan.parallel |= args.parallel;
    for pattern in &args.exclude {
        config.add_exclude(pattern)?;
    }
    Ok(config)
}

/// Swaps the default file's extension to match a non-CSV format.
fn output_path(path: &Path, format: OutputFormat) -> PathBuf {
    if path == Path::new(DEFAULT_OUTPUT_FILE) {
        path.with_extension(format.extension())
    } else {
        path.to_path_buf()
    }
}
