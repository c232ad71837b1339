//! Console summary printed after a scan.

use crate::types::Report;
use colored::Colorize;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

const TOP_NAMES: usize = 10;

/// Prints totals and the most frequently called procedures to stdout.
pub fn print_summary(report: &Report, written_to: Option<&Path>) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", " SPSCAN SUMMARY".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!();

    let with_hits = report.records().iter().filter(|r| !r.is_empty()).count();
    println!("  {} {}", "Files Scanned:".white(), report.len());
    println!("  {} {}", "Files With Calls:".white(), with_hits);
    println!(
        "  {} {}",
        "Stored Procedure Calls:".white(),
        report.total_stored_procedures().to_string().cyan()
    );
    println!(
        "  {} {}",
        "Table References:".white(),
        report.total_table_refs().to_string().cyan()
    );

    print_top_procedures(report);

    if let Some(path) = written_to {
        println!();
        println!("  {} {}", "Report:".white(), path.display().to_string().green());
    }
    println!();
    println!("{}", "─".repeat(60).dimmed());
}

fn print_top_procedures(report: &Report) {
    let counts = procedure_counts(report);
    if counts.is_empty() {
        return;
    }

    println!();
    println!("{}", "  MOST CALLED PROCEDURES".yellow().bold());
    for (name, count) in counts.iter().take(TOP_NAMES) {
        println!("    {} {name}", format!("{count}x").cyan());
    }
}

/// Procedure names by call count, ties broken alphabetically.
fn procedure_counts(report: &Report) -> Vec<(&str, usize)> {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for sp in report.records().iter().flat_map(|r| r.stored_procedures()) {
        *by_name.entry(sp.name.as_str()).or_insert(0) += 1;
    }
    let mut sorted: Vec<_> = by_name.into_iter().collect();
    sorted.sort_by_key(|&(name, count)| (Reverse(count), name));
    sorted
}
