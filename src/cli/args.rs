use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(
    name = "spscan",
    version,
    about = "Inventory stored-procedure calls and table queries in a source tree"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory tree and write the usage report
    Scan(ScanArgs),
    /// Print the rule catalog that a scan of ROOT would use
    Rules {
        #[arg(default_value = ".")]
        root: PathBuf,
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,
    /// Source file extension to scan (default: cs)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,
    /// Report file (default: spscan_output.csv)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
    /// Open the report folder in the file manager afterwards
    #[arg(long)]
    pub open: bool,
    /// Scan files on all cores
    #[arg(long)]
    pub parallel: bool,
    /// Config file (default: ROOT/spscan.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Regex of paths (relative to ROOT) to skip; repeatable
    #[arg(long, value_name = "REGEX")]
    pub exclude: Vec<String>,
}
