// src/bin/spscan.rs
use clap::Parser;
use colored::Colorize;
use spscan_core::cli::{self, Cli};
use spscan_core::exit::SpscanExit;
use spscan_core::logging;

fn main() -> SpscanExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(SpscanExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            SpscanExit::for_error(&e)
        }
    }
}
