// keymask/src/main.rs
//! keymask entry point.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use keymask::cli::{Cli, Commands};
use keymask::commands::{mask::run_mask, scan::run_scan};
use keymask::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match cli.command {
        Commands::Mask(cmd) => run_mask(cmd, cli.quiet)?,
        Commands::Scan(cmd) => {
            if run_scan(cmd, cli.quiet)? {
                eprintln!("Match count exceeds the configured threshold.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
