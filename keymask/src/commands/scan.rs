//! `scan` command: reports keyword occurrences without masking.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use keymask_core::{KeywordMasker, MaskSummaryItem, MaskingEngine};
use log::{info, warn};
use serde::Serialize;
use std::io::{self, Write};

use crate::cli::ScanCommand;
use crate::commands::input::{build_config, read_input};
use crate::ui::summary::print_summary;

/// Machine-readable scan output.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub total_matches: usize,
    pub keywords: Vec<MaskSummaryItem>,
}

impl ScanReport {
    pub fn new(keywords: Vec<MaskSummaryItem>) -> Self {
        let total_matches = keywords.iter().map(|k| k.occurrences).sum();
        Self { total_matches, keywords }
    }
}

/// Runs the scan. Returns `true` when the match count exceeded
/// `--fail-over-threshold`.
pub fn run_scan(cmd: ScanCommand, quiet: bool) -> Result<bool> {
    info!("Starting scan operation.");

    let config = build_config(&cmd.keyword_args, None)?;
    let engine = KeywordMasker::new(config).context("Failed to prepare keyword masker")?;
    let input = read_input(cmd.keyword_args.input_file.as_deref())?;

    let report = ScanReport::new(engine.summarize(&input));

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", json)?;
    } else if !quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        print_summary(&report.keywords, &mut stderr.lock(), supports_color)?;
    }

    let exceeded = cmd
        .fail_over_threshold
        .is_some_and(|threshold| report.total_matches > threshold);
    if exceeded {
        warn!(
            "Match count {} exceeds threshold {:?}.",
            report.total_matches, cmd.fail_over_threshold
        );
    }

    info!("Scan operation completed.");
    Ok(exceeded)
}
