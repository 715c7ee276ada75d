//! `mask` command: writes a masked copy of the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use keymask_core::{KeywordMasker, MaskingEngine, mask_match::summarize_matches};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};

use crate::cli::MaskCommand;
use crate::commands::input::{build_config, read_input};
use crate::ui::summary::print_summary;

pub fn run_mask(cmd: MaskCommand, quiet: bool) -> Result<()> {
    info!("Starting mask operation.");

    let config = build_config(&cmd.keyword_args, cmd.fixed)?;
    if config.keywords.is_empty() {
        warn!("No keywords supplied; input will be passed through unchanged.");
    }
    let engine = KeywordMasker::new(config).context("Failed to prepare keyword masker")?;
    let input = read_input(cmd.keyword_args.input_file.as_deref())?;

    let (masked, matches) = engine.mask_with_report(&input);
    debug!(
        "Content masked. Original length: {}, masked length: {}, matches: {}",
        input.len(),
        masked.len(),
        matches.len()
    );

    match &cmd.output {
        Some(path) => {
            info!("Writing masked content to file: {}", path.display());
            fs::write(path, &masked)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(masked.as_bytes())?;
            writer.flush()?;
        }
    }

    if !cmd.no_summary && !quiet {
        let summary = summarize_matches(&input, &matches);
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        print_summary(&summary, &mut stderr.lock(), supports_color)?;
    }

    info!("Mask operation completed.");
    Ok(())
}
