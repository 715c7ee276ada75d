//! Input and keyword collection shared by the `mask` and `scan` commands.

use anyhow::{Context, Result};
use keymask_core::{merge_keywords, MaskConfig, MaskMode};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::KeywordArgs;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Parses a keywords file: one keyword per line, blank lines skipped.
///
/// Lines are taken literally apart from the line terminator, so leading or
/// trailing spaces stay part of the keyword.
pub fn parse_keywords_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Builds the effective configuration.
///
/// The YAML config is the base. Keywords from flags and the keywords file are
/// merged after it, `--ignore-case` can only switch case folding on, and
/// `fixed` replaces the configured mode when given.
pub fn build_config(args: &KeywordArgs, fixed: Option<usize>) -> Result<MaskConfig> {
    let base = match &args.config {
        Some(path) => MaskConfig::load_from_file(path)?,
        None => MaskConfig::default(),
    };

    let mut extra = args.keywords.clone();
    if let Some(path) = &args.keywords_file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;
        extra.extend(parse_keywords_file(&contents));
    }

    let config = MaskConfig {
        keywords: merge_keywords(&base.keywords, &extra),
        case_insensitive: base.case_insensitive || args.ignore_case,
        mode: fixed.map_or(base.mode, |length| MaskMode::Fixed { length }),
    };
    debug!(
        "Effective configuration: {} keywords, case_insensitive={}, mode={:?}",
        config.keywords.len(),
        config.case_insensitive,
        config.mode
    );
    Ok(config)
}
