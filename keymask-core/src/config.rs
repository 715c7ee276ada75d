//! Configuration management for `keymask-core`.
//!
//! This module defines the data structures describing a masking job: the
//! keyword list, the masking mode and the case policy. It handles
//! deserialization of YAML configurations and provides utilities for loading,
//! merging and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::KeymaskError;

/// Maximum allowed length of a single keyword, in characters.
pub const MAX_KEYWORD_LENGTH: usize = 1024;

/// Maximum number of keywords accepted by a single configuration.
pub const MAX_KEYWORDS: usize = 10_000;

/// Maximum combined UTF-8 size of all keywords in a configuration.
///
/// Any configuration within the three limits compiles in either case mode.
pub const MAX_TOTAL_KEYWORD_BYTES: usize = 1 << 20;

/// How a matched span is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaskMode {
    /// One asterisk per character of the matched span.
    #[default]
    Variable,
    /// Exactly `length` asterisks per match. Zero deletes the match.
    Fixed { length: usize },
}

impl MaskMode {
    /// Builds the replacement for one matched span.
    pub fn replacement_for(&self, matched: &str) -> String {
        match self {
            MaskMode::Variable => "*".repeat(matched.chars().count()),
            MaskMode::Fixed { length } => "*".repeat(*length),
        }
    }
}

/// Top-level configuration for a masking run.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MaskConfig {
    /// Literal keywords to mask. Empty entries are ignored.
    pub keywords: Vec<String>,
    /// If true, keywords match regardless of letter case.
    pub case_insensitive: bool,
    /// Replacement policy for every match.
    pub mode: MaskMode,
}

impl MaskConfig {
    /// Creates a variable-length, case-sensitive configuration.
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            ..Self::default()
        }
    }

    /// Loads a masking configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading mask configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: MaskConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!("Loaded {} keywords from file {}.", config.keywords.len(), path.display());

        Ok(config)
    }

    /// Checks the keyword list against the configured limits.
    ///
    /// Empty keywords are reported but tolerated, since the masker skips them.
    pub fn validate(&self) -> Result<(), KeymaskError> {
        if self.keywords.len() > MAX_KEYWORDS {
            return Err(KeymaskError::TooManyKeywords(self.keywords.len(), MAX_KEYWORDS));
        }

        for (index, keyword) in self.keywords.iter().enumerate() {
            if keyword.is_empty() {
                warn!("Keyword #{} is empty and will be ignored.", index);
                continue;
            }
            let len = keyword.chars().count();
            if len > MAX_KEYWORD_LENGTH {
                return Err(KeymaskError::KeywordLengthExceeded(index, len, MAX_KEYWORD_LENGTH));
            }
        }

        let total_bytes: usize = self.keywords.iter().map(String::len).sum();
        if total_bytes > MAX_TOTAL_KEYWORD_BYTES {
            return Err(KeymaskError::TotalKeywordBytesExceeded(
                total_bytes,
                MAX_TOTAL_KEYWORD_BYTES,
            ));
        }

        debug!("Configuration validated: {} keywords, mode {:?}.", self.keywords.len(), self.mode);
        Ok(())
    }
}

/// Concatenates two keyword lists, dropping empty strings and exact
/// duplicates while keeping first-seen order.
pub fn merge_keywords(base: &[String], extra: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let merged: Vec<String> = base
        .iter()
        .chain(extra.iter())
        .filter(|k| !k.is_empty() && seen.insert(k.as_str()))
        .cloned()
        .collect();
    debug!(
        "merge_keywords: {} + {} -> {} keywords.",
        base.len(),
        extra.len(),
        merged.len()
    );
    merged
}
