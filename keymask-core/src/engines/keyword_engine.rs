// keymask-core/src/engines/keyword_engine.rs
//! A `MaskingEngine` implementation that masks literal keywords.
//! License: MIT OR APACHE 2.0

use log::{debug, log_enabled, Level};
use std::sync::Arc;

use crate::config::{MaskConfig, MaskMode};
use crate::engine::MaskingEngine;
use crate::errors::KeymaskError;
use crate::mask_match::{
    ensure_match_hashes, log_mask_action_debug, summarize_matches, MaskMatch, MaskSummaryItem,
};
use crate::sanitizers::compiler::{get_or_compile_matcher, CompiledMatcher};

/// Rebuilds `content` with every match of `matcher` replaced according to `mode`.
///
/// Unmodified spans are copied into a fresh buffer between matches. `delta`
/// is the cumulative byte-length change of all earlier replacements, which
/// maps an original offset to its position in the output. When `collect` is
/// false no match records are kept.
pub(crate) fn apply_matcher(
    matcher: &CompiledMatcher,
    mode: MaskMode,
    content: &str,
    collect: bool,
) -> (String, Vec<MaskMatch>) {
    let mut masked = String::with_capacity(content.len());
    let mut matches = Vec::new();
    let mut last_end = 0usize;
    let mut delta: isize = 0;
    let trace = log_enabled!(Level::Debug);

    for span in matcher.find_spans(content) {
        let found = &content[span.clone()];
        masked.push_str(&content[last_end..span.start]);

        let replacement = mode.replacement_for(found);
        let masked_start = (span.start as isize + delta) as usize;
        debug_assert_eq!(masked_start, masked.len());
        masked.push_str(&replacement);
        delta += replacement.len() as isize - found.len() as isize;

        if trace {
            log_mask_action_debug(module_path!(), found, &replacement, span.start);
        }
        if collect {
            matches.push(MaskMatch {
                start: span.start,
                end: span.end,
                masked_start,
                masked_end: masked_start + replacement.len(),
                char_len: found.chars().count(),
                replacement,
                sample_hash: None,
            });
        }
        last_end = span.end;
    }
    masked.push_str(&content[last_end..]);

    debug!(
        "Masked content: {} -> {} bytes (delta {}).",
        content.len(),
        masked.len(),
        delta
    );
    (masked, matches)
}

/// Reusable masker for one keyword set.
///
/// The compiled matcher is shared through the global cache, so cloning a
/// `KeywordMasker` or building several for the same keywords is cheap.
#[derive(Debug, Clone)]
pub struct KeywordMasker {
    matcher: Option<Arc<CompiledMatcher>>,
    config: MaskConfig,
}

impl KeywordMasker {
    /// Validates `config` against the keyword limits and compiles its matcher.
    pub fn new(config: MaskConfig) -> Result<Self, KeymaskError> {
        config.validate()?;
        Self::without_limits(config)
    }

    /// Compiles the matcher without applying the keyword count and length limits.
    pub fn without_limits(config: MaskConfig) -> Result<Self, KeymaskError> {
        let matcher = get_or_compile_matcher(&config.keywords, config.case_insensitive)?;
        Ok(Self { matcher, config })
    }

    /// Number of non-empty keywords the masker will look for.
    pub fn keyword_count(&self) -> usize {
        self.matcher.as_ref().map_or(0, |m| m.keyword_count)
    }

    fn run(&self, content: &str, collect: bool) -> (String, Vec<MaskMatch>) {
        match &self.matcher {
            Some(matcher) if !content.is_empty() => {
                apply_matcher(matcher, self.config.mode, content, collect)
            }
            _ => (content.to_string(), Vec::new()),
        }
    }
}

impl MaskingEngine for KeywordMasker {
    fn mask(&self, content: &str) -> String {
        self.run(content, false).0
    }

    fn mask_with_report(&self, content: &str) -> (String, Vec<MaskMatch>) {
        self.run(content, true)
    }

    fn find_matches(&self, content: &str) -> Vec<MaskMatch> {
        let (_, mut matches) = self.run(content, true);
        ensure_match_hashes(content, &mut matches);
        matches
    }

    fn summarize(&self, content: &str) -> Vec<MaskSummaryItem> {
        summarize_matches(content, &self.find_matches(content))
    }

    fn mode(&self) -> MaskMode {
        self.config.mode
    }

    fn config(&self) -> &MaskConfig {
        &self.config
    }
}
