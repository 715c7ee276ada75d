// keymask-core/src/headless.rs
//! `headless.rs`
//! One-shot masking helpers for callers that hold a text and a keyword list
//! and want a masked string back, without building a `KeywordMasker`.
//!
//! These functions never fail. Empty text, an empty keyword list or a list of
//! empty strings returns the text unchanged. If a matcher cannot be built the
//! whole text is masked, so keywords are never returned in the clear.

use anyhow::Result;
use log::error;
use std::sync::Arc;

use crate::config::{MaskConfig, MaskMode};
use crate::engine::MaskingEngine;
use crate::engines::keyword_engine::{apply_matcher, KeywordMasker};
use crate::errors::KeymaskError;
use crate::sanitizers::compiler::{get_or_compile_matcher, CompiledMatcher};

fn mask_one_shot<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    case_insensitive: bool,
    mode: MaskMode,
) -> String {
    if text.is_empty() || keywords.is_empty() {
        return text.to_string();
    }

    mask_with_compiled(text, mode, get_or_compile_matcher(keywords, case_insensitive))
}

fn mask_with_compiled(
    text: &str,
    mode: MaskMode,
    compiled: Result<Option<Arc<CompiledMatcher>>, KeymaskError>,
) -> String {
    match compiled {
        Ok(Some(matcher)) => apply_matcher(&matcher, mode, text, false).0,
        Ok(None) => text.to_string(),
        Err(e) => {
            error!("Keyword matcher unavailable, masking the entire text: {}", e);
            mode.replacement_for(text)
        }
    }
}

/// Replaces every keyword occurrence with one asterisk per matched character.
///
/// Keywords are literal; longer keywords win over keywords they contain.
/// With `case_insensitive` the run length still follows the matched span.
pub fn mask_variable<S: AsRef<str>>(text: &str, keywords: &[S], case_insensitive: bool) -> String {
    mask_one_shot(text, keywords, case_insensitive, MaskMode::Variable)
}

/// Replaces every keyword occurrence with exactly `fixed_length` asterisks.
///
/// Matching is case-sensitive. A `fixed_length` of zero deletes matches.
pub fn mask_fixed<S: AsRef<str>>(text: &str, keywords: &[S], fixed_length: usize) -> String {
    mask_one_shot(text, keywords, false, MaskMode::Fixed { length: fixed_length })
}

/// Masks `content` with a full configuration, enforcing its keyword limits.
///
/// # Arguments
///
/// * `config` - Keywords, mode and case policy.
/// * `content` - The string to be masked.
pub fn headless_mask_string(config: MaskConfig, content: &str) -> Result<String> {
    let engine: Box<dyn MaskingEngine> = Box::new(KeywordMasker::new(config)?);
    Ok(engine.mask(content))
}
