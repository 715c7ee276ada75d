//! errors.rs - Custom error types for the keymask-core library.
//!
//! This module defines a structured error enum for the fallible layer of the
//! library (matcher compilation and configuration). The two one-shot masking
//! functions never surface these errors to their callers.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `keymask-core`.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KeymaskError {
    #[error("Failed to compile matcher for {0} keyword(s): {1}")]
    MatcherCompilation(usize, regex::Error),

    #[error("Failed to build literal matcher for {0} keyword(s): {1}")]
    LiteralMatcherBuild(usize, aho_corasick::BuildError),

    #[error("Keyword #{0}: length ({1} chars) exceeds maximum allowed ({2})")]
    KeywordLengthExceeded(usize, usize, usize),

    #[error("Keywords total {0} bytes, maximum allowed is {1}")]
    TotalKeywordBytesExceeded(usize, usize),

    #[error("Too many keywords: {0} supplied, maximum allowed is {1}")]
    TooManyKeywords(usize, usize),
}
