// keymask-core/src/lib.rs
//! # keymask Core Library
//!
//! `keymask-core` masks caller-supplied keywords in text. Every literal
//! occurrence of a keyword is replaced by a run of asterisks, either one per
//! matched character or a fixed number per match, optionally ignoring case.
//!
//! The library is pure and stateless. It never mutates its inputs, performs no
//! I/O on the masking path and returns a freshly built string.
//!
//! ## Modules
//!
//! * `config`: `MaskConfig` and `MaskMode`, YAML loading and keyword limits.
//! * `sanitizers`: builds and caches the escaped, longest-first keyword matcher.
//! * `engine`: the `MaskingEngine` trait.
//! * `engines`: concrete engines, currently `KeywordMasker`.
//! * `mask_match`: match records, fingerprints and PII-safe debug logging.
//! * `headless`: the one-shot `mask_variable` and `mask_fixed` functions.
//! * `errors`: the `KeymaskError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use keymask_core::{mask_fixed, mask_variable};
//!
//! let text = "晓美焰来到北京立方庭参观";
//! let keywords = ["晓美焰", "北京立方庭"];
//!
//! assert_eq!(mask_variable(text, &keywords, false), "***来到*****参观");
//! assert_eq!(mask_fixed(text, &keywords, 3), "***来到***参观");
//! ```
//!
//! ## Error Handling
//!
//! `mask_variable` and `mask_fixed` never fail. The reusable
//! [`KeywordMasker`] and configuration loading return [`KeymaskError`] or
//! `anyhow::Error` for limit violations, invalid files and compilation
//! failures.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod mask_match;
pub mod sanitizers;

/// Re-exports the configuration types and limits.
pub use config::{
    merge_keywords, MaskConfig, MaskMode, MAX_KEYWORDS, MAX_KEYWORD_LENGTH, MAX_TOTAL_KEYWORD_BYTES,
};

/// Re-exports the custom error type.
pub use errors::KeymaskError;

/// Re-exports the engine trait and its keyword implementation.
pub use engine::MaskingEngine;
pub use engines::keyword_engine::KeywordMasker;

/// Re-exports match reporting types.
pub use mask_match::{canonical_sample_hash, redact_sensitive, MaskMatch, MaskSummaryItem};

/// Re-exports the one-shot masking functions.
pub use headless::{headless_mask_string, mask_fixed, mask_variable};

pub use sanitizers::compiler::{compile_matcher, get_or_compile_matcher, CompiledMatcher};
