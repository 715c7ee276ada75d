// keymask-core/src/engine.rs
//! Defines the core `MaskingEngine` trait.
//!
//! The trait decouples callers (the CLI, one-shot helpers) from the concrete
//! masking implementation, so they can hold a `&dyn MaskingEngine` and stay
//! unaware of how matches are found.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{MaskConfig, MaskMode};
use crate::mask_match::{MaskMatch, MaskSummaryItem};

/// Core functionality of a masking engine.
pub trait MaskingEngine: Send + Sync {
    /// Returns a masked copy of `content`.
    fn mask(&self, content: &str) -> String;

    /// Masks `content` and returns every match in text order alongside the
    /// output.
    fn mask_with_report(&self, content: &str) -> (String, Vec<MaskMatch>);

    /// Finds all matches without keeping the masked output.
    ///
    /// Used by the `scan` command. Matches carry their fingerprint hash.
    fn find_matches(&self, content: &str) -> Vec<MaskMatch>;

    /// Per-keyword occurrence summary for `content`.
    fn summarize(&self, content: &str) -> Vec<MaskSummaryItem>;

    /// The replacement policy in use.
    fn mode(&self) -> MaskMode;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &MaskConfig;
}
