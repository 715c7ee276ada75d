//! Keyword matcher construction for keymask.
//!
//! This module turns a caller-supplied keyword list into a single compiled
//! literal alternation. Keywords are always escaped, so their content is never
//! interpreted as pattern syntax, and they are ordered longest first so that a
//! keyword embedded in a longer one can never shadow it.

pub mod compiler;
