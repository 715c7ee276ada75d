//! compiler.rs - Builds and caches keyword matchers.
//!
//! This module provides a thread-safe, cached mechanism to convert a keyword
//! list into a `CompiledMatcher`. It uses a global, shared cache to avoid
//! recompiling the same keyword set on every call.
//!
//! Case-sensitive keyword sets compile to a leftmost-first Aho-Corasick
//! automaton. Case-insensitive sets need Unicode case folding and compile to
//! a regex alternation with no size ceiling; the keyword limits in `config`
//! are what bound its cost.
//!
//! License: MIT OR APACHE 2.0

use aho_corasick::{AhoCorasick, MatchKind};
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock};

use crate::errors::KeymaskError;

/// Number of matchers kept in the global cache before it is flushed.
pub const MAX_CACHED_MATCHERS: usize = 256;

/// The automaton behind a `CompiledMatcher`.
#[derive(Debug)]
pub enum MatchEngine {
    /// Exact matching, longest keyword first.
    Literal(AhoCorasick),
    /// Escaped alternation with Unicode case folding.
    Folding(Regex),
}

/// A compiled keyword set.
#[derive(Debug)]
pub struct CompiledMatcher {
    pub engine: MatchEngine,
    /// Number of non-empty keywords in the set.
    pub keyword_count: usize,
    /// Whether the set ignores letter case.
    pub case_insensitive: bool,
}

impl CompiledMatcher {
    /// Byte ranges of successive non-overlapping matches, left to right.
    ///
    /// At any start position the first keyword in longest-first order wins.
    pub fn find_spans<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Range<usize>> + 'a> {
        match &self.engine {
            MatchEngine::Literal(ac) => Box::new(ac.find_iter(text).map(|m| m.range())),
            MatchEngine::Folding(regex) => Box::new(regex.find_iter(text).map(|m| m.range())),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        match &self.engine {
            MatchEngine::Literal(ac) => ac.is_match(text),
            MatchEngine::Folding(regex) => regex.is_match(text),
        }
    }
}

type CacheKey = (String, bool);

lazy_static! {
    /// Global matcher cache keyed by the alternation source and case flag.
    static ref COMPILED_MATCHER_CACHE: RwLock<HashMap<CacheKey, Arc<CompiledMatcher>>> =
        RwLock::new(HashMap::new());
}

/// Non-empty keywords sorted by descending character length.
///
/// The sort is stable, so keywords of equal length keep the caller's order.
pub fn sorted_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<&str> {
    let mut literals: Vec<&str> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty())
        .collect();
    literals.sort_by_key(|k| Reverse(k.chars().count()));
    literals
}

fn escape_and_join(literals: &[&str]) -> String {
    literals
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<String>>()
        .join("|")
}

/// Builds the escaped alternation source for a keyword list.
///
/// Returns `None` when no non-empty keyword survives.
pub fn build_alternation<S: AsRef<str>>(keywords: &[S]) -> Option<(String, usize)> {
    let literals = sorted_keywords(keywords);
    if literals.is_empty() {
        return None;
    }
    Some((escape_and_join(&literals), literals.len()))
}

fn compile_sorted(
    literals: &[&str],
    pattern: &str,
    case_insensitive: bool,
) -> Result<CompiledMatcher, KeymaskError> {
    let keyword_count = literals.len();
    debug!(
        "Compiling matcher over {} keyword(s) (case_insensitive={}).",
        keyword_count, case_insensitive
    );

    let engine = if case_insensitive {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .size_limit(usize::MAX)
            .build()
            .map_err(|e| KeymaskError::MatcherCompilation(keyword_count, e))?;
        MatchEngine::Folding(regex)
    } else {
        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostFirst)
            .build(literals)
            .map_err(|e| KeymaskError::LiteralMatcherBuild(keyword_count, e))?;
        MatchEngine::Literal(ac)
    };

    log::debug!(
        target: "keymask_core::sanitizer",
        "Matcher for {} keyword(s) compiled successfully.",
        keyword_count
    );
    Ok(CompiledMatcher {
        engine,
        keyword_count,
        case_insensitive,
    })
}

/// Compiles a keyword list without consulting the cache.
///
/// Returns `Ok(None)` when the list holds no non-empty keyword.
pub fn compile_matcher<S: AsRef<str>>(
    keywords: &[S],
    case_insensitive: bool,
) -> Result<Option<CompiledMatcher>, KeymaskError> {
    let literals = sorted_keywords(keywords);
    if literals.is_empty() {
        return Ok(None);
    }
    let pattern = escape_and_join(&literals);
    compile_sorted(&literals, &pattern, case_insensitive).map(Some)
}

/// Gets a matcher from the cache or compiles it if not found.
///
/// Returns an `Arc` so the matcher can be shared across threads cheaply.
pub fn get_or_compile_matcher<S: AsRef<str>>(
    keywords: &[S],
    case_insensitive: bool,
) -> Result<Option<Arc<CompiledMatcher>>, KeymaskError> {
    let literals = sorted_keywords(keywords);
    if literals.is_empty() {
        debug!("No non-empty keywords supplied; nothing to compile.");
        return Ok(None);
    }
    let cache_key = (escape_and_join(&literals), case_insensitive);

    {
        let cache = COMPILED_MATCHER_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(matcher) = cache.get(&cache_key) {
            debug!("Serving matcher for {} keyword(s) from cache.", literals.len());
            return Ok(Some(Arc::clone(matcher)));
        }
    }

    let compiled = Arc::new(compile_sorted(&literals, &cache_key.0, case_insensitive)?);

    let mut cache = COMPILED_MATCHER_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if cache.len() >= MAX_CACHED_MATCHERS {
        debug!("Matcher cache full ({} entries); flushing.", cache.len());
        cache.clear();
    }
    cache.insert(cache_key, Arc::clone(&compiled));

    Ok(Some(compiled))
}
