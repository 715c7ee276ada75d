// keymask-core/src/mask_match.rs
//! Provides core data structures and utility functions for reporting mask
//! matches and for logging them without leaking the masked keywords.

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

lazy_static! {
    /// Whether raw keyword text may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("KEYMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single masked occurrence.
///
/// `start`/`end` are byte offsets into the original text. `masked_start` and
/// `masked_end` locate the replacement in the masked output; they differ from
/// `start` by the cumulative length delta of every earlier replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MaskMatch {
    pub start: usize,
    pub end: usize,
    pub masked_start: usize,
    pub masked_end: usize,
    /// Length of the matched span in characters.
    pub char_len: usize,
    pub replacement: String,
    #[serde(default)]
    pub sample_hash: Option<String>,
}

impl MaskMatch {
    /// The matched span within `text`, or `None` when the offsets do not
    /// fit it (for instance a deserialized record paired with another text).
    pub fn original<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// Aggregated occurrences of one distinct matched span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSummaryItem {
    /// SHA-256 fingerprint of the matched text.
    pub fingerprint: String,
    pub char_len: usize,
    pub occurrences: usize,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_mask_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    replacement: &str,
    start: usize,
) {
    debug!(
        "{} Mask action at byte {}: Original='{}', Masked='{}'",
        module_path,
        start,
        get_loggable_content(original_sensitive_content),
        replacement
    );
}

/// Hex SHA-256 of a matched span, used as its fingerprint in reports.
pub fn canonical_sample_hash(snippet: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(snippet.as_bytes());
    hex::encode(hasher.finalize())
}

/// Fills in `sample_hash` for every match that does not carry one yet.
pub fn ensure_match_hashes(text: &str, matches: &mut [MaskMatch]) {
    for m in matches.iter_mut() {
        if m.sample_hash.is_none() {
            m.sample_hash = m.original(text).map(canonical_sample_hash);
        }
    }
}

/// Groups matches by matched text, ordered by first occurrence.
pub fn summarize_matches(text: &str, matches: &[MaskMatch]) -> Vec<MaskSummaryItem> {
    let mut summary: Vec<MaskSummaryItem> = Vec::new();
    for m in matches {
        let Some(fingerprint) = m
            .sample_hash
            .clone()
            .or_else(|| m.original(text).map(canonical_sample_hash))
        else {
            warn!("Skipping match {}..{}: offsets fall outside the text.", m.start, m.end);
            continue;
        };
        match summary.iter_mut().find(|item| item.fingerprint == fingerprint) {
            Some(item) => item.occurrences += 1,
            None => summary.push(MaskSummaryItem {
                fingerprint,
                char_len: m.char_len,
                occurrences: 1,
            }),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, char_len: usize) -> MaskMatch {
        MaskMatch {
            start,
            end,
            masked_start: start,
            masked_end: end,
            char_len,
            replacement: "*".repeat(char_len),
            sample_hash: None,
        }
    }

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars() {
        assert_eq!(redact_sensitive("自然语义科技公司"), "[REDACTED]".to_string());
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_canonical_sample_hash_is_case_sensitive() {
        assert_eq!(canonical_sample_hash("hanlp"), canonical_sample_hash("hanlp"));
        assert_ne!(canonical_sample_hash("hanlp"), canonical_sample_hash("HanLP"));
    }

    #[test]
    fn test_mask_match_deserializes_without_hash() {
        let json = r#"{"start":0,"end":3,"masked_start":0,"masked_end":3,"char_len":3,"replacement":"***"}"#;
        let m: MaskMatch = serde_json::from_str(json).unwrap();
        assert_eq!(m.replacement, "***");
        assert!(m.sample_hash.is_none());
    }

    #[test]
    fn test_original_rejects_foreign_offsets() {
        let m = span(4, 9, 5);
        assert_eq!(m.original("abcdtoken"), Some("token"));
        assert_eq!(m.original("short"), None);
        // Byte 4 of "北京" is inside the second character.
        assert_eq!(span(0, 4, 1).original("北京"), None);

        let mut records = vec![m];
        ensure_match_hashes("short", &mut records);
        assert!(records[0].sample_hash.is_none());
        assert!(summarize_matches("short", &records).is_empty());
    }

    #[test]
    fn test_summarize_groups_by_text_in_first_seen_order() {
        let text = "ab cd ab";
        let mut matches = vec![span(0, 2, 2), span(3, 5, 2), span(6, 8, 2)];
        ensure_match_hashes(text, &mut matches);
        let summary = summarize_matches(text, &matches);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].fingerprint, canonical_sample_hash("ab"));
        assert_eq!(summary[0].occurrences, 2);
        assert_eq!(summary[1].occurrences, 1);
    }
}
