//! Mask summary rendering.
//!
//! Summaries identify keywords by fingerprint and length only, never by their
//! text.

use keymask_core::MaskSummaryItem;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Characters of the fingerprint shown in the summary.
const FINGERPRINT_PREFIX: usize = 12;

pub fn print_summary<W: Write>(
    summary: &[MaskSummaryItem],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No keywords matched.")?;
        return Ok(());
    }

    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    let header = format!("Mask Summary ({} match(es)):", total);
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    for item in summary {
        let fingerprint = &item.fingerprint[..FINGERPRINT_PREFIX.min(item.fingerprint.len())];
        let occurrences = format!("{} occurrence(s)", item.occurrences);
        if supports_color {
            writeln!(
                writer,
                "  {} ({} chars): {}",
                fingerprint.cyan(),
                item.char_len,
                occurrences.yellow()
            )?;
        } else {
            writeln!(writer, "  {} ({} chars): {}", fingerprint, item.char_len, occurrences)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymask_core::canonical_sample_hash;

    #[test]
    fn test_print_summary_plain() {
        let fingerprint = canonical_sample_hash("secret");
        let summary = vec![MaskSummaryItem {
            fingerprint: fingerprint.clone(),
            char_len: 6,
            occurrences: 2,
        }];
        let mut out = Vec::new();
        print_summary(&summary, &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Mask Summary (2 match(es)):"));
        assert!(text.contains(&fingerprint[..12]));
        assert!(text.contains("(6 chars): 2 occurrence(s)"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_print_summary_empty() {
        let mut out = Vec::new();
        print_summary(&[], &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No keywords matched.\n");
    }
}
