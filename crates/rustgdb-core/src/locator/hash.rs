//! Content-hash locator

use super::{LineFingerprint, LineLocator};
use crate::editor::LineSource;
use sha2::{Digest, Sha256};

/// SHA-256 of a line's text with surrounding whitespace trimmed, hex encoded
pub fn hash_line(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Relocates a breakpoint to a line whose trimmed text hashes the same
///
/// The saved position is checked first, so an unedited file always resolves
/// to the original line even when identical lines exist elsewhere. Otherwise
/// the match nearest the saved position wins, and on equal distance the
/// earlier line wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct HashLocator;

impl LineLocator for HashLocator {
    fn name(&self) -> &str {
        "hash"
    }

    fn prepare(&self, line_text: &str) -> Option<LineFingerprint> {
        Some(LineFingerprint::hash(hash_line(line_text)))
    }

    fn locate(
        &self,
        lines: &dyn LineSource,
        fingerprint: &LineFingerprint,
        original_line: usize,
    ) -> Option<usize> {
        let target = fingerprint.line_hash.as_deref()?;

        if let Some(text) = lines.line(original_line) {
            if hash_line(&text) == target {
                return Some(original_line);
            }
        }

        let mut best: Option<usize> = None;
        for index in 0..lines.line_count() {
            let Some(text) = lines.line(index) else {
                continue;
            };
            if hash_line(&text) != target {
                continue;
            }
            // Only a strictly closer match replaces the current one, so ties keep the earlier line
            best = match best {
                Some(current) if current.abs_diff(original_line) <= index.abs_diff(original_line) => {
                    Some(current)
                }
                _ => Some(index),
            };
        }
        best
    }

    fn unresolved_reason(&self) -> &'static str {
        "hashed line location failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(text: &str) -> LineFingerprint {
        HashLocator.prepare(text).unwrap()
    }

    #[test]
    fn test_hash_ignores_surrounding_whitespace() {
        assert_eq!(hash_line("  let x = 42;\t"), hash_line("let x = 42;"));
        assert_ne!(hash_line("let x = 42;"), hash_line("let x = 43;"));
        assert_eq!(hash_line("").len(), 64);
    }

    #[test]
    fn test_prepare_only_sets_hash() {
        let fingerprint = fp("let x = 42;");
        assert!(fingerprint.line_hash.is_some());
        assert!(fingerprint.line_content.is_none());
    }

    #[test]
    fn test_unchanged_line_wins_over_duplicates() {
        let lines = vec!["dup();", "dup();", "dup();", "other();"];
        assert_eq!(HashLocator.locate(&lines, &fp("dup();"), 2), Some(2));
    }

    #[test]
    fn test_relocates_after_insertion() {
        let lines = vec!["// a", "// b", "fn main() {", "    let x = 42;", "}"];
        // Saved at 0-based line 1 before two lines were inserted above
        assert_eq!(HashLocator.locate(&lines, &fp("let x = 42;"), 1), Some(3));
    }

    #[test]
    fn test_equidistant_matches_prefer_earlier_line() {
        // Original line 2 changed; matches at 1 and 3 are both one away
        let lines = vec!["x", "target();", "changed", "target();", "y"];
        assert_eq!(HashLocator.locate(&lines, &fp("target();"), 2), Some(1));
    }

    #[test]
    fn test_nearest_match_wins_regardless_of_scan_order() {
        // Original line 10; matches at distances 3 (line 7), 1 (line 11), 5 (line 15)
        let mut lines: Vec<String> = (0..20).map(|i| format!("filler {}", i)).collect();
        lines[7] = "hit();".into();
        lines[11] = "hit();".into();
        lines[15] = "hit();".into();
        assert_eq!(HashLocator.locate(&lines, &fp("hit();"), 10), Some(11));
    }

    #[test]
    fn test_deleted_line_fails() {
        let lines = vec!["fn main() {", "}"];
        assert_eq!(HashLocator.locate(&lines, &fp("let x = 42;"), 1), None);
        assert_eq!(HashLocator.unresolved_reason(), "hashed line location failed");
    }

    #[test]
    fn test_missing_hash_is_unresolvable() {
        let lines = vec!["let x = 42;"];
        let content_only = LineFingerprint::content("let x = 42;");
        assert_eq!(HashLocator.locate(&lines, &content_only, 0), None);
    }

    #[test]
    fn test_original_past_end_still_scans() {
        let lines = vec!["keep();"];
        assert_eq!(HashLocator.locate(&lines, &fp("keep();"), 40), Some(0));
    }
}
