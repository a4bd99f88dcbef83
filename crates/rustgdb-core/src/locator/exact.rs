//! Position-only locator

use super::{LineFingerprint, LineLocator};
use crate::editor::LineSource;

/// Restores a breakpoint at its saved line if the buffer still has it
///
/// No drift compensation is attempted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactLocator;

impl LineLocator for ExactLocator {
    fn name(&self) -> &str {
        "exact"
    }

    fn prepare(&self, _line_text: &str) -> Option<LineFingerprint> {
        None
    }

    fn locate(
        &self,
        lines: &dyn LineSource,
        _fingerprint: &LineFingerprint,
        original_line: usize,
    ) -> Option<usize> {
        (original_line < lines.line_count()).then_some(original_line)
    }

    fn unresolved_reason(&self) -> &'static str {
        "out of range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {}", i + 1)).collect()
    }

    #[test]
    fn test_prepare_captures_nothing() {
        assert_eq!(ExactLocator.prepare("let x = 1;"), None);
    }

    #[test]
    fn test_locate_in_range() {
        let lines = buffer(5);
        let fp = LineFingerprint::default();
        assert_eq!(ExactLocator.locate(&lines, &fp, 0), Some(0));
        assert_eq!(ExactLocator.locate(&lines, &fp, 4), Some(4));
    }

    #[test]
    fn test_locate_out_of_range() {
        let lines = buffer(5);
        let fp = LineFingerprint::default();
        assert_eq!(ExactLocator.locate(&lines, &fp, 5), None);
        assert_eq!(ExactLocator.locate(&lines, &fp, 6), None);
        assert_eq!(ExactLocator.unresolved_reason(), "out of range");
    }

    #[test]
    fn test_saved_line_restores_iff_within_line_count() {
        let fp = LineFingerprint::default();
        for n in 0..8 {
            let lines = buffer(n);
            for saved in 1..=10usize {
                let restored = ExactLocator.locate(&lines, &fp, saved - 1).is_some();
                assert_eq!(restored, saved <= n, "n={} saved={}", n, saved);
            }
        }
    }
}
