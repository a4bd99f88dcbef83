//! Token-similarity locator

use super::{LineFingerprint, LineLocator};
use crate::editor::LineSource;
use std::collections::HashSet;

/// Lowest similarity accepted as a match
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Set of maximal alphanumeric/underscore runs in `text`, case-sensitive
pub fn tokenize(text: &str) -> HashSet<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .collect()
}

/// |A ∩ B| / |A ∪ B|, or 0 when both sets are empty
pub fn jaccard_similarity(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Relocates a breakpoint to the line whose tokens best overlap the saved
/// line's tokens
///
/// Tolerates renames and small rewrites. Among equally similar lines the one
/// nearest the saved position wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct JaccardLocator;

impl LineLocator for JaccardLocator {
    fn name(&self) -> &str {
        "jaccard"
    }

    fn prepare(&self, line_text: &str) -> Option<LineFingerprint> {
        Some(LineFingerprint::content(line_text))
    }

    fn locate(
        &self,
        lines: &dyn LineSource,
        fingerprint: &LineFingerprint,
        original_line: usize,
    ) -> Option<usize> {
        let stored = fingerprint.line_content.as_deref()?;
        let wanted = tokenize(stored);
        if wanted.is_empty() {
            return None;
        }

        // (line, similarity, distance)
        let mut best: Option<(usize, f64, usize)> = None;
        for index in 0..lines.line_count() {
            let Some(text) = lines.line(index) else {
                continue;
            };
            let similarity = jaccard_similarity(&wanted, &tokenize(&text));
            let distance = index.abs_diff(original_line);
            let better = match best {
                None => true,
                Some((_, best_similarity, best_distance)) => {
                    similarity > best_similarity
                        || (similarity == best_similarity && distance < best_distance)
                }
            };
            if better {
                best = Some((index, similarity, distance));
            }
        }

        best.filter(|&(_, similarity, _)| similarity >= SIMILARITY_THRESHOLD)
            .map(|(index, _, _)| index)
    }

    fn unresolved_reason(&self) -> &'static str {
        "no similar line found"
    }
}
