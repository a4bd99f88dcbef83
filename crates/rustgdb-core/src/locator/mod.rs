//! Line locators
//!
//! A saved breakpoint is a file plus a 1-based line. When the file changed
//! on disk between sessions, the saved line may no longer point at the
//! statement the user meant. A locator captures a fingerprint of the line
//! at save time and uses it at load time to find where that line went.
//!
//! Three locators ship built in:
//! - [`ExactLocator`]: trusts the saved position as long as it is in range
//! - [`HashLocator`]: SHA-256 of the trimmed line, nearest match wins
//! - [`JaccardLocator`]: token-set similarity with a 0.5 cutoff

mod exact;
mod hash;
mod jaccard;
mod registry;

pub use exact::ExactLocator;
pub use hash::{HashLocator, hash_line};
pub use jaccard::{JaccardLocator, SIMILARITY_THRESHOLD, jaccard_similarity, tokenize};
pub use registry::{LocatorKind, LocatorRegistry};

use crate::editor::LineSource;
use serde::{Deserialize, Serialize};

/// Auxiliary data captured for a line at save time
///
/// Each locator fills only the field it needs. The persisted record carries
/// both, so a locator must treat a missing field as "cannot resolve".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFingerprint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_content: Option<String>,
}

impl LineFingerprint {
    pub fn hash(digest: impl Into<String>) -> Self {
        Self {
            line_hash: Some(digest.into()),
            line_content: None,
        }
    }

    pub fn content(text: impl Into<String>) -> Self {
        Self {
            line_hash: None,
            line_content: Some(text.into()),
        }
    }
}

/// A line relocation strategy
///
/// Implementations hold no state of their own; the only input besides their
/// arguments is the buffer they are asked to search.
pub trait LineLocator: Send + Sync {
    /// Name used in configuration (`line_locator`)
    fn name(&self) -> &str;

    /// Capture auxiliary data for the breakpointed line's current text
    fn prepare(&self, line_text: &str) -> Option<LineFingerprint>;

    /// Find the 0-based line the saved breakpoint now belongs to
    fn locate(
        &self,
        lines: &dyn LineSource,
        fingerprint: &LineFingerprint,
        original_line: usize,
    ) -> Option<usize>;

    /// Reported to the user when `locate` returns `None`
    fn unresolved_reason(&self) -> &'static str;
}
