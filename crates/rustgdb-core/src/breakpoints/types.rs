//! Breakpoint store value types

use serde::Serialize;
use std::fmt;

/// A breakpoint as seen by callers: file and current 1-based line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Breakpoint {
    pub file: String,
    pub line: usize,
}

impl Breakpoint {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Why a persisted breakpoint was not restored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The file no longer exists
    FileMissing,
    /// The file exists but could not be loaded into a buffer
    Unreadable(String),
    /// The locator could not place the line; carries its reason
    Unresolved(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileMissing => f.write_str("file missing"),
            Self::Unreadable(message) => write!(f, "unreadable: {}", message),
            Self::Unresolved(reason) => f.write_str(reason),
        }
    }
}

/// A persisted breakpoint that was skipped during load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBreakpoint {
    pub file: String,
    /// 1-based line recorded in the breakpoint file
    pub line: usize,
    pub reason: SkipReason,
}

/// Outcome of loading persisted breakpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    /// Breakpoints now tracked, at their resolved lines; one entry per record
    /// even when several records resolved onto the same line
    pub restored: Vec<Breakpoint>,
    pub skipped: Vec<SkippedBreakpoint>,
}

impl RestoreReport {
    pub fn total(&self) -> usize {
        self.restored.len() + self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// One-line summary shown after a load
    pub fn summary(&self) -> String {
        format!(
            "Restored {} breakpoint(s), {} failed",
            self.restored.len(),
            self.skipped.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_text() {
        assert_eq!(SkipReason::FileMissing.to_string(), "file missing");
        assert_eq!(SkipReason::Unresolved("out of range").to_string(), "out of range");
    }

    #[test]
    fn test_report_summary() {
        let report = RestoreReport {
            restored: vec![Breakpoint::new("/w/a.rs", 3)],
            skipped: vec![SkippedBreakpoint {
                file: "/w/a.rs".into(),
                line: 7,
                reason: SkipReason::Unresolved("out of range"),
            }],
        };
        assert_eq!(report.total(), 2);
        assert_eq!(report.summary(), "Restored 1 breakpoint(s), 1 failed");
        assert!(RestoreReport::default().is_empty());
    }
}
