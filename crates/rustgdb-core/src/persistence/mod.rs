//! Breakpoint persistence
//!
//! Breakpoints are saved as a JSON array in `<workspace>/.rustgdb/breakpoints.json`:
//!
//! ```text
//! [
//!   { "file": "/abs/src/main.rs", "line": 12, "line_hash": "9f86d0..." },
//!   { "file": "/abs/src/lib.rs",  "line": 3,  "line_content": "    run();" }
//! ]
//! ```
//!
//! The record is the same whichever locator wrote it; fields a locator does
//! not use are omitted. Loading never fails: a missing, empty or corrupt file
//! yields no records.

use crate::error::{RustgdbError, RustgdbResult};
use crate::locator::LineFingerprint;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Hidden per-workspace directory holding rustgdb state
pub const STATE_DIR_NAME: &str = ".rustgdb";

/// File name of the breakpoint list inside [`STATE_DIR_NAME`]
pub const BREAKPOINTS_FILE_NAME: &str = "breakpoints.json";

/// On-disk form of one breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub file: String,
    /// 1-based line at save time
    pub line: usize,
    #[serde(flatten)]
    pub fingerprint: LineFingerprint,
}

impl PersistedRecord {
    pub fn new(file: impl Into<String>, line: usize, fingerprint: Option<LineFingerprint>) -> Self {
        Self {
            file: file.into(),
            line,
            fingerprint: fingerprint.unwrap_or_default(),
        }
    }
}

/// The workspace breakpoint file
#[derive(Debug, Clone)]
pub struct BreakpointFile {
    path: PathBuf,
}

impl BreakpointFile {
    /// Breakpoint file for a workspace root
    pub fn for_workspace(root: &Path) -> Self {
        Self {
            path: root.join(STATE_DIR_NAME).join(BREAKPOINTS_FILE_NAME),
        }
    }

    /// Breakpoint file at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all records, creating the state directory on demand
    pub fn save(&self, records: &[PersistedRecord]) -> RustgdbResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                RustgdbError::io_with_path(
                    format!("Failed to create state directory: {}", e),
                    dir.display().to_string(),
                )
            })?;
        }

        let content = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, content).map_err(|e| {
            RustgdbError::io_with_path(
                format!("Failed to write breakpoints: {}", e),
                self.path.display().to_string(),
            )
        })?;

        debug!("Saved {} breakpoint(s) to {:?}", records.len(), self.path);
        Ok(())
    }

    /// Read records, treating a missing, empty or corrupt file as empty
    ///
    /// Entries that do not look like a record are dropped individually so one
    /// bad entry does not cost the rest.
    pub fn load(&self) -> Vec<PersistedRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read breakpoints from {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring malformed breakpoint file {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        let records: Vec<PersistedRecord> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed breakpoint record: {}", e);
                    None
                }
            })
            .collect();

        debug!("Loaded {} breakpoint record(s) from {:?}", records.len(), self.path);
        records
    }

    /// Remove the file if it exists
    pub fn remove(&self) -> RustgdbResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
