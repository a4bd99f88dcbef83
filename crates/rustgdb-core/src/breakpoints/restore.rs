//! Loading persisted breakpoints back into the store

use super::store::{BreakpointStore, Tracked, normalize_file};
use super::types::{Breakpoint, RestoreReport, SkipReason, SkippedBreakpoint};
use crate::debugger::break_command;
use crate::editor::{BufferLines, EditorHost, NotifyLevel};
use crate::persistence::PersistedRecord;
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of placing one persisted record
enum Restored {
    Placed(Breakpoint),
    /// The resolved line already carried a breakpoint
    AlreadyTracked(Breakpoint),
}

impl<E: EditorHost> BreakpointStore<E> {
    /// Restore breakpoints from the breakpoint file; no-op without persistence
    ///
    /// Each record is resolved independently through the configured locator.
    /// Records that cannot be placed are reported and skipped. The file is
    /// not rewritten, so skipped records survive until the next mutation.
    pub fn load(&mut self) -> RestoreReport {
        let Some(file) = self.persistence.as_ref() else {
            return RestoreReport::default();
        };
        let records = file.load();
        self.prune();

        let mut report = RestoreReport::default();
        for record in &records {
            match self.restore_record(record) {
                Ok(Restored::Placed(breakpoint)) => report.restored.push(breakpoint),
                Ok(Restored::AlreadyTracked(breakpoint)) => {
                    debug!("Breakpoint {} already tracked", breakpoint);
                    report.restored.push(breakpoint);
                }
                Err(reason) => {
                    let message = format!(
                        "Breakpoint {}:{} not restored: {}",
                        record.file, record.line, reason
                    );
                    warn!("{}", message);
                    self.editor.notify(NotifyLevel::Warn, &message);
                    report.skipped.push(SkippedBreakpoint {
                        file: record.file.clone(),
                        line: record.line,
                        reason,
                    });
                }
            }
        }

        if !report.is_empty() {
            info!("{}", report.summary());
            self.editor.notify(NotifyLevel::Info, &report.summary());
        }
        report
    }

    /// Place one record under its absolute path
    fn restore_record(&mut self, record: &PersistedRecord) -> Result<Restored, SkipReason> {
        let file = normalize_file(&record.file);
        let path = Path::new(&file);
        if !path.exists() {
            return Err(SkipReason::FileMissing);
        }

        let buffer = self
            .editor
            .load_buffer(path)
            .map_err(|e| SkipReason::Unreadable(e.to_string()))?;

        let unresolved = SkipReason::Unresolved(self.locator.unresolved_reason());
        let original = record.line.checked_sub(1).ok_or_else(|| unresolved.clone())?;
        let resolved = {
            let lines = BufferLines::new(&self.editor, buffer);
            self.locator.locate(&lines, &record.fingerprint, original)
        }
        .ok_or(unresolved)?;

        let line = resolved + 1;
        if self.position(&file, line).is_some() {
            return Ok(Restored::AlreadyTracked(Breakpoint::new(file, line)));
        }

        let mark = self
            .editor
            .set_mark(buffer, resolved)
            .map_err(|e| SkipReason::Unreadable(e.to_string()))?;
        self.files
            .entry(file.clone())
            .or_default()
            .push(Tracked { buffer, mark });

        if resolved != original {
            debug!("Relocated {}:{} to line {}", file, record.line, line);
        }
        self.mirror(break_command(&file, line));
        Ok(Restored::Placed(Breakpoint::new(file, line)))
    }
}
