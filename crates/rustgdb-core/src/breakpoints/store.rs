//! Breakpoint store implementation

use super::types::Breakpoint;
use crate::debugger::{DELETE_ALL_COMMAND, DebuggerBridge, break_command, clear_command};
use crate::editor::{BufferId, EditorHost, MarkId, NotifyLevel};
use crate::locator::LineLocator;
use crate::persistence::{BreakpointFile, PersistedRecord};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Editor mark backing one breakpoint
#[derive(Debug, Clone, Copy)]
pub(super) struct Tracked {
    pub(super) buffer: BufferId,
    pub(super) mark: MarkId,
}

/// In-memory index of the breakpoints of one workspace session
pub struct BreakpointStore<E: EditorHost> {
    pub(super) editor: E,
    pub(super) debugger: Box<dyn DebuggerBridge>,
    pub(super) locator: Arc<dyn LineLocator>,
    pub(super) persistence: Option<BreakpointFile>,
    /// file -> marks in insertion order
    pub(super) files: BTreeMap<String, Vec<Tracked>>,
}

/// Absolute form of a user-supplied path; left alone if it cannot be resolved
pub(super) fn normalize_file(file: &str) -> String {
    std::path::absolute(Path::new(file))
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| file.to_string())
}

impl<E: EditorHost> BreakpointStore<E> {
    /// Create a store without persistence
    pub fn new(editor: E, debugger: Box<dyn DebuggerBridge>, locator: Arc<dyn LineLocator>) -> Self {
        Self {
            editor,
            debugger,
            locator,
            persistence: None,
            files: BTreeMap::new(),
        }
    }

    /// Persist breakpoints to `file` after every mutation
    pub fn with_persistence(mut self, file: BreakpointFile) -> Self {
        self.persistence = Some(file);
        self
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn locator(&self) -> &Arc<dyn LineLocator> {
        &self.locator
    }

    pub fn persistence_file(&self) -> Option<&BreakpointFile> {
        self.persistence.as_ref()
    }

    /// Swap the debugger bridge, e.g. when a new session starts
    pub fn set_debugger(&mut self, debugger: Box<dyn DebuggerBridge>) {
        self.debugger = debugger;
    }

    pub fn debugger_mut(&mut self) -> &mut dyn DebuggerBridge {
        self.debugger.as_mut()
    }

    /// Add a breakpoint at a 1-based line
    ///
    /// Returns false if one already exists there or the line cannot be marked.
    pub fn create(&mut self, file: &str, line: usize) -> bool {
        let file = normalize_file(file);
        self.prune();
        if self.position(&file, line).is_some() {
            return false;
        }
        let Some(line0) = line.checked_sub(1) else {
            self.report_error(&format!("Invalid breakpoint line 0 in {}", file));
            return false;
        };

        let tracked = self
            .editor
            .load_buffer(Path::new(&file))
            .and_then(|buffer| {
                let mark = self.editor.set_mark(buffer, line0)?;
                Ok(Tracked { buffer, mark })
            });
        let tracked = match tracked {
            Ok(tracked) => tracked,
            Err(e) => {
                self.report_error(&format!("Cannot set breakpoint at {}:{}: {}", file, line, e));
                return false;
            }
        };

        debug!("Created breakpoint {}:{}", file, line);
        self.files.entry(file.clone()).or_default().push(tracked);
        self.mirror(break_command(&file, line));
        self.save();
        true
    }

    /// Create if absent, delete if present; returns whether a breakpoint
    /// exists at the line afterwards
    pub fn toggle(&mut self, file: &str, line: usize) -> bool {
        if self.contains(file, line) {
            self.delete(file, line);
            false
        } else {
            self.create(file, line)
        }
    }

    /// Remove the breakpoint at a 1-based line
    pub fn delete(&mut self, file: &str, line: usize) -> bool {
        let file = normalize_file(file);
        self.prune();
        let Some(index) = self.position(&file, line) else {
            return false;
        };

        if let Some(marks) = self.files.get_mut(&file) {
            let tracked = marks.remove(index);
            if marks.is_empty() {
                self.files.remove(&file);
            }
            self.editor.remove_mark(tracked.buffer, tracked.mark);
        }

        debug!("Deleted breakpoint {}:{}", file, line);
        self.mirror(clear_command(&file, line));
        self.save();
        true
    }

    /// Remove every breakpoint in every file
    pub fn delete_all(&mut self) {
        let files = std::mem::take(&mut self.files);
        for tracked in files.values().flatten() {
            self.editor.remove_mark(tracked.buffer, tracked.mark);
        }
        debug!("Deleted all breakpoints");
        self.mirror(DELETE_ALL_COMMAND.to_string());
        self.save();
    }

    /// Whether a breakpoint exists at a 1-based line
    pub fn contains(&self, file: &str, line: usize) -> bool {
        self.position(&normalize_file(file), line).is_some()
    }

    /// Snapshot of current breakpoints, lines read from their marks
    pub fn list(&self) -> Vec<Breakpoint> {
        self.live()
            .map(|(file, _, line0)| Breakpoint::new(file, line0 + 1))
            .collect()
    }

    /// Current 1-based lines of the breakpoints in one file
    pub fn lines_in(&self, file: &str) -> Vec<usize> {
        let file = normalize_file(file);
        self.files
            .get(&file)
            .map(|marks| {
                marks
                    .iter()
                    .filter_map(|t| self.editor.mark_line(t.buffer, t.mark))
                    .map(|line0| line0 + 1)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Send every tracked breakpoint to the debugger again
    ///
    /// Returns how many commands the debugger accepted.
    pub fn restore_to_debugger(&mut self) -> usize {
        let commands: Vec<String> = self
            .list()
            .iter()
            .map(|bp| break_command(&bp.file, bp.line))
            .collect();
        let sent = commands
            .iter()
            .filter(|command| self.mirror(command.to_string()))
            .count();
        debug!("Re-sent {}/{} breakpoint(s) to debugger", sent, commands.len());
        sent
    }

    /// Write the breakpoint file; no-op without persistence
    pub fn save(&mut self) {
        let Some(file) = self.persistence.as_ref() else {
            return;
        };

        let records: Vec<PersistedRecord> = self
            .live()
            .map(|(path, tracked, line0)| {
                let text = self
                    .editor
                    .line_text(tracked.buffer, line0)
                    .unwrap_or_default();
                PersistedRecord::new(path, line0 + 1, self.locator.prepare(&text))
            })
            .collect();

        if let Err(e) = file.save(&records) {
            let message = format!("Failed to save breakpoints: {}", e);
            self.report_error(&message);
        }
    }

    /// Live breakpoints as (file, mark, 0-based line)
    pub(super) fn live(&self) -> impl Iterator<Item = (&str, Tracked, usize)> + '_ {
        self.files.iter().flat_map(move |(file, marks)| {
            marks.iter().filter_map(move |t| {
                self.editor
                    .mark_line(t.buffer, t.mark)
                    .map(|line0| (file.as_str(), *t, line0))
            })
        })
    }

    /// Index within its file of the breakpoint at a 1-based line
    pub(super) fn position(&self, file: &str, line: usize) -> Option<usize> {
        let line0 = line.checked_sub(1)?;
        self.files.get(file)?.iter().position(|t| {
            self.editor.mark_line(t.buffer, t.mark) == Some(line0)
        })
    }

    /// Forget breakpoints whose marks the editor invalidated
    pub(super) fn prune(&mut self) {
        let editor = &self.editor;
        self.files.retain(|file, marks| {
            marks.retain(|t| {
                let alive = editor.mark_line(t.buffer, t.mark).is_some();
                if !alive {
                    debug!("Dropping breakpoint in {} whose line was deleted", file);
                }
                alive
            });
            !marks.is_empty()
        });
    }

    /// Best-effort debugger mirror; failures are logged and swallowed
    pub(super) fn mirror(&mut self, command: String) -> bool {
        match self.debugger.send_command(&command) {
            Ok(()) => true,
            Err(e) => {
                debug!("Debugger did not take '{}': {}", command, e);
                false
            }
        }
    }

    pub(super) fn report_error(&mut self, message: &str) {
        warn!("{}", message);
        self.editor.notify(NotifyLevel::Error, message);
    }
}
