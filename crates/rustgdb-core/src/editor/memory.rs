//! In-process editor host
//!
//! Keeps buffers as line vectors and shifts marks on line insertion and
//! deletion the way a real editor's extmarks do. Used by the CLI for
//! headless operation and throughout the test suites.

use super::{BufferId, EditorHost, MarkId, NotifyLevel};
use crate::error::{RustgdbError, RustgdbResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A notification recorded by [`MemoryEditor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub message: String,
}

#[derive(Debug)]
struct MemoryBuffer {
    path: PathBuf,
    lines: Vec<String>,
    /// mark -> 0-based line
    marks: HashMap<MarkId, usize>,
}

/// Editor host backed by plain memory
#[derive(Debug, Default)]
pub struct MemoryEditor {
    buffers: HashMap<BufferId, MemoryBuffer>,
    by_path: HashMap<PathBuf, BufferId>,
    next_buffer: u64,
    next_mark: u64,
    notifications: Vec<Notification>,
}

impl MemoryEditor {
    /// Create an editor with no buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a buffer with the given contents without touching disk
    pub fn open_with_lines<S: Into<String>>(
        &mut self,
        path: impl Into<PathBuf>,
        lines: impl IntoIterator<Item = S>,
    ) -> BufferId {
        let path = path.into();
        let lines = lines.into_iter().map(Into::into).collect();
        if let Some(&id) = self.by_path.get(&path) {
            if let Some(buffer) = self.buffers.get_mut(&id) {
                buffer.lines = lines;
                buffer.marks.clear();
            }
            return id;
        }
        self.insert_buffer(path, lines)
    }

    /// Buffer already loaded for a path
    pub fn buffer_for(&self, path: &Path) -> Option<BufferId> {
        self.by_path.get(path).copied()
    }

    /// Path a buffer was loaded from
    pub fn buffer_path(&self, buffer: BufferId) -> Option<&Path> {
        self.buffers.get(&buffer).map(|b| b.path.as_path())
    }

    /// Insert lines before the 0-based index `at`, shifting marks at or
    /// below it
    pub fn insert_lines<S: Into<String>>(
        &mut self,
        buffer: BufferId,
        at: usize,
        lines: impl IntoIterator<Item = S>,
    ) -> RustgdbResult<()> {
        let buf = self.buffer_mut(buffer)?;
        if at > buf.lines.len() {
            return Err(RustgdbError::editor(format!(
                "insert position {} past end of buffer ({} lines)",
                at,
                buf.lines.len()
            )));
        }
        let new: Vec<String> = lines.into_iter().map(Into::into).collect();
        let count = new.len();
        buf.lines.splice(at..at, new);
        for line in buf.marks.values_mut() {
            if *line >= at {
                *line += count;
            }
        }
        Ok(())
    }

    /// Delete `count` lines starting at the 0-based index `start`
    ///
    /// Marks on deleted lines are invalidated; marks below shift up.
    pub fn delete_lines(&mut self, buffer: BufferId, start: usize, count: usize) -> RustgdbResult<()> {
        let buf = self.buffer_mut(buffer)?;
        let end = start.saturating_add(count).min(buf.lines.len());
        if start >= end {
            return Ok(());
        }
        buf.lines.drain(start..end);
        let removed = end - start;
        buf.marks.retain(|_, line| !(start..end).contains(line));
        for line in buf.marks.values_mut() {
            if *line >= end {
                *line -= removed;
            }
        }
        Ok(())
    }

    /// Replace the text of a single line in place; its marks stay put
    pub fn set_line(&mut self, buffer: BufferId, line: usize, text: impl Into<String>) -> RustgdbResult<()> {
        let buf = self.buffer_mut(buffer)?;
        let slot = buf
            .lines
            .get_mut(line)
            .ok_or_else(|| RustgdbError::editor(format!("line {} out of range", line)))?;
        *slot = text.into();
        Ok(())
    }

    /// Notifications shown so far, oldest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Forget recorded notifications
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    fn insert_buffer(&mut self, path: PathBuf, lines: Vec<String>) -> BufferId {
        self.next_buffer += 1;
        let id = BufferId(self.next_buffer);
        self.by_path.insert(path.clone(), id);
        self.buffers.insert(
            id,
            MemoryBuffer {
                path,
                lines,
                marks: HashMap::new(),
            },
        );
        id
    }

    fn buffer_mut(&mut self, buffer: BufferId) -> RustgdbResult<&mut MemoryBuffer> {
        self.buffers
            .get_mut(&buffer)
            .ok_or_else(|| RustgdbError::editor(format!("unknown buffer {}", buffer.0)))
    }
}

impl EditorHost for MemoryEditor {
    fn load_buffer(&mut self, path: &Path) -> RustgdbResult<BufferId> {
        if let Some(id) = self.buffer_for(path) {
            return Ok(id);
        }
        let content = fs::read_to_string(path).map_err(|e| {
            RustgdbError::io_with_path(format!("Failed to read file: {}", e), path.display().to_string())
        })?;
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
        // An empty file is still a buffer with one empty line
        if lines.is_empty() {
            lines.push(String::new());
        }
        debug!("Loaded buffer for {:?}", path);
        Ok(self.insert_buffer(path.to_path_buf(), lines))
    }

    fn line_count(&self, buffer: BufferId) -> usize {
        self.buffers.get(&buffer).map_or(0, |b| b.lines.len())
    }

    fn line_text(&self, buffer: BufferId, line: usize) -> Option<String> {
        self.buffers.get(&buffer)?.lines.get(line).cloned()
    }

    fn set_mark(&mut self, buffer: BufferId, line: usize) -> RustgdbResult<MarkId> {
        self.next_mark += 1;
        let mark = MarkId(self.next_mark);
        let buf = self.buffer_mut(buffer)?;
        if line >= buf.lines.len() {
            return Err(RustgdbError::editor(format!(
                "line {} out of range ({} lines)",
                line + 1,
                buf.lines.len()
            )));
        }
        buf.marks.insert(mark, line);
        Ok(mark)
    }

    fn mark_line(&self, buffer: BufferId, mark: MarkId) -> Option<usize> {
        self.buffers.get(&buffer)?.marks.get(&mark).copied()
    }

    fn remove_mark(&mut self, buffer: BufferId, mark: MarkId) {
        if let Some(buf) = self.buffers.get_mut(&buffer) {
            buf.marks.remove(&mark);
        }
    }

    fn notify(&mut self, level: NotifyLevel, message: &str) {
        self.notifications.push(Notification {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn editor_with(lines: &[&str]) -> (MemoryEditor, BufferId) {
        let mut editor = MemoryEditor::new();
        let id = editor.open_with_lines("/work/src/main.rs", lines.iter().copied());
        (editor, id)
    }

    #[test]
    fn test_load_buffer_reads_disk_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lib.rs");
        fs::write(&path, "fn a() {}\nfn b() {}\n").unwrap();

        let mut editor = MemoryEditor::new();
        let first = editor.load_buffer(&path).unwrap();
        fs::write(&path, "changed\n").unwrap();
        let second = editor.load_buffer(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(editor.line_count(first), 2);
        assert_eq!(editor.line_text(first, 1).as_deref(), Some("fn b() {}"));
    }

    #[test]
    fn test_empty_file_has_one_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.rs");
        fs::write(&path, "").unwrap();

        let mut editor = MemoryEditor::new();
        let buf = editor.load_buffer(&path).unwrap();
        assert_eq!(editor.line_count(buf), 1);
        assert_eq!(editor.line_text(buf, 0).as_deref(), Some(""));
        assert!(editor.set_mark(buf, 0).is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let mut editor = MemoryEditor::new();
        let result = editor.load_buffer(Path::new("/definitely/not/here.rs"));
        assert!(matches!(result, Err(RustgdbError::Io { .. })));
    }

    #[test]
    fn test_marks_shift_on_insert() {
        let (mut editor, buf) = editor_with(&["a", "b", "c"]);
        let mark = editor.set_mark(buf, 1).unwrap();

        editor.insert_lines(buf, 0, ["x", "y"]).unwrap();
        assert_eq!(editor.mark_line(buf, mark), Some(3));

        // Inserting below the mark leaves it alone
        editor.insert_lines(buf, 5, ["z"]).unwrap();
        assert_eq!(editor.mark_line(buf, mark), Some(3));
    }

    #[test]
    fn test_marks_invalidated_on_delete() {
        let (mut editor, buf) = editor_with(&["a", "b", "c", "d"]);
        let doomed = editor.set_mark(buf, 1).unwrap();
        let survivor = editor.set_mark(buf, 3).unwrap();

        editor.delete_lines(buf, 0, 2).unwrap();

        assert_eq!(editor.mark_line(buf, doomed), None);
        assert_eq!(editor.mark_line(buf, survivor), Some(1));
    }

    #[test]
    fn test_set_mark_out_of_range() {
        let (mut editor, buf) = editor_with(&["only"]);
        assert!(editor.set_mark(buf, 1).is_err());
    }

    #[test]
    fn test_notifications_recorded() {
        let (mut editor, _) = editor_with(&[]);
        editor.notify(NotifyLevel::Warn, "careful");
        assert_eq!(editor.notifications().len(), 1);
        assert_eq!(editor.notifications()[0].level, NotifyLevel::Warn);
        editor.clear_notifications();
        assert!(editor.notifications().is_empty());
    }
}
