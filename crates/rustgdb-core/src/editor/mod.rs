//! Editor host abstraction
//!
//! The engine never owns text or cursor state. It asks the host for buffer
//! lines and for tracked marks: line anchors the host keeps valid while the
//! buffer is edited, so a breakpoint's current line is always re-derived from
//! its mark rather than from a stored integer.

mod memory;

pub use memory::{MemoryEditor, Notification};

use crate::error::RustgdbResult;
use std::borrow::Cow;
use std::path::Path;

/// Handle to a buffer held by the editor host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

/// Handle to a tracked line position inside a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}

/// Capabilities the engine needs from the hosting editor
pub trait EditorHost {
    /// Load a file into a buffer without displaying it, reusing an existing
    /// buffer for the same path
    fn load_buffer(&mut self, path: &Path) -> RustgdbResult<BufferId>;

    /// Number of lines currently in the buffer
    fn line_count(&self, buffer: BufferId) -> usize;

    /// Text of a 0-based line, `None` past the end
    fn line_text(&self, buffer: BufferId, line: usize) -> Option<String>;

    /// Anchor a tracked mark at a 0-based line
    fn set_mark(&mut self, buffer: BufferId, line: usize) -> RustgdbResult<MarkId>;

    /// Current 0-based line of a mark, `None` once the mark was invalidated
    fn mark_line(&self, buffer: BufferId, mark: MarkId) -> Option<usize>;

    /// Drop a mark; unknown marks are ignored
    fn remove_mark(&mut self, buffer: BufferId, mark: MarkId);

    /// Show a message to the user
    fn notify(&mut self, level: NotifyLevel, message: &str);
}

/// Read-only view over the lines a locator searches
pub trait LineSource {
    fn line_count(&self) -> usize;

    fn line(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl<S: AsRef<str>> LineSource for Vec<S> {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|s| Cow::Borrowed(s.as_ref()))
    }
}

/// Lines of one host buffer
pub struct BufferLines<'a, E: EditorHost + ?Sized> {
    editor: &'a E,
    buffer: BufferId,
}

impl<'a, E: EditorHost + ?Sized> BufferLines<'a, E> {
    pub fn new(editor: &'a E, buffer: BufferId) -> Self {
        Self { editor, buffer }
    }
}

impl<E: EditorHost + ?Sized> LineSource for BufferLines<'_, E> {
    fn line_count(&self) -> usize {
        self.editor.line_count(self.buffer)
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.editor.line_text(self.buffer, index).map(Cow::Owned)
    }
}
