//! rustgdb core library
//!
//! Breakpoints that survive editor restarts. The [`BreakpointStore`] tracks
//! breakpoints through editor marks, mirrors them into GDB, and persists them
//! per workspace. On the next start each saved breakpoint is put back on the
//! right line by a [`LineLocator`], even if the file changed on disk in the
//! meantime.

pub mod breakpoints;
pub mod config;
pub mod debugger;
pub mod editor;
pub mod error;
pub mod locator;
pub mod persistence;
pub mod session;
pub mod workspace;

// Re-export commonly used types
pub use breakpoints::{Breakpoint, BreakpointStore, RestoreReport, SkipReason, SkippedBreakpoint};
pub use config::{LogFormat, LoggingConfig, PersistBreakpoints, PersistConfig, PluginConfig};
pub use debugger::{CommandLog, DebugTarget, DebuggerBridge, NullDebugger};
pub use editor::{BufferId, EditorHost, LineSource, MarkId, MemoryEditor, NotifyLevel};
pub use error::{RustgdbError, RustgdbResult};
pub use locator::{LineFingerprint, LineLocator, LocatorKind, LocatorRegistry};
pub use persistence::{BreakpointFile, PersistedRecord};
pub use session::DebugSession;
pub use workspace::{BuildSystem, Cargo, CargoMetadataInfo};
