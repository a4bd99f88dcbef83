//! Breakpoint store
//!
//! Holds the breakpoints of one workspace session. Every breakpoint is backed
//! by a tracked mark in the editor, so its line follows local edits. The store
//! is authoritative: it mirrors changes into the debugger and, when
//! persistence is enabled, rewrites the breakpoint file after each mutation.

mod restore;
mod store;
mod types;


pub use store::BreakpointStore;
pub use types::{Breakpoint, RestoreReport, SkipReason, SkippedBreakpoint};
