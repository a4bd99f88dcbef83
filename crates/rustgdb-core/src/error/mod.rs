//! Error types for rustgdb
//!
//! Store operations never return these for recoverable conditions
//! (unresolvable breakpoints, corrupt persistence files, debugger mirror
//! failures). They are reserved for setup and collaborator failures.

mod constructors;
mod conversions;
mod types;

pub use types::{RustgdbError, RustgdbResult};
