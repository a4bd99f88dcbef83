//! Debugger bridge
//!
//! The breakpoint store mirrors its state into the debugger one way. The
//! bridge only accepts command text; nothing is ever read back, so the store
//! stays the single source of truth.

use crate::error::{RustgdbError, RustgdbResult};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

/// GDB command that removes every breakpoint
pub const DELETE_ALL_COMMAND: &str = "delete";

/// What a debugging session runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugTarget {
    /// Start the given executable under the debugger
    Binary {
        path: PathBuf,
        args: Vec<String>,
    },
    /// Attach to a running process
    Attach { pid: u32 },
    /// Connect to a gdbserver, typically inside a container
    Remote { address: String },
}

impl fmt::Display for DebugTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { path, .. } => write!(f, "{}", path.display()),
            Self::Attach { pid } => write!(f, "pid {}", pid),
            Self::Remote { address } => write!(f, "remote {}", address),
        }
    }
}

/// Terminal debugger collaborator
#[cfg_attr(test, mockall::automock)]
pub trait DebuggerBridge {
    /// Start a session against a target
    fn start(&mut self, target: &DebugTarget) -> RustgdbResult<()>;

    /// Send one line of debugger command text
    fn send_command(&mut self, command: &str) -> RustgdbResult<()>;
}

/// Quote a location's file part when GDB would split it on whitespace
fn location(file: &str, line: usize) -> String {
    if file.chars().any(char::is_whitespace) {
        format!("'{}':{}", file, line)
    } else {
        format!("{}:{}", file, line)
    }
}

/// `break <file>:<line>` for a 1-based line
pub fn break_command(file: &str, line: usize) -> String {
    format!("break {}", location(file, line))
}

/// `clear <file>:<line>` for a 1-based line
pub fn clear_command(file: &str, line: usize) -> String {
    format!("clear {}", location(file, line))
}

/// Commands that bring a freshly started GDB to `target`
pub fn start_commands(target: &DebugTarget) -> Vec<String> {
    match target {
        DebugTarget::Binary { path, args } => {
            let mut commands = vec![format!("file {}", path.display())];
            if !args.is_empty() {
                commands.push(format!("set args {}", args.join(" ")));
            }
            commands
        }
        DebugTarget::Attach { pid } => vec![format!("attach {}", pid)],
        DebugTarget::Remote { address } => vec![format!("target remote {}", address)],
    }
}

/// Bridge used when no debugger is running; every command fails
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDebugger;

impl DebuggerBridge for NullDebugger {
    fn start(&mut self, target: &DebugTarget) -> RustgdbResult<()> {
        Err(RustgdbError::debugger(format!(
            "no debugger available to start {}",
            target
        )))
    }

    fn send_command(&mut self, command: &str) -> RustgdbResult<()> {
        Err(RustgdbError::debugger(format!(
            "no active debug session for '{}'",
            command
        )))
    }
}

#[derive(Debug, Default)]
struct CommandLogState {
    active: bool,
    commands: Vec<String>,
}

/// Bridge that records the command text it would send to GDB
///
/// Clones share one log, so a handle kept outside the store can inspect what
/// the store sent. Commands sent while inactive fail like a closed session.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    state: Rc<RefCell<CommandLogState>>,
}

impl CommandLog {
    /// Create a log with a session already active
    pub fn new() -> Self {
        let log = Self::default();
        log.state.borrow_mut().active = true;
        log
    }

    /// Create a log with no session; commands fail until `start`
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    /// End the session; later commands fail
    pub fn stop(&self) {
        self.state.borrow_mut().active = false;
    }

    /// Commands accepted so far
    pub fn commands(&self) -> Vec<String> {
        self.state.borrow().commands.clone()
    }

    pub fn clear(&self) {
        self.state.borrow_mut().commands.clear();
    }
}

impl DebuggerBridge for CommandLog {
    fn start(&mut self, target: &DebugTarget) -> RustgdbResult<()> {
        let mut state = self.state.borrow_mut();
        state.active = true;
        state.commands.extend(start_commands(target));
        Ok(())
    }

    fn send_command(&mut self, command: &str) -> RustgdbResult<()> {
        let mut state = self.state.borrow_mut();
        if !state.active {
            return Err(RustgdbError::debugger("no active debug session"));
        }
        state.commands.push(command.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_formatting() {
        assert_eq!(break_command("/w/src/main.rs", 3), "break /w/src/main.rs:3");
        assert_eq!(clear_command("/w/src/main.rs", 3), "clear /w/src/main.rs:3");
        assert_eq!(break_command("/my work/a.rs", 7), "break '/my work/a.rs':7");
    }

    #[test]
    fn test_start_commands() {
        let binary = DebugTarget::Binary {
            path: PathBuf::from("/w/target/debug/app"),
            args: vec!["--fast".into(), "input.txt".into()],
        };
        assert_eq!(
            start_commands(&binary),
            vec!["file /w/target/debug/app", "set args --fast input.txt"]
        );
        assert_eq!(start_commands(&DebugTarget::Attach { pid: 42 }), vec!["attach 42"]);
        assert_eq!(
            start_commands(&DebugTarget::Remote {
                address: "localhost:2345".into()
            }),
            vec!["target remote localhost:2345"]
        );
    }

    #[test]
    fn test_null_debugger_always_fails() {
        let mut bridge = NullDebugger;
        assert!(bridge.send_command("break a.rs:1").is_err());
        assert!(bridge.start(&DebugTarget::Attach { pid: 1 }).is_err());
    }

    #[test]
    fn test_command_log_shares_state() {
        let handle = CommandLog::inactive();
        let mut bridge = handle.clone();

        assert!(bridge.send_command("break a.rs:1").is_err());
        bridge.start(&DebugTarget::Attach { pid: 7 }).unwrap();
        bridge.send_command("break a.rs:1").unwrap();

        assert!(handle.is_active());
        assert_eq!(handle.commands(), vec!["attach 7", "break a.rs:1"]);

        handle.stop();
        assert!(bridge.send_command("delete").is_err());
    }
}
