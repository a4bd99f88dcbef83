//! Constructor methods for RustgdbError

use super::types::RustgdbError;

impl RustgdbError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an IO error attributed to a path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new JSON error
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }

    /// Create a new build system error
    pub fn build_system(message: impl Into<String>) -> Self {
        Self::BuildSystem {
            message: message.into(),
            context: None,
        }
    }

    /// Create a build system error with context
    pub fn build_system_with_context(
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::BuildSystem {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new debugger error
    pub fn debugger(message: impl Into<String>) -> Self {
        Self::Debugger {
            message: message.into(),
        }
    }

    /// Create a new editor error
    pub fn editor(message: impl Into<String>) -> Self {
        Self::Editor {
            message: message.into(),
        }
    }
}
