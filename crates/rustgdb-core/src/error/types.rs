//! Core error type for rustgdb

use thiserror::Error;

/// Result type alias for rustgdb operations
pub type RustgdbResult<T> = Result<T, RustgdbError>;

/// Main error type for rustgdb
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RustgdbError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// A `line_locator` name that no registered locator answers to
    #[error("Unknown line locator: {0}")]
    UnknownLocator(String),

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// Build system (cargo) invocation or metadata errors
    #[error("Build system error: {message}")]
    BuildSystem {
        message: String,
        context: Option<String>,
    },

    /// Debugger bridge errors
    #[error("Debugger error: {message}")]
    Debugger { message: String },

    /// Editor host errors
    #[error("Editor error: {message}")]
    Editor { message: String },
}

impl RustgdbError {
    /// Short stable identifier for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "RUSTGDB_CONFIG",
            Self::UnknownLocator(_) => "RUSTGDB_UNKNOWN_LOCATOR",
            Self::Io { .. } => "RUSTGDB_IO",
            Self::Json { .. } => "RUSTGDB_JSON",
            Self::BuildSystem { .. } => "RUSTGDB_BUILD_SYSTEM",
            Self::Debugger { .. } => "RUSTGDB_DEBUGGER",
            Self::Editor { .. } => "RUSTGDB_EDITOR",
        }
    }

    /// Whether this error should be reported to the user once at setup
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::UnknownLocator(_))
    }
}
