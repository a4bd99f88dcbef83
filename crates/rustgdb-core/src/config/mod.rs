//! Configuration
//!
//! ```json
//! {
//!   "persist_breakpoints": { "enabled": true, "line_locator": "hash" },
//!   "logging": { "level": "warn", "format": "pretty" }
//! }
//! ```

mod logging_config;
mod persist;

pub use logging_config::{LogFormat, LoggingConfig};
pub use persist::{PersistBreakpoints, PersistConfig};

use crate::error::{RustgdbError, RustgdbResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default configuration file name, looked up in the workspace root
pub const DEFAULT_CONFIG_FILE: &str = "rustgdb.json";

/// Top-level plugin configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub persist_breakpoints: PersistBreakpoints,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PluginConfig {
    /// Parse configuration from JSON text
    pub fn from_json_str(content: &str) -> RustgdbResult<Self> {
        serde_json::from_str(content).map_err(|e| {
            RustgdbError::config_with_context(format!("Invalid configuration: {}", e), "json")
        })
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load(path: &Path) -> RustgdbResult<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|e| {
            RustgdbError::io_with_path(
                format!("Failed to read config: {}", e),
                path.display().to_string(),
            )
        })?;
        Self::from_json_str(&content)
            .map_err(|e| RustgdbError::config_with_context(e.to_string(), path.display().to_string()))
    }
}
