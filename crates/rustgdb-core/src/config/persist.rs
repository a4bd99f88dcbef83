//! `persist_breakpoints` setting

use crate::error::RustgdbResult;
use crate::locator::{LocatorKind, LocatorRegistry};
use serde::{Deserialize, Serialize};

/// `persist_breakpoints` as written by the user: a flag or a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PersistBreakpoints {
    Flag(bool),
    Options {
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        line_locator: Option<String>,
    },
}

fn default_enabled() -> bool {
    true
}

impl Default for PersistBreakpoints {
    fn default() -> Self {
        Self::Flag(false)
    }
}

/// Normalized persistence settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistConfig {
    pub enabled: bool,
    /// Name of a locator registered in the [`LocatorRegistry`]
    pub line_locator: String,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            line_locator: LocatorKind::default().as_str().to_string(),
        }
    }
}

impl PersistBreakpoints {
    /// Normalize against the built-in locators
    pub fn normalize(&self) -> RustgdbResult<PersistConfig> {
        self.normalize_with(&LocatorRegistry::with_builtins())
    }

    /// Normalize, rejecting locator names the registry does not know
    pub fn normalize_with(&self, registry: &LocatorRegistry) -> RustgdbResult<PersistConfig> {
        let (enabled, line_locator) = match self {
            Self::Flag(enabled) => (*enabled, None),
            Self::Options {
                enabled,
                line_locator,
            } => (*enabled, line_locator.clone()),
        };

        let line_locator =
            line_locator.unwrap_or_else(|| LocatorKind::default().as_str().to_string());
        // Fails with UnknownLocator for names nobody registered
        registry.get(&line_locator)?;

        Ok(PersistConfig {
            enabled,
            line_locator,
        })
    }
}
