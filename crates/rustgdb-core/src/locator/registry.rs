//! Name-keyed locator registry

use super::{ExactLocator, HashLocator, JaccardLocator, LineLocator};
use crate::error::{RustgdbError, RustgdbResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The built-in locators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorKind {
    #[default]
    Exact,
    Hash,
    Jaccard,
}

impl LocatorKind {
    pub const ALL: [LocatorKind; 3] = [Self::Exact, Self::Hash, Self::Jaccard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Hash => "hash",
            Self::Jaccard => "jaccard",
        }
    }

    /// Fresh instance of this locator
    pub fn locator(&self) -> Arc<dyn LineLocator> {
        match self {
            Self::Exact => Arc::new(ExactLocator),
            Self::Hash => Arc::new(HashLocator),
            Self::Jaccard => Arc::new(JaccardLocator),
        }
    }
}

impl fmt::Display for LocatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocatorKind {
    type Err = RustgdbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RustgdbError::UnknownLocator(s.to_string()))
    }
}

/// Registry mapping configuration names to locators
///
/// Built-ins are registered by [`LocatorRegistry::with_builtins`]; further
/// locators can be added with [`LocatorRegistry::register`].
pub struct LocatorRegistry {
    locators: HashMap<String, Arc<dyn LineLocator>>,
}

impl LocatorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            locators: HashMap::new(),
        }
    }

    /// Create a registry holding the exact, hash and jaccard locators
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in LocatorKind::ALL {
            registry.register(kind.as_str(), kind.locator());
        }
        registry
    }

    /// Register a locator under a name, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, locator: Arc<dyn LineLocator>) {
        self.locators.insert(name.into(), locator);
    }

    /// Look a locator up by name
    pub fn get(&self, name: &str) -> RustgdbResult<Arc<dyn LineLocator>> {
        self.locators
            .get(name)
            .cloned()
            .ok_or_else(|| RustgdbError::UnknownLocator(name.to_string()))
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.locators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.locators.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for LocatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::LineSource;
    use crate::locator::LineFingerprint;

    struct FirstLine;

    impl LineLocator for FirstLine {
        fn name(&self) -> &str {
            "first"
        }

        fn prepare(&self, _line_text: &str) -> Option<LineFingerprint> {
            None
        }

        fn locate(&self, lines: &dyn LineSource, _: &LineFingerprint, _: usize) -> Option<usize> {
            (lines.line_count() > 0).then_some(0)
        }

        fn unresolved_reason(&self) -> &'static str {
            "empty buffer"
        }
    }

    #[test]
    fn test_builtins_registered() {
        let registry = LocatorRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["exact", "hash", "jaccard"]);
        assert_eq!(registry.get("hash").unwrap().name(), "hash");
    }

    #[test]
    fn test_unknown_name_is_error() {
        let registry = LocatorRegistry::with_builtins();
        let err = registry.get("fuzzy").err().unwrap();
        assert_eq!(err, RustgdbError::UnknownLocator("fuzzy".to_string()));
    }

    #[test]
    fn test_register_custom_locator() {
        let mut registry = LocatorRegistry::new();
        assert!(!registry.contains("first"));
        registry.register("first", Arc::new(FirstLine));

        let locator = registry.get("first").unwrap();
        let lines = vec!["a", "b"];
        assert_eq!(locator.locate(&lines, &LineFingerprint::default(), 1), Some(0));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("jaccard".parse::<LocatorKind>().unwrap(), LocatorKind::Jaccard);
        assert!("Hash".parse::<LocatorKind>().is_err());
        assert_eq!(LocatorKind::default().to_string(), "exact");
    }
}
