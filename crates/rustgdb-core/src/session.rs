//! Per-workspace debugging session
//!
//! Owns everything that would otherwise be global plugin state: the
//! normalized configuration, the resolved workspace root, the breakpoint
//! store and the currently debugged target.

use crate::breakpoints::{BreakpointStore, RestoreReport};
use crate::config::{PersistConfig, PluginConfig};
use crate::debugger::{DebugTarget, DebuggerBridge};
use crate::editor::EditorHost;
use crate::error::RustgdbResult;
use crate::locator::LocatorRegistry;
use crate::persistence::BreakpointFile;
use crate::workspace::{BuildSystem, resolve_workspace_root};
use std::path::{Path, PathBuf};
use tracing::info;

/// Session context for one workspace
pub struct DebugSession<E: EditorHost> {
    config: PluginConfig,
    persist: PersistConfig,
    workspace_root: PathBuf,
    store: BreakpointStore<E>,
    active_target: Option<DebugTarget>,
    startup_report: RestoreReport,
}

impl<E: EditorHost> DebugSession<E> {
    /// Set up a session with the built-in locators
    pub fn setup(
        config: PluginConfig,
        editor: E,
        debugger: Box<dyn DebuggerBridge>,
        build: &dyn BuildSystem,
        cwd: &Path,
    ) -> RustgdbResult<Self> {
        Self::setup_with_registry(
            config,
            &LocatorRegistry::with_builtins(),
            editor,
            debugger,
            build,
            cwd,
        )
    }

    /// Set up a session, resolving the configured locator in `registry`
    ///
    /// An unknown locator name fails setup. With persistence enabled, saved
    /// breakpoints are restored before this returns.
    pub fn setup_with_registry(
        config: PluginConfig,
        registry: &LocatorRegistry,
        editor: E,
        debugger: Box<dyn DebuggerBridge>,
        build: &dyn BuildSystem,
        cwd: &Path,
    ) -> RustgdbResult<Self> {
        let persist = config.persist_breakpoints.normalize_with(registry)?;
        let locator = registry.get(&persist.line_locator)?;
        let workspace_root = resolve_workspace_root(build, cwd);

        let mut store = BreakpointStore::new(editor, debugger, locator);
        if persist.enabled {
            store = store.with_persistence(BreakpointFile::for_workspace(&workspace_root));
        }
        let startup_report = store.load();

        info!(
            "Session ready in {:?} (persistence: {}, locator: {})",
            workspace_root, persist.enabled, persist.line_locator
        );
        Ok(Self {
            config,
            persist,
            workspace_root,
            store,
            active_target: None,
            startup_report,
        })
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn persist_config(&self) -> &PersistConfig {
        &self.persist
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn store(&self) -> &BreakpointStore<E> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BreakpointStore<E> {
        &mut self.store
    }

    /// What restoring saved breakpoints did during setup
    pub fn startup_report(&self) -> &RestoreReport {
        &self.startup_report
    }

    pub fn active_target(&self) -> Option<&DebugTarget> {
        self.active_target.as_ref()
    }

    /// Start debugging `target` and hand it every tracked breakpoint
    ///
    /// Returns how many breakpoints the debugger accepted.
    pub fn start_debugging(&mut self, target: DebugTarget) -> RustgdbResult<usize> {
        self.store.debugger_mut().start(&target)?;
        info!("Debugging {}", target);
        self.active_target = Some(target);
        Ok(self.store.restore_to_debugger())
    }

    /// Forget the active target once the debugger exits
    pub fn end_debugging(&mut self) {
        self.active_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PersistBreakpoints;
    use crate::debugger::{CommandLog, NullDebugger};
    use crate::editor::MemoryEditor;
    use crate::error::RustgdbError;
    use crate::workspace::{CargoMetadataInfo, MockBuildSystem};
    use std::fs;
    use tempfile::TempDir;

    fn build_at(root: &Path) -> MockBuildSystem {
        let root = root.to_path_buf();
        let mut build = MockBuildSystem::new();
        build.expect_metadata().returning(move |_| {
            Ok(CargoMetadataInfo {
                workspace_root: root.clone(),
                target_directory: root.join("target"),
                packages: Vec::new(),
            })
        });
        build
    }

    fn persisting(locator: &str) -> PluginConfig {
        PluginConfig {
            persist_breakpoints: PersistBreakpoints::Options {
                enabled: true,
                line_locator: Some(locator.to_string()),
            },
            ..PluginConfig::default()
        }
    }

    #[test]
    fn test_unknown_locator_fails_setup() {
        let temp = TempDir::new().unwrap();
        let result = DebugSession::setup(
            persisting("telepathy"),
            MemoryEditor::new(),
            Box::new(NullDebugger),
            &build_at(temp.path()),
            temp.path(),
        );
        assert_eq!(
            result.err().map(|e| e.error_code()),
            Some(RustgdbError::UnknownLocator(String::new()).error_code())
        );
    }

    #[test]
    fn test_breakpoint_file_lives_in_workspace_root() {
        let temp = TempDir::new().unwrap();
        let member = temp.path().join("crates").join("app");
        fs::create_dir_all(&member).unwrap();
        let source = member.join("main.rs");
        fs::write(&source, "fn main() {\n    run();\n}\n").unwrap();

        let mut session = DebugSession::setup(
            persisting("hash"),
            MemoryEditor::new(),
            Box::new(NullDebugger),
            &build_at(temp.path()),
            &member,
        )
        .unwrap();
        assert_eq!(session.workspace_root(), temp.path());
        assert_eq!(session.persist_config().line_locator, "hash");

        session.store_mut().create(&source.to_string_lossy(), 2);
        assert!(temp.path().join(".rustgdb").join("breakpoints.json").exists());
    }

    #[test]
    fn test_setup_restores_saved_breakpoints() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("main.rs");
        fs::write(&source, "fn main() {\n    run();\n}\n").unwrap();
        let file = source.to_string_lossy().into_owned();

        let mut first = DebugSession::setup(
            persisting("exact"),
            MemoryEditor::new(),
            Box::new(NullDebugger),
            &build_at(temp.path()),
            temp.path(),
        )
        .unwrap();
        first.store_mut().create(&file, 2);

        let second = DebugSession::setup(
            persisting("exact"),
            MemoryEditor::new(),
            Box::new(NullDebugger),
            &build_at(temp.path()),
            temp.path(),
        )
        .unwrap();
        assert_eq!(second.startup_report().restored.len(), 1);
        assert!(second.store().contains(&file, 2));
    }

    #[test]
    fn test_persistence_disabled_by_default() {
        let temp = TempDir::new().unwrap();
        let session = DebugSession::setup(
            PluginConfig::default(),
            MemoryEditor::new(),
            Box::new(NullDebugger),
            &build_at(temp.path()),
            temp.path(),
        )
        .unwrap();
        assert!(!session.persist_config().enabled);
        assert!(session.store().persistence_file().is_none());
    }

    #[test]
    fn test_start_debugging_sends_breakpoints() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("main.rs");
        fs::write(&source, "fn main() {\n    run();\n}\n").unwrap();
        let file = source.to_string_lossy().into_owned();

        let log = CommandLog::inactive();
        let mut session = DebugSession::setup(
            PluginConfig::default(),
            MemoryEditor::new(),
            Box::new(log.clone()),
            &build_at(temp.path()),
            temp.path(),
        )
        .unwrap();

        // Set before any debugger runs; the mirror is dropped
        session.store_mut().create(&file, 2);
        assert!(log.commands().is_empty());

        let binary = temp.path().join("target/debug/app");
        let sent = session
            .start_debugging(DebugTarget::Binary {
                path: binary.clone(),
                args: Vec::new(),
            })
            .unwrap();

        assert_eq!(sent, 1);
        assert_eq!(
            log.commands(),
            vec![format!("file {}", binary.display()), format!("break {}:2", file)]
        );
        assert!(session.active_target().is_some());
        session.end_debugging();
        assert!(session.active_target().is_none());
    }
}
