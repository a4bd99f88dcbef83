//! CLI commands

pub mod breakpoints;
pub mod workspace;

use crate::args::Cli;
use crate::console::CliConsole;
use anyhow::Context;
use rustgdb_core::config::DEFAULT_CONFIG_FILE;
use rustgdb_core::workspace::resolve_workspace_root;
use rustgdb_core::{
    Cargo, DebugSession, LoggingConfig, MemoryEditor, NotifyLevel, NullDebugger,
    PersistBreakpoints, PluginConfig,
};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

static WORKSPACE_ROOT: OnceLock<PathBuf> = OnceLock::new();

/// Directory the command runs against
pub(crate) fn working_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    match &cli.workspace {
        Some(dir) => std::path::absolute(dir)
            .with_context(|| format!("Invalid workspace directory {}", dir.display())),
        None => std::env::current_dir().context("Cannot determine current directory"),
    }
}

/// Workspace root for `cwd`, asking cargo once per process
fn workspace_root(cwd: &Path) -> &'static Path {
    WORKSPACE_ROOT.get_or_init(|| resolve_workspace_root(&Cargo::new(), cwd))
}

/// `--config`, or `rustgdb.json` in the workspace root
fn config_path(cli: &Cli, root: &Path) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE))
}

/// Logging section of the configuration, read before the subscriber exists
///
/// Falls back to defaults on any error; commands that open a session report
/// a broken configuration themselves.
pub(crate) fn logging_config(cli: &Cli) -> LoggingConfig {
    let Ok(cwd) = working_dir(cli) else {
        return LoggingConfig::default();
    };
    PluginConfig::load(&config_path(cli, workspace_root(&cwd)))
        .map(|config| config.logging)
        .unwrap_or_default()
}

/// Open a headless session with persistence forced on
///
/// The configured locator is kept unless `--locator` overrides it.
pub(crate) fn open_session(cli: &Cli) -> anyhow::Result<DebugSession<MemoryEditor>> {
    let cwd = working_dir(cli)?;
    let cargo = Cargo::new();
    let root = workspace_root(&cwd);

    let config_path = config_path(cli, root);
    let mut config = PluginConfig::load(&config_path)?;
    let configured = config.persist_breakpoints.normalize()?;
    config.persist_breakpoints = PersistBreakpoints::Options {
        enabled: true,
        line_locator: Some(cli.locator.clone().unwrap_or(configured.line_locator)),
    };

    debug!("Opening session in {:?} with config {:?}", root, config_path);
    let session = DebugSession::setup(
        config,
        MemoryEditor::new(),
        Box::new(NullDebugger),
        &cargo,
        &cwd,
    )?;
    Ok(session)
}

/// Echo what the engine told the editor
pub(crate) fn print_notifications(console: &CliConsole, editor: &MemoryEditor) {
    for notification in editor.notifications() {
        match notification.level {
            NotifyLevel::Info => console.info(&notification.message),
            NotifyLevel::Warn => console.warn(&notification.message),
            NotifyLevel::Error => console.error(&notification.message),
        }
    }
}
