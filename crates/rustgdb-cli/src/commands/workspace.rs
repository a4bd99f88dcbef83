//! Workspace and build commands

use super::working_dir;
use crate::args::Cli;
use crate::console::CliConsole;
use rustgdb_core::persistence::BreakpointFile;
use rustgdb_core::workspace::{ArtifactKind, BuildSystem};
use rustgdb_core::{Cargo, LocatorRegistry};

/// Print workspace root, packages and binaries
pub fn show(cli: &Cli) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let cwd = working_dir(cli)?;
    let metadata = Cargo::new().metadata(&cwd)?;

    console.print_header("Workspace");
    console.print_row("root", &metadata.workspace_root.display().to_string());
    console.print_row("target", &metadata.target_directory.display().to_string());
    console.print_row(
        "breakpoints",
        &BreakpointFile::for_workspace(&metadata.workspace_root)
            .path()
            .display()
            .to_string(),
    );
    if let Some(current) = metadata.package_for_dir(&cwd) {
        console.print_row("current package", &current.name);
    }

    console.print_header("Packages");
    for package in &metadata.packages {
        let binaries: Vec<&str> = package.binaries().map(|t| t.name.as_str()).collect();
        console.print_row(&package.name, &binaries.join(", "));
    }
    Ok(())
}

/// Build and list executables
pub fn artifacts(cli: &Cli, cargo_args: &[String]) -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    let cwd = working_dir(cli)?;
    let args: Vec<&str> = cargo_args.iter().map(String::as_str).collect();
    let artifacts = Cargo::new().build_artifacts(&cwd, &args)?;

    console.print_header("Executables");
    if artifacts.is_empty() {
        console.warn("Build produced no executables");
    }
    for artifact in &artifacts {
        let kind = match artifact.kind {
            ArtifactKind::Bin => "bin",
            ArtifactKind::Test => "test",
            ArtifactKind::Bench => "bench",
            ArtifactKind::Example => "example",
        };
        console.print_row(
            &format!("{} ({})", artifact.target_name, kind),
            &artifact.executable.display().to_string(),
        );
    }
    Ok(())
}

pub fn locators() -> anyhow::Result<()> {
    let console = CliConsole::new(true);
    console.print_header("Line locators");
    for name in LocatorRegistry::with_builtins().names() {
        console.print_row(&name, "");
    }
    Ok(())
}
