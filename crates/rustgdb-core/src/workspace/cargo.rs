//! Cargo command-line front-end

use super::{BuildArtifact, BuildSystem, CargoMetadataInfo, parse_build_artifacts};
use crate::error::{RustgdbError, RustgdbResult};
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// Runs the `cargo` executable
#[derive(Debug, Clone)]
pub struct Cargo {
    program: String,
}

impl Default for Cargo {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
        }
    }
}

impl Cargo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different cargo binary (e.g. a rustup proxy path)
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> RustgdbResult<Output> {
        debug!("Running {} {} in {:?}", self.program, args.join(" "), dir);
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| {
                RustgdbError::build_system_with_context(
                    format!("Failed to run {}: {}", self.program, e),
                    args.join(" "),
                )
            })?;

        if !output.status.success() {
            return Err(RustgdbError::build_system_with_context(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
                args.join(" "),
            ));
        }
        Ok(output)
    }

    /// Build (or with `--no-run`, compile tests) and list the executables produced
    ///
    /// `args` are passed after the subcommand, e.g. `["test", "--no-run"]`.
    pub fn build_artifacts(&self, dir: &Path, args: &[&str]) -> RustgdbResult<Vec<BuildArtifact>> {
        let mut full: Vec<&str> = args.to_vec();
        if full.is_empty() {
            full.push("build");
        }
        full.push("--message-format=json");
        let output = self.run(dir, &full)?;
        Ok(parse_build_artifacts(&String::from_utf8_lossy(&output.stdout)))
    }
}

impl BuildSystem for Cargo {
    fn metadata(&self, dir: &Path) -> RustgdbResult<CargoMetadataInfo> {
        let output = self.run(dir, &["metadata", "--format-version", "1", "--no-deps"])?;
        serde_json::from_slice(&output.stdout).map_err(|e| {
            RustgdbError::build_system_with_context(
                format!("Invalid cargo metadata output: {}", e),
                dir.display().to_string(),
            )
        })
    }
}
