//! Build system collaborator
//!
//! The breakpoint engine only needs the workspace root, which decides where
//! the breakpoint file lives. The cargo front-end also exposes package lookup
//! and build-artifact enumeration for choosing what to debug.

mod artifacts;
mod cargo;
mod models;

pub use artifacts::{ArtifactKind, BuildArtifact, parse_build_artifacts};
pub use cargo::Cargo;
pub use models::{CargoMetadataInfo, PackageInfo, TargetInfo};

use crate::error::RustgdbResult;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Build system metadata source
#[cfg_attr(test, mockall::automock)]
pub trait BuildSystem {
    /// Workspace metadata for the project containing `dir`
    fn metadata(&self, dir: &Path) -> RustgdbResult<CargoMetadataInfo>;
}

/// Workspace root for `cwd`, falling back to `cwd` itself when the build
/// system cannot tell
pub fn resolve_workspace_root(build: &dyn BuildSystem, cwd: &Path) -> PathBuf {
    match build.metadata(cwd) {
        Ok(metadata) => {
            debug!("Resolved workspace root {:?}", metadata.workspace_root);
            metadata.workspace_root
        }
        Err(e) => {
            warn!("Falling back to {:?} as workspace root: {}", cwd, e);
            cwd.to_path_buf()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RustgdbError;

    #[test]
    fn test_root_from_metadata() {
        let mut build = MockBuildSystem::new();
        build.expect_metadata().returning(|_| {
            Ok(CargoMetadataInfo {
                workspace_root: PathBuf::from("/work"),
                target_directory: PathBuf::from("/work/target"),
                packages: Vec::new(),
            })
        });
        assert_eq!(
            resolve_workspace_root(&build, Path::new("/work/crates/app")),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn test_root_falls_back_to_cwd() {
        let mut build = MockBuildSystem::new();
        build
            .expect_metadata()
            .times(1)
            .returning(|_| Err(RustgdbError::build_system("could not find Cargo.toml")));
        assert_eq!(
            resolve_workspace_root(&build, Path::new("/scratch")),
            PathBuf::from("/scratch")
        );
    }
}
