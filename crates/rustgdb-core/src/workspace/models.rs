//! `cargo metadata` data model

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Subset of `cargo metadata --format-version 1` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoMetadataInfo {
    pub workspace_root: PathBuf,
    pub target_directory: PathBuf,
    #[serde(default)]
    pub packages: Vec<PackageInfo>,
}

/// A workspace package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub manifest_path: PathBuf,
    #[serde(default)]
    pub targets: Vec<TargetInfo>,
}

/// A compilation target within a package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetInfo {
    pub name: String,
    #[serde(default)]
    pub kind: Vec<String>,
    pub src_path: PathBuf,
}

impl TargetInfo {
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.iter().any(|k| k == kind)
    }
}

impl PackageInfo {
    /// Directory holding the package manifest
    pub fn root(&self) -> &Path {
        self.manifest_path
            .parent()
            .unwrap_or(self.manifest_path.as_path())
    }

    /// Binary targets of this package
    pub fn binaries(&self) -> impl Iterator<Item = &TargetInfo> {
        self.targets.iter().filter(|t| t.is_kind("bin"))
    }
}

impl CargoMetadataInfo {
    /// The package whose directory most closely contains `dir`
    pub fn package_for_dir(&self, dir: &Path) -> Option<&PackageInfo> {
        self.packages
            .iter()
            .filter(|p| dir.starts_with(p.root()))
            .max_by_key(|p| p.root().components().count())
    }

    /// Look a package up by name
    pub fn package(&self, name: &str) -> Option<&PackageInfo> {
        self.packages.iter().find(|p| p.name == name)
    }
}
