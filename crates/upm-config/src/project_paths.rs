//! Utility functions for locating the Unity project manifest
//!
//! Unity keeps the package manifest at `<project>/Packages/manifest.json`.
//! The CLI can be run from anywhere inside a project, so resolution walks
//! up from a start directory until it finds that layout.

use std::path::{Path, PathBuf};

/// Directory Unity stores package data in, relative to the project root
pub const PACKAGES_DIR_NAME: &str = "Packages";

/// File name of the package manifest inside the Packages directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Error type for manifest path resolution
#[derive(Debug, Clone)]
pub enum ProjectPathError {
    /// No `Packages/manifest.json` found between the start directory and
    /// the filesystem root
    ManifestNotFound(PathBuf),
}

impl std::fmt::Display for ProjectPathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectPathError::ManifestNotFound(start) => write!(
                f,
                "No {}/{} found in {} or any parent directory",
                PACKAGES_DIR_NAME,
                MANIFEST_FILE_NAME,
                start.display()
            ),
        }
    }
}

impl std::error::Error for ProjectPathError {}

/// Find the package manifest for the project containing `start_dir`.
///
/// Checks `start_dir/Packages/manifest.json`, then each parent directory in
/// turn. Returns the manifest path, or an error when the walk reaches the
/// filesystem root without a hit.
pub fn find_manifest(start_dir: &Path) -> Result<PathBuf, ProjectPathError> {
    let mut dir = Some(start_dir);
    while let Some(current) = dir {
        let candidate = current.join(PACKAGES_DIR_NAME).join(MANIFEST_FILE_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        dir = current.parent();
    }

    Err(ProjectPathError::ManifestNotFound(start_dir.to_path_buf()))
}
