//! Install transaction - load, merge, gate, write
//!
//! A package install is a single read-modify-write cycle against the
//! manifest file: load a fresh document, merge the registry, and add the
//! dependency unless the project already declares it. The "already
//! declares" gate intentionally ignores the version: an install never
//! overwrites a dependency the user (or another tool) has pinned by hand,
//! even when the requested version differs. Nothing reaches disk unless a
//! new dependency is actually added.
//!
//! Confirmation is the caller's concern and comes in as a closure, so the
//! CLI can prompt while tests stay non-interactive.

use crate::document::ManifestDocument;
use crate::errors::ManifestError;
use crate::types::ScopedRegistry;
use std::path::Path;
use tracing::info;

/// One package to install: the registry that hosts it plus the dependency
/// entry to add.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub registry: ScopedRegistry,
    pub package_id: String,
    pub version: String,
}

/// What an install transaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Dependency added (and registry merged); manifest written.
    Installed,
    /// Dependency already declared; manifest left untouched.
    AlreadyInstalled,
    /// Caller's confirmation declined; manifest left untouched.
    Declined,
}

/// Run one install transaction against the manifest at `path`.
///
/// `confirm` is consulted only when the dependency is actually missing;
/// returning `false` aborts without writing.
pub fn install_with<F>(
    path: &Path,
    request: &InstallRequest,
    confirm: F,
) -> Result<InstallOutcome, ManifestError>
where
    F: FnOnce(&InstallRequest) -> bool,
{
    let mut doc = ManifestDocument::load_from_path(path)?;
    doc.add_registry(request.registry.clone());

    if doc.has_dependency(&request.package_id) {
        info!("{} already installed, skipping", request.package_id);
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    if !confirm(request) {
        return Ok(InstallOutcome::Declined);
    }

    doc.upsert_dependency(&request.package_id, &request.version)?;
    doc.save_to_path(path)?;

    info!("Installed {} {}", request.package_id, request.version);
    Ok(InstallOutcome::Installed)
}
