//! Install packages from the catalog into the project manifest
//!
//! Orchestration per package: merge the registry, skip entirely when the
//! dependency is already declared (whatever its version - manual pins are
//! never overwritten), otherwise confirm with the user and write. Each
//! package is one read-modify-write transaction against the manifest file.

use crate::commands::resolve_manifest_path;
use crate::common::GlobalOpts;
use crate::errors::CliError;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use upm_config::{Catalog, PackageEntry, RegistryEntry};
use upm_logger as logger;
use upm_manifest::{install_with, InstallOutcome, InstallRequest, ScopedRegistry};

pub fn handle_install(
    package: Option<String>,
    yes: bool,
    opts: &GlobalOpts,
) -> Result<(), CliError> {
    let manifest_path = resolve_manifest_path(opts)?;
    let catalog = Catalog::load(opts.catalog.as_deref())?;
    logger::debug(&format!("Using manifest: {}", manifest_path.display()));

    let selected: Vec<&PackageEntry> = match &package {
        Some(id) => vec![catalog
            .get_package(id)
            .ok_or_else(|| CliError::UnknownPackage(id.clone()))?],
        None => catalog.packages.iter().collect(),
    };

    for entry in selected {
        install_one(&manifest_path, &catalog.registry, entry, yes)?;
    }

    Ok(())
}

fn install_one(
    manifest_path: &Path,
    registry: &RegistryEntry,
    entry: &PackageEntry,
    yes: bool,
) -> Result<(), CliError> {
    let request = InstallRequest {
        registry: ScopedRegistry::new(&registry.name, &registry.url, &registry.scopes),
        package_id: entry.id.clone(),
        version: entry.version.clone(),
    };

    let outcome = install_with(manifest_path, &request, |req| {
        yes || confirm_install(req)
    })?;

    match outcome {
        InstallOutcome::Installed => {
            logger::success(&format!("Installed {} {}", entry.id, entry.version));
        }
        InstallOutcome::AlreadyInstalled => {
            println!("{} is already installed", entry.id.cyan());
        }
        InstallOutcome::Declined => {
            logger::info(&format!("Skipped {}", entry.id));
        }
    }

    Ok(())
}

fn confirm_install(request: &InstallRequest) -> bool {
    print!(
        "Add {} {} to your project? [y/N] ",
        request.package_id.cyan(),
        request.version
    );
    let _ = io::stdout().flush();

    let mut response = String::new();
    if io::stdin().read_line(&mut response).is_ok() {
        matches!(response.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
