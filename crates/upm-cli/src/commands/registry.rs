//! Manage scoped registries in the project manifest

use crate::commands::resolve_manifest_path;
use crate::common::GlobalOpts;
use crate::errors::CliError;
use clap::Subcommand;
use colored::Colorize;
use upm_logger as logger;
use upm_manifest::{ManifestDocument, ScopedRegistry};

#[derive(Subcommand, Debug, Clone)]
pub enum RegistryAction {
    /// Add a scoped registry (no-op if an identical entry exists)
    Add {
        /// Display name of the registry
        #[arg(long)]
        name: String,
        /// Registry URL
        #[arg(long)]
        url: String,
        /// Package scope handled by this registry (repeatable, order matters)
        #[arg(long = "scope", required = true)]
        scopes: Vec<String>,
    },
}

pub fn handle_registry(action: RegistryAction, opts: &GlobalOpts) -> Result<(), CliError> {
    match action {
        RegistryAction::Add { name, url, scopes } => {
            let manifest_path = resolve_manifest_path(opts)?;
            let mut doc = ManifestDocument::load_from_path(&manifest_path)?;

            let candidate = ScopedRegistry::new(&name, &url, &scopes);
            if doc.add_registry(candidate) {
                doc.save_to_path(&manifest_path)?;
                logger::success(&format!("Added registry {}", name));
            } else {
                println!("Registry {} is already configured", name.cyan());
            }
            Ok(())
        }
    }
}
