// Command handlers for the upm binary
pub mod install;
pub mod list;
pub mod registry;

use crate::common::GlobalOpts;
use crate::errors::CliError;
use std::path::PathBuf;

/// Resolve the manifest file to operate on: the `--manifest` override, or
/// the enclosing project's `Packages/manifest.json`.
pub fn resolve_manifest_path(opts: &GlobalOpts) -> Result<PathBuf, CliError> {
    if let Some(path) = &opts.manifest {
        return Ok(path.clone());
    }
    let cwd = std::env::current_dir()?;
    Ok(upm_config::find_manifest(&cwd)?)
}
