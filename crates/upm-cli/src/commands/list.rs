//! Display the registries and dependencies of the project manifest
//!
//! Read-only. The dependency block is split the same way the merger splits
//! it, but only for display; nothing here writes back.

use crate::commands::resolve_manifest_path;
use crate::common::GlobalOpts;
use crate::errors::CliError;
use colored::Colorize;
use upm_manifest::ManifestDocument;

pub fn handle_list(opts: &GlobalOpts) -> Result<(), CliError> {
    let manifest_path = resolve_manifest_path(opts)?;
    let doc = ManifestDocument::load_from_path(&manifest_path)?;

    println!("{}", "Scoped registries:".bold().green());
    if doc.registries.is_empty() {
        println!("  {}", "(none)".yellow());
    } else {
        for registry in &doc.registries {
            println!("  {} {}", registry.name.cyan(), registry.url);
            for scope in &registry.scopes {
                println!("    {}", scope);
            }
        }
    }

    println!("{}", "Dependencies:".bold().green());
    match doc.dependency_block.as_deref() {
        None => println!("  {}", "(no dependency table)".yellow()),
        Some(block) if block.trim().is_empty() => println!("  {}", "(empty)".yellow()),
        Some(block) => {
            for (id, version) in parse_entries(block) {
                println!("  {}: {}", id.cyan(), version);
            }
        }
    }

    Ok(())
}

/// Split the opaque block into display pairs, dropping the quotes
fn parse_entries(block: &str) -> Vec<(String, String)> {
    block
        .split(',')
        .filter_map(|fragment| {
            let (key, value) = fragment.split_once(':')?;
            let id = key.trim().trim_matches('"');
            let version = value.trim().trim_matches('"');
            if id.is_empty() {
                None
            } else {
                Some((id.to_string(), version.to_string()))
            }
        })
        .collect()
}
