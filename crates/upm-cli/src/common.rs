//! Common types and utilities shared across commands

use clap::Parser;
use std::path::PathBuf;

/// Global CLI options available to all commands
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    #[arg(short, long, global = true, help = "Decrease verbosity")]
    pub quiet: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug)")]
    pub verbose: u8,

    #[arg(
        long,
        global = true,
        help = "Path to the manifest file (default: Packages/manifest.json found from the current directory)"
    )]
    pub manifest: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Path to a catalog TOML file (default: UPM_CATALOG, then ~/.config/upm/catalog.toml, then built-ins)"
    )]
    pub catalog: Option<PathBuf>,
}

impl GlobalOpts {
    /// Get the effective verbosity level
    /// - 0: quiet/warn only
    /// - 1: debug (-v)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
