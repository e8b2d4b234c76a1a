//! UPM Manifest Management
//!
//! This crate edits Unity `Packages/manifest.json` files without disturbing
//! the formatting of the dependency table. The manifest is hand-edited by
//! users and rewritten by other tools, so a parse/re-serialize round trip
//! would wreck diffs; instead the dependency table is carried as an opaque
//! text span and spliced back verbatim on write.
//!
//! The scoped-registry list, by contrast, is small and machine-shaped, so it
//! goes through serde and is reformatted on every write.

pub mod document;
pub mod errors;
pub mod installer;
mod merge;
pub mod types;

pub use document::ManifestDocument;
pub use errors::ManifestError;
pub use installer::{install_with, InstallOutcome, InstallRequest};
pub use types::ScopedRegistry;
