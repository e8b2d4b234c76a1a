//! Configuration for the upm CLI
//!
//! Two concerns live here: the install catalog (which registry and which
//! packages an `upm install` offers) and locating the Unity project's
//! `Packages/manifest.json`. Both are inputs to the core patcher, kept out
//! of it so the mergers stay reusable for arbitrary package installs.

pub mod catalog;
pub mod project_paths;

pub use catalog::{Catalog, CatalogError, PackageEntry, RegistryEntry};
pub use project_paths::{find_manifest, ProjectPathError, MANIFEST_FILE_NAME, PACKAGES_DIR_NAME};
