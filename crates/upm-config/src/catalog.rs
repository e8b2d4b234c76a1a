//! Install catalog
//!
//! The catalog names the scoped registry to merge and the packages offered
//! for install. It ships with built-in defaults (the OpenUPM glTFast/Draco
//! set) and can be replaced with a TOML file:
//!
//! ```toml
//! [registry]
//! name = "package.openupm.com"
//! url = "https://package.openupm.com"
//! scopes = ["com.atteneder.gltfast", "com.openupm"]
//!
//! [[packages]]
//! id = "com.atteneder.gltfast"
//! version = "2.0.0"
//! ```
//!
//! Resolution order: explicit path, `UPM_CATALOG` env var, then
//! `~/.config/upm/catalog.toml` when it exists, then the built-ins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Env var naming a catalog file to use instead of the defaults
pub const CATALOG_ENV: &str = "UPM_CATALOG";

/// Registry descriptor as written in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

/// One installable package: identifier plus version string or git URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageEntry {
    pub id: String,
    pub version: String,
}

/// The set of packages an `upm install` offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub registry: RegistryEntry,
    #[serde(default)]
    pub packages: Vec<PackageEntry>,
}

/// Error type for catalog loading
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    Read(PathBuf, std::io::Error),
    /// The catalog file is not valid TOML of the expected shape
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Read(path, e) => {
                write!(f, "Failed to read catalog {}: {}", path.display(), e)
            }
            CatalogError::Parse(path, e) => {
                write!(f, "Failed to parse catalog {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl Default for Catalog {
    /// The built-in catalog: glTFast and Draco from OpenUPM, matching the
    /// packages this tool historically installed.
    fn default() -> Self {
        Catalog {
            registry: RegistryEntry {
                name: "package.openupm.com".to_string(),
                url: "https://package.openupm.com".to_string(),
                scopes: vec![
                    "com.atteneder.gltfast".to_string(),
                    "com.openupm".to_string(),
                ],
            },
            packages: vec![
                PackageEntry {
                    id: "com.atteneder.gltfast".to_string(),
                    version: "2.0.0".to_string(),
                },
                PackageEntry {
                    id: "com.atteneder.draco".to_string(),
                    version: "https://gitlab.com/atteneder/DracoUnity.git".to_string(),
                },
            ],
        }
    }
}

impl Catalog {
    /// Default on-disk location for a user catalog
    pub fn path() -> PathBuf {
        dirs::home_dir().map_or_else(
            || PathBuf::from(".config/upm/catalog.toml"),
            |h| h.join(".config").join("upm").join("catalog.toml"),
        )
    }

    /// Load a catalog file from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Read(path.to_path_buf(), e))?;
        toml::from_str(&content).map_err(|e| CatalogError::Parse(path.to_path_buf(), e))
    }

    /// Resolve the catalog to use.
    ///
    /// An explicit path (CLI flag) wins, then `UPM_CATALOG`, then the user
    /// catalog file if one exists, then the built-in defaults. A named file
    /// that fails to load is an error, never a silent fallback.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CatalogError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        if let Ok(env_path) = std::env::var(CATALOG_ENV) {
            return Self::load_from_path(Path::new(&env_path));
        }
        let user_catalog = Self::path();
        if user_catalog.is_file() {
            return Self::load_from_path(&user_catalog);
        }
        Ok(Self::default())
    }

    /// Look up a catalog entry by package id
    pub fn get_package(&self, id: &str) -> Option<&PackageEntry> {
        self.packages.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::default();
        assert_eq!(catalog.registry.name, "package.openupm.com");
        assert_eq!(
            catalog.registry.scopes,
            vec!["com.atteneder.gltfast", "com.openupm"]
        );
        assert_eq!(catalog.packages.len(), 2);
        assert!(catalog
            .get_package("com.atteneder.draco")
            .is_some_and(|p| p.version.ends_with("DracoUnity.git")));
    }

    #[test]
    fn test_load_from_toml_file() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("catalog.toml");
        let written = fs::write(
            &path,
            r#"
[registry]
name = "registry.example.com"
url = "https://registry.example.com"
scopes = ["com.example"]

[[packages]]
id = "com.example.widgets"
version = "1.2.3"
"#,
        );
        assert!(written.is_ok(), "Failed to write catalog fixture");

        let catalog = Catalog::load_from_path(&path);
        assert!(catalog.is_ok_and(|c| {
            c.registry.name == "registry.example.com"
                && c.packages.len() == 1
                && c.packages[0].id == "com.example.widgets"
        }));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let result = Catalog::load_from_path(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(CatalogError::Read(_, _))));
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("catalog.toml");
        if fs::write(&path, "registry = 42").is_err() {
            return;
        }
        let result = Catalog::load_from_path(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_, _))));
    }

    #[test]
    fn test_explicit_path_wins() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("catalog.toml");
        if fs::write(
            &path,
            "[registry]\nname = \"n\"\nurl = \"https://u\"\nscopes = []\n",
        )
        .is_err()
        {
            return;
        }
        let catalog = Catalog::load(Some(&path));
        assert!(catalog.is_ok_and(|c| c.registry.name == "n" && c.packages.is_empty()));
    }
}
