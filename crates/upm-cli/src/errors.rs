use thiserror::Error;

use upm_config::{CatalogError, ProjectPathError};
use upm_manifest::ManifestError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    ProjectPath(#[from] ProjectPathError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Package '{0}' is not in the catalog")]
    UnknownPackage(String),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_unknown_package_display() {
        let err = CliError::UnknownPackage("com.example.missing".to_string());
        assert_eq!(
            err.to_string(),
            "Package 'com.example.missing' is not in the catalog"
        );
    }
}
