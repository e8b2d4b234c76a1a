//! Merge operations on a loaded manifest document
//!
//! Both mergers are idempotent from the caller's point of view: re-running
//! an install never duplicates a registry and never rewrites a dependency
//! the project already declares (the pre-existence gate lives in
//! `has_dependency`, not here).
//!
//! The dependency merger works on comma-separated text fragments of the
//! opaque block rather than parsed JSON. Each fragment keeps whatever
//! whitespace and newlines it had, so untouched entries survive the edit
//! byte-for-byte.

use crate::document::ManifestDocument;
use crate::errors::ManifestError;
use crate::types::ScopedRegistry;
use tracing::debug;

impl ManifestDocument {
    /// Add a scoped registry unless an equal one is already present.
    ///
    /// Equality is full-value (name, url, and scopes element-wise in
    /// order), so two registries sharing a name but differing in url or
    /// scope list are both kept. Returns whether the document changed.
    pub fn add_registry(&mut self, candidate: ScopedRegistry) -> bool {
        if self.registries.contains(&candidate) {
            debug!("registry '{}' already present", candidate.name);
            return false;
        }

        self.registries.push(candidate);
        true
    }

    /// Check whether the dependency table declares `package_id`, whatever
    /// the version. This is the gate the install flow uses to decide
    /// whether to skip the write entirely.
    pub fn has_dependency(&self, package_id: &str) -> bool {
        let Some(block) = self.dependency_block.as_deref() else {
            return false;
        };

        let key = quoted(package_id);
        block.split(',').any(|fragment| {
            fragment
                .trim_matches(|c: char| c == '\n' || c == ' ')
                .split(':')
                .next()
                .is_some_and(|head| head.contains(&key))
        })
    }

    /// Set `package_id` to `version` inside the dependency table.
    ///
    /// The block is split on commas into raw fragments. Every fragment
    /// containing the quoted package id gets the text after its first `:`
    /// replaced with the quoted version; untouched fragments are rejoined
    /// verbatim. If nothing matched, a new entry is prepended. The
    /// containment match is kept from the original behavior: because the id
    /// is matched with both quotes, `"com.foo"` cannot hit the longer
    /// `"com.foo.bar"`, but a version string embedding the quoted id would
    /// still satisfy the scan.
    ///
    /// Fails when the manifest has no dependency table; no fallback
    /// location is guessed.
    pub fn upsert_dependency(
        &mut self,
        package_id: &str,
        version: &str,
    ) -> Result<bool, ManifestError> {
        let Some(block) = self.dependency_block.as_deref() else {
            return Err(ManifestError::MissingDependencyTable);
        };

        let key = quoted(package_id);

        // An empty table has no fragments; splitting "" would fabricate one
        // and leave a dangling comma behind the first insert.
        let mut fragments: Vec<String> = if block.trim().is_empty() {
            Vec::new()
        } else {
            block.split(',').map(str::to_string).collect()
        };

        let mut version_set = false;
        for fragment in &mut fragments {
            if !fragment.contains(&key) {
                continue;
            }
            if let Some(colon) = fragment.find(':') {
                *fragment = format!("{}:\"{}\"", &fragment[..colon], version);
                version_set = true;
            }
        }

        if !version_set {
            fragments.insert(0, format!("\n    {}: \"{}\"", key, version));
            debug!("prepending dependency {} = {}", package_id, version);
        }

        self.dependency_block = Some(fragments.join(","));
        Ok(true)
    }
}

fn quoted(package_id: &str) -> String {
    format!("\"{}\"", package_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openupm_registry() -> ScopedRegistry {
        ScopedRegistry::new(
            "package.openupm.com",
            "https://package.openupm.com",
            ["com.atteneder.gltfast", "com.openupm"],
        )
    }

    fn doc_with_block(block: &str) -> ManifestDocument {
        ManifestDocument {
            registries: Vec::new(),
            dependency_block: Some(block.to_string()),
        }
    }

    #[test]
    fn test_add_registry_idempotent() {
        let mut doc = doc_with_block("");
        assert!(doc.add_registry(openupm_registry()));
        assert!(!doc.add_registry(openupm_registry()));
        assert_eq!(doc.registries.len(), 1);
    }

    #[test]
    fn test_add_registry_dedupes_by_value_not_name() {
        let mut doc = doc_with_block("");
        assert!(doc.add_registry(openupm_registry()));

        let same_name_other_scopes = ScopedRegistry::new(
            "package.openupm.com",
            "https://package.openupm.com",
            ["com.openupm"],
        );
        assert!(doc.add_registry(same_name_other_scopes));
        assert_eq!(doc.registries.len(), 2);
    }

    #[test]
    fn test_add_registry_preserves_existing_order() {
        let mut doc = doc_with_block("");
        let first = ScopedRegistry::new("first", "https://first", ["a"]);
        doc.add_registry(first.clone());
        doc.add_registry(openupm_registry());
        assert_eq!(doc.registries[0], first);
        assert_eq!(doc.registries[1], openupm_registry());
    }

    #[test]
    fn test_has_dependency_matches_key_portion() {
        let doc = doc_with_block("\n    \"com.foo.bar\": \"1.0.0\"\n  ");
        assert!(doc.has_dependency("com.foo.bar"));
        assert!(!doc.has_dependency("com.foo"));
        assert!(!doc.has_dependency("com.unity.ugui"));
    }

    #[test]
    fn test_has_dependency_absent_block() {
        let doc = ManifestDocument {
            registries: Vec::new(),
            dependency_block: None,
        };
        assert!(!doc.has_dependency("com.foo.bar"));
    }

    #[test]
    fn test_upsert_into_empty_block_no_stray_comma() {
        let mut doc = doc_with_block("");
        let changed = doc.upsert_dependency("com.atteneder.gltfast", "2.0.0");
        assert!(changed.is_ok_and(|c| c));

        let block = doc.dependency_block.unwrap_or_default();
        assert_eq!(block, "\n    \"com.atteneder.gltfast\": \"2.0.0\"");
        assert!(!block.contains(','));
    }

    #[test]
    fn test_upsert_whitespace_only_block_treated_as_empty() {
        let mut doc = doc_with_block("\n  ");
        assert!(doc.upsert_dependency("com.foo", "1.0.0").is_ok());
        assert_eq!(
            doc.dependency_block.as_deref(),
            Some("\n    \"com.foo\": \"1.0.0\"")
        );
    }

    #[test]
    fn test_upsert_prepends_and_preserves_existing_entries() {
        let mut doc = doc_with_block("\n    \"com.foo.bar\": \"1.0.0\"\n  ");
        assert!(doc.upsert_dependency("com.atteneder.gltfast", "2.0.0").is_ok());
        assert_eq!(
            doc.dependency_block.as_deref(),
            Some("\n    \"com.atteneder.gltfast\": \"2.0.0\",\n    \"com.foo.bar\": \"1.0.0\"\n  ")
        );
    }

    #[test]
    fn test_upsert_replaces_existing_value_in_place() {
        let mut doc =
            doc_with_block("\n    \"com.foo.bar\": \"1.0.0\",\n    \"com.other\": \"3.0.0\"\n  ");
        assert!(doc.upsert_dependency("com.foo.bar", "2.0.0").is_ok());
        assert_eq!(
            doc.dependency_block.as_deref(),
            Some("\n    \"com.foo.bar\":\"2.0.0\",\n    \"com.other\": \"3.0.0\"\n  ")
        );
    }

    #[test]
    fn test_upsert_git_url_version() {
        let mut doc = doc_with_block("");
        assert!(doc
            .upsert_dependency("com.atteneder.draco", "https://gitlab.com/atteneder/DracoUnity.git")
            .is_ok());
        assert_eq!(
            doc.dependency_block.as_deref(),
            Some("\n    \"com.atteneder.draco\": \"https://gitlab.com/atteneder/DracoUnity.git\"")
        );
    }

    #[test]
    fn test_upsert_absent_block_fails() {
        let mut doc = ManifestDocument {
            registries: Vec::new(),
            dependency_block: None,
        };
        let result = doc.upsert_dependency("com.foo", "1.0.0");
        assert!(matches!(result, Err(ManifestError::MissingDependencyTable)));
    }

    #[test]
    fn test_upsert_replace_is_stable() {
        // Replacing consumes the fragment's value formatting once; after
        // that, re-applying the same version is a byte-for-byte fixpoint.
        let mut doc = doc_with_block("\n    \"com.foo.bar\": \"1.0.0\"\n  ");
        assert!(doc.upsert_dependency("com.foo.bar", "2.0.0").is_ok());
        let first = doc.dependency_block.clone();
        assert_eq!(first.as_deref(), Some("\n    \"com.foo.bar\":\"2.0.0\""));
        assert!(doc.upsert_dependency("com.foo.bar", "2.0.0").is_ok());
        assert_eq!(doc.dependency_block, first);
    }
}
