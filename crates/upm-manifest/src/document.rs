//! Manifest document - loading, rendering, and persistence
//!
//! A `ManifestDocument` is built fresh from file contents for every
//! operation, mutated in memory, and rendered back out. There is no caching
//! between installer invocations.
//!
//! Loading is two independent passes over the same text: serde_json decodes
//! the `scopedRegistries` array, and a delimiter scan captures the raw text
//! between the braces of the first `"dependencies"` key. Rendering inverts
//! that: the registries are re-serialized into a skeleton document with an
//! empty dependency table, and the captured block is spliced between the
//! skeleton's braces verbatim.

use crate::errors::ManifestError;
use crate::types::{DependencyPlaceholder, RawManifest, ScopedRegistry, SkeletonManifest};
use std::io::Write;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const DEPENDENCIES_KEY: &str = "\"dependencies\"";

/// In-memory representation of a `Packages/manifest.json`
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    /// Scoped registries, decoded structurally. Reformatted on write.
    pub registries: Vec<ScopedRegistry>,
    /// Raw text strictly between the `{` and `}` of the first
    /// `"dependencies"` key, exactly as found in the source. `None` when the
    /// manifest has no dependency table.
    pub dependency_block: Option<String>,
}

impl ManifestDocument {
    /// Parse manifest text into a document.
    ///
    /// A missing or null `scopedRegistries` key yields an empty registry
    /// list, and a missing dependency table yields `dependency_block: None`;
    /// neither is an error. Only malformed top-level JSON fails.
    pub fn parse(raw_text: &str) -> Result<Self, ManifestError> {
        let raw: RawManifest = serde_json::from_str(raw_text)?;
        let registries = raw.scoped_registries.unwrap_or_default();

        let dependency_block = dependency_span(raw_text).map(|span| raw_text[span].to_string());
        if dependency_block.is_none() {
            debug!("manifest has no dependency table");
        }

        Ok(ManifestDocument {
            registries,
            dependency_block,
        })
    }

    /// Load a document from a manifest file
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading manifest from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Render the document back to manifest text.
    ///
    /// The registries go through the structured encoder, so their formatting
    /// is normalized; the dependency block is spliced in byte-for-byte. A
    /// document without a dependency block renders an empty table.
    pub fn render(&self) -> Result<String, ManifestError> {
        let skeleton = serde_json::to_string_pretty(&SkeletonManifest {
            scoped_registries: &self.registries,
            dependencies: DependencyPlaceholder {},
        })?;

        // The placeholder serializes as {}, so the span is always present.
        let Some(span) = dependency_span(&skeleton) else {
            return Err(ManifestError::MissingDependencyTable);
        };

        let mut output = String::with_capacity(
            skeleton.len() + self.dependency_block.as_ref().map_or(0, String::len),
        );
        output.push_str(&skeleton[..span.start]);
        if let Some(block) = &self.dependency_block {
            output.push_str(block);
        }
        output.push_str(&skeleton[span.end..]);

        Ok(output)
    }

    /// Save the document to a manifest file with an atomic write.
    ///
    /// Rendering happens fully in memory before any file is touched, and the
    /// write goes to a temp file that is renamed into place, so an error at
    /// any point leaves the original file unmodified.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ManifestError> {
        let content = self.render()?;

        let temp_path = path.with_extension("json.tmp");
        {
            let file = std::fs::File::create(&temp_path)?;
            let mut writer = std::io::BufWriter::new(file);
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
        }
        std::fs::rename(&temp_path, path)?;

        debug!("Manifest written to: {:?}", path);
        Ok(())
    }
}

/// Locate the interior of the first `"dependencies"` table: the first `{`
/// after the key literal, then the first `}` after that. Returns the span
/// strictly between the braces.
///
/// The scan is textual on purpose. It never looks inside the table, so the
/// table's contents stay opaque and format-preserved.
fn dependency_span(text: &str) -> Option<Range<usize>> {
    let key_index = text.find(DEPENDENCIES_KEY)?;
    let after_key = key_index + DEPENDENCIES_KEY.len();
    let open = after_key + text[after_key..].find('{')?;
    let start = open + 1;
    let end = start + text[start..].find('}')?;
    Some(start..end)
}
