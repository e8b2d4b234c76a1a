//! Manifest types
//!
//! `ScopedRegistry` is a plain value type: two registries are the same entry
//! iff name, url, and the scope list (in order) all match. The derived
//! `PartialEq`/`Eq`/`Hash` give exactly that, so registry deduplication never
//! needs a by-name index.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

/// A scoped package registry entry from `manifest.json`
///
/// Immutable once constructed; scope order is significant for equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScopedRegistry {
    pub name: Arc<str>,
    pub url: Arc<str>,
    #[serde(default)]
    pub scopes: SmallVec<[Arc<str>; 4]>,
}

impl ScopedRegistry {
    pub fn new<I, S>(name: &str, url: &str, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ScopedRegistry {
            name: Arc::from(name),
            url: Arc::from(url),
            scopes: scopes.into_iter().map(|s| Arc::from(s.as_ref())).collect(),
        }
    }
}

/// Deserialize-only view of the manifest: just the registry list.
///
/// Everything else in the file (including the dependency table) is left to
/// the delimiter scan in `document.rs`; unknown keys are ignored here.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawManifest {
    #[serde(default, rename = "scopedRegistries")]
    pub scoped_registries: Option<Vec<ScopedRegistry>>,
}

/// Serialize-only skeleton used by write-back: the registry list plus an
/// empty dependency table the real block is spliced into.
#[derive(Serialize)]
pub(crate) struct SkeletonManifest<'a> {
    #[serde(rename = "scopedRegistries")]
    pub scoped_registries: &'a [ScopedRegistry],
    pub dependencies: DependencyPlaceholder,
}

/// Serializes as `{}` so the skeleton always contains a dependency span.
#[derive(Serialize)]
pub(crate) struct DependencyPlaceholder {}
