//! Path manifest model for directory deployments.
//!
//! A path manifest maps relative paths to the content identifiers of their
//! uploaded files, so one manifest identifier serves a whole site. The wire
//! format is fixed: `manifest` and `version` markers, an `index` pointer and
//! a `paths` table.

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{MANIFEST_FORMAT, MANIFEST_VERSION};

/// One uploaded file inside a manifest's path table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
}

/// Pointer to the index document; `path` stays empty when none was detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIndex {
    pub path: String,
}

/// Path manifest as uploaded to the storage network.
///
/// Paths are kept sorted, so the same set of files always serializes to the
/// same document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathManifest {
    pub manifest: String,
    pub version: String,
    pub index: ManifestIndex,
    pub paths: BTreeMap<String, ManifestEntry>,
}

impl Default for PathManifest {
    fn default() -> Self {
        Self::new()
    }
}

impl PathManifest {
    pub fn new() -> Self {
        Self {
            manifest: MANIFEST_FORMAT.to_string(),
            version: MANIFEST_VERSION.to_string(),
            index: ManifestIndex {
                path: String::new(),
            },
            paths: BTreeMap::new(),
        }
    }

    /// Record an uploaded file under its forward-slash relative path.
    /// Re-inserting a path overwrites the previous identifier.
    pub fn insert(&mut self, relative_path: impl Into<String>, id: impl Into<String>) {
        self.paths
            .insert(relative_path.into(), ManifestEntry { id: id.into() });
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Point `index.path` at the detected index document, if any.
    ///
    /// A top-level `index.html` wins outright; otherwise the lexicographically
    /// smallest path ending in `index.<hex>.html` (case-insensitive) is used,
    /// which keeps the choice deterministic when a build emits several hashed
    /// index files.
    pub fn finalize_index(&mut self) {
        if let Some(path) = detect_index(self.paths.keys()) {
            self.index.path = path;
        }
    }

    /// Pretty-printed JSON bytes, the exact form uploaded to the network.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}

fn detect_index<'a>(paths: impl Iterator<Item = &'a String>) -> Option<String> {
    // Constant pattern, cannot fail to compile.
    let hashed = Regex::new(r"(?i)index\.[a-f0-9]+\.html$").expect("hashed index pattern");

    let mut fallback: Option<&String> = None;
    for path in paths {
        if path == "index.html" {
            return Some(path.clone());
        }
        if hashed.is_match(path) {
            match fallback {
                Some(current) if current <= path => {}
                _ => fallback = Some(path),
            }
        }
    }
    fallback.cloned()
}
