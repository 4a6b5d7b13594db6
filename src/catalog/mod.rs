//! Per-locale translation catalogs.

mod store;

use std::collections::BTreeSet;

use serde_json::Value;
pub use store::CatalogStore;

use crate::error::CatalogError;

/// One locale's translation tree, immutable after construction.
///
/// Interior nodes are JSON objects. Leaves are either template strings
/// (rendered through [`crate::interpolate::interpolate`]) or ordered lists
/// of strings or structured records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Root of the tree. Always a JSON object.
    root: Value,
}

impl Catalog {
    /// Creates a catalog from an already parsed tree.
    ///
    /// # Errors
    /// Returns [`CatalogError::RootNotObject`] if `root` is not a JSON
    /// object.
    pub fn from_value(root: Value) -> Result<Self, CatalogError> {
        if root.is_object() { Ok(Self { root }) } else { Err(CatalogError::RootNotObject) }
    }

    /// Parses a catalog from JSON text.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for invalid JSON and
    /// [`CatalogError::RootNotObject`] if the document is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Walks `segments` down the tree.
    ///
    /// Returns `None` when a segment is absent or an intermediate node is
    /// not an object. Absence is an ordinary outcome here, not an error;
    /// the resolver turns it into a fallback.
    #[must_use]
    pub fn node(&self, segments: &[&str]) -> Option<&Value> {
        let mut current = &self.root;
        for segment in segments {
            current = current.as_object()?.get(*segment)?;
        }
        Some(current)
    }

    /// Dot-joined key set of every leaf in the tree.
    ///
    /// Array elements are addressed as `key[0]`, `key[1]`, ... so that two
    /// catalogs can be compared structurally (the parity check asserts every
    /// locale's key set is a subset of the default locale's).
    #[must_use]
    pub fn leaf_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_leaf_keys(&self.root, None, &mut keys);
        keys
    }
}

/// Recursive walk behind [`Catalog::leaf_keys`].
fn collect_leaf_keys(value: &Value, prefix: Option<&str>, keys: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                collect_leaf_keys(child, Some(&full_key), keys);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                collect_leaf_keys(child, Some(&full_key), keys);
            }
        }
        _ => {
            if let Some(key) = prefix {
                keys.insert(key.to_string());
            }
        }
    }
}
