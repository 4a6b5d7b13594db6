//! Persistence of the user's locale choice.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk shape of the preference file.
#[derive(Debug, Serialize, Deserialize)]
struct StoredPrefs {
    /// Last locale the user chose.
    locale: String,
}

/// Reads and writes the last-chosen locale code.
///
/// The file is a small JSON object (`{"locale":"fr"}`). Every failure mode
/// is non-fatal: a missing or corrupt file means "no preference", a failed
/// write is logged and dropped. Losing a preference must never take the
/// application down.
#[derive(Debug, Clone)]
pub struct LocalePrefs {
    /// Path of the preference file.
    path: PathBuf,
}

impl LocalePrefs {
    /// Creates a preference store backed by `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the preference file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored locale code, if a readable preference exists.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            tracing::debug!("Locale preference file not found: {:?}", self.path);
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!("Failed to read locale preference {:?}: {error}", self.path);
                return None;
            }
        };

        match serde_json::from_str::<StoredPrefs>(&content) {
            Ok(stored) => {
                tracing::debug!("Loaded locale preference: {}", stored.locale);
                Some(stored.locale)
            }
            Err(error) => {
                tracing::warn!("Failed to parse locale preference {:?}: {error}", self.path);
                None
            }
        }
    }

    /// Persists `code` as the new preference.
    pub fn store(&self, code: &str) {
        let stored = StoredPrefs { locale: code.to_string() };
        let json = match serde_json::to_string(&stored) {
            Ok(json) => json,
            Err(error) => {
                tracing::warn!("Failed to serialize locale preference: {error}");
                return;
            }
        };

        if let Some(parent) = self.path.parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            tracing::warn!("Failed to create preference directory {parent:?}: {error}");
            return;
        }

        if let Err(error) = fs::write(&self.path, json) {
            tracing::warn!("Failed to write locale preference {:?}: {error}", self.path);
        }
    }
}
