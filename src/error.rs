//! Load-time error definitions.

use thiserror::Error;

/// Errors that can occur while constructing locale catalogs.
///
/// These only surface at startup. Runtime key resolution never returns them:
/// missing keys and shape mismatches degrade to visible fallbacks instead
/// (see [`crate::context::I18n`]).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Translation content is not valid JSON.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top level of a catalog must be a JSON object.
    #[error("catalog root is not a JSON object")]
    RootNotObject,

    /// The store's default locale has no catalog. The default locale is the
    /// fallback target of every resolution, so a context cannot be built
    /// without it.
    #[error("default locale '{0}' has no registered catalog")]
    DefaultLocaleUnregistered(String),
}
