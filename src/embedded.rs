//! Translation content compiled into the binary.
//!
//! Catalogs are constructed once at application start; there is no dynamic
//! fetch of translation data.

use crate::catalog::{Catalog, CatalogStore};
use crate::error::CatalogError;

/// English catalog source. English is the structural authority: every other
/// locale's key set is expected to be a subset of this one.
const EN: &str = include_str!("../locales/en.json");

/// French catalog source.
const FR: &str = include_str!("../locales/fr.json");

/// Locale selected when no preference exists, and the fallback target of
/// every resolution.
pub const DEFAULT_LOCALE: &str = "en";

/// Parses and registers every built-in catalog.
///
/// # Errors
/// Returns [`CatalogError`] if a built-in catalog fails to parse. That is a
/// packaging defect, not a runtime condition, so callers typically surface
/// it at startup and stop.
pub fn catalog_store() -> Result<CatalogStore, CatalogError> {
    let mut store = CatalogStore::new(DEFAULT_LOCALE);
    store.register("en", Catalog::from_json_str(EN)?);
    store.register("fr", Catalog::from_json_str(FR)?);
    Ok(store)
}
