//! Dot-path key resolution with locale fallback.

use serde_json::Value;

use crate::catalog::CatalogStore;

/// Resolves `path` against `locale`, retrying against the store's default
/// locale when the walk fails at any point.
///
/// Returns `None` when the path is empty or nothing resolves in either
/// locale. The same `(locale, path)` pair always resolves to the same node;
/// there is no state here beyond the store itself. This function stays
/// silent on a miss in the active locale alone: that is a normal fallback,
/// not a diagnostic.
pub(crate) fn resolve<'a>(store: &'a CatalogStore, locale: &str, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let segments: Vec<&str> = path.split('.').collect();

    store.node(locale, &segments).or_else(|| {
        if locale == store.default_locale() {
            None
        } else {
            store.node(store.default_locale(), &segments)
        }
    })
}
