//! Registry of catalogs keyed by locale code.

use std::collections::HashMap;

use serde_json::Value;

use super::Catalog;

/// Owns every locale's catalog plus the designated default locale.
///
/// Registration happens at startup; [`register`](Self::register) replaces
/// any existing tree for the same code, which only hot reload and tests use.
/// UI code never mutates translation content.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Catalogs keyed by locale code.
    catalogs: HashMap<String, Catalog>,
    /// Fallback target of every resolution.
    default_locale: String,
}

impl CatalogStore {
    /// Creates an empty store with `default_locale` as the fallback target.
    #[must_use]
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self { catalogs: HashMap::new(), default_locale: default_locale.into() }
    }

    /// Registers `catalog` under `code`, replacing any previous tree.
    pub fn register(&mut self, code: impl Into<String>, catalog: Catalog) {
        let code = code.into();
        tracing::debug!("Registering catalog for locale: {code}");
        self.catalogs.insert(code, catalog);
    }

    /// The locale used as the fallback target.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Whether a catalog is registered for `code`.
    #[must_use]
    pub fn is_registered(&self, code: &str) -> bool {
        self.catalogs.contains_key(code)
    }

    /// The catalog registered for `code`, if any.
    #[must_use]
    pub fn catalog(&self, code: &str) -> Option<&Catalog> {
        self.catalogs.get(code)
    }

    /// Registered locale codes, in no particular order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Node at `segments` in the catalog for `code`.
    ///
    /// An unknown locale behaves like a locale in which nothing resolves.
    pub(crate) fn node(&self, code: &str, segments: &[&str]) -> Option<&Value> {
        self.catalog(code)?.node(segments)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    fn catalog(value: Value) -> Catalog {
        Catalog::from_value(value).unwrap()
    }

    #[googletest::test]
    fn register_and_lookup() {
        let mut store = CatalogStore::new("en");
        store.register("en", catalog(json!({"greeting": "Hello"})));
        store.register("fr", catalog(json!({"greeting": "Bonjour"})));

        expect_that!(store.is_registered("en"), eq(true));
        expect_that!(store.is_registered("fr"), eq(true));
        expect_that!(store.is_registered("de"), eq(false));
        expect_that!(store.default_locale(), eq("en"));
    }

    #[googletest::test]
    fn register_replaces_existing_tree() {
        let mut store = CatalogStore::new("en");
        store.register("en", catalog(json!({"greeting": "Hello"})));
        store.register("en", catalog(json!({"greeting": "Hi"})));

        let node = store.node("en", &["greeting"]);

        expect_that!(node, some(eq(&json!("Hi"))));
    }

    #[googletest::test]
    fn node_for_unknown_locale_is_none() {
        let store = CatalogStore::new("en");

        expect_that!(store.node("en", &["greeting"]), none());
    }

    #[googletest::test]
    fn locales_lists_registered_codes() {
        let mut store = CatalogStore::new("en");
        store.register("en", catalog(json!({})));
        store.register("fr", catalog(json!({})));

        let mut codes: Vec<&str> = store.locales().collect();
        codes.sort_unstable();

        expect_that!(codes, elements_are![eq(&"en"), eq(&"fr")]);
    }
}
