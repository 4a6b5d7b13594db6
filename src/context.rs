//! The consumer-facing locale context.

use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::catalog::CatalogStore;
use crate::error::CatalogError;
use crate::interpolate::{Params, interpolate};
use crate::prefs::LocalePrefs;
use crate::resolve;

/// Process-wide localization facade.
///
/// Owns the catalog store and the single active-locale marker. UI code goes
/// through [`t`](Self::t), [`t_with`](Self::t_with),
/// [`t_list`](Self::t_list), [`locale`](Self::locale) and
/// [`set_locale`](Self::set_locale) and never touches catalog internals.
///
/// The active locale sits behind an `RwLock` so one instance can be shared
/// (typically `Arc<I18n>`) across threads. `set_locale` is a single guarded
/// assignment, and catalogs are immutable after load, so readers observe
/// either the old or the new locale consistently, never a half-updated
/// state.
#[derive(Debug)]
pub struct I18n {
    /// All registered catalogs plus the default locale.
    store: CatalogStore,
    /// Currently selected locale code. Only `set_locale` writes this.
    active: RwLock<String>,
    /// Persisted locale preference, if the application configured one.
    prefs: Option<LocalePrefs>,
}

impl I18n {
    /// Creates a context with the store's default locale active.
    ///
    /// # Errors
    /// Returns [`CatalogError::DefaultLocaleUnregistered`] if the store has
    /// no catalog for its default locale. The default is the fallback target
    /// of every resolution, so a context without it cannot degrade
    /// meaningfully.
    pub fn new(store: CatalogStore) -> Result<Self, CatalogError> {
        if !store.is_registered(store.default_locale()) {
            return Err(CatalogError::DefaultLocaleUnregistered(
                store.default_locale().to_string(),
            ));
        }
        let active = RwLock::new(store.default_locale().to_string());
        Ok(Self { store, active, prefs: None })
    }

    /// Creates a context whose initial locale comes from `prefs`.
    ///
    /// Falls back to the store's default locale when no preference is stored
    /// or the stored code has no registered catalog. Subsequent
    /// [`set_locale`](Self::set_locale) calls write back to `prefs`.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn with_prefs(store: CatalogStore, prefs: LocalePrefs) -> Result<Self, CatalogError> {
        let mut context = Self::new(store)?;
        if let Some(code) = prefs.load() {
            if context.store.is_registered(&code) {
                *context.active.get_mut().unwrap_or_else(PoisonError::into_inner) = code;
            } else {
                tracing::warn!("Stored locale '{code}' has no catalog, keeping default");
            }
        }
        context.prefs = Some(prefs);
        Ok(context)
    }

    /// The currently active locale code.
    #[must_use]
    pub fn locale(&self) -> String {
        self.active.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// The catalog store backing this context.
    #[must_use]
    pub const fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Switches the active locale to `code` and persists the choice.
    ///
    /// An unregistered code falls back to the default locale instead of
    /// erroring; a missing translation language must not take the UI down.
    /// Every subsequent `t`/`t_list` call observes the new locale.
    pub fn set_locale(&self, code: &str) {
        let code = if self.store.is_registered(code) {
            code
        } else {
            tracing::warn!(
                "set_locale: unknown locale '{code}', falling back to '{}'",
                self.store.default_locale()
            );
            self.store.default_locale()
        };

        *self.active.write().unwrap_or_else(PoisonError::into_inner) = code.to_string();

        if let Some(prefs) = &self.prefs {
            prefs.store(code);
        }
    }

    /// Resolves `path` to a rendered string, without parameters.
    #[must_use]
    pub fn t(&self, path: &str) -> String {
        self.t_with(path, &Params::new())
    }

    /// Resolves `path` and interpolates `params` into the template.
    ///
    /// Fallback chain: active locale → default locale → the literal `path`
    /// itself, so a missing translation is visible in the UI rather than
    /// blank. A leaf that is not a string (nested mapping, list) counts as
    /// missing for this accessor.
    #[must_use]
    pub fn t_with(&self, path: &str, params: &Params) -> String {
        let locale = self.locale();
        match resolve::resolve(&self.store, &locale, path) {
            Some(Value::String(template)) => interpolate(template, params),
            Some(_) => {
                tracing::warn!("Key '{path}' is not a string leaf (locale: {locale})");
                path.to_string()
            }
            None => {
                tracing::warn!("Key '{path}' not found (locale: {locale})");
                path.to_string()
            }
        }
    }

    /// Resolves `path` to a typed list, without interpolation.
    ///
    /// Same traversal and fallback as [`t_with`](Self::t_with). Anything
    /// that is not a list of `T` degrades to an empty `Vec`, which renders
    /// as "nothing" instead of crashing a repeated UI element. Elements are
    /// returned verbatim; structured records are deserialized as-is for the
    /// caller to project fields from.
    #[must_use]
    pub fn t_list<T: DeserializeOwned>(&self, path: &str) -> Vec<T> {
        let locale = self.locale();
        match resolve::resolve(&self.store, &locale, path) {
            Some(value @ Value::Array(_)) => {
                serde_json::from_value(value.clone()).unwrap_or_else(|error| {
                    tracing::warn!("List '{path}' has unexpected element shape: {error}");
                    Vec::new()
                })
            }
            Some(_) => {
                tracing::warn!("Key '{path}' is not a list leaf (locale: {locale})");
                Vec::new()
            }
            None => {
                tracing::warn!("List '{path}' not found (locale: {locale})");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::catalog::Catalog;

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new("en");
        store.register(
            "en",
            Catalog::from_value(json!({
                "wizard": { "common": { "back": "Back", "next": "Next" } },
                "dashboard": { "greeting": "Welcome back, {name}" },
                "landing": { "hero": { "logos": ["ACME Corp", "TechStart"] } },
                "options": [
                    { "id": "conference", "label": "Conference" },
                    { "id": "workshop", "label": "Workshop" }
                ]
            }))
            .unwrap(),
        );
        store.register(
            "fr",
            Catalog::from_value(json!({
                "wizard": { "common": { "back": "Retour" } }
            }))
            .unwrap(),
        );
        store
    }

    fn context() -> I18n {
        I18n::new(store()).unwrap()
    }

    #[googletest::test]
    fn new_rejects_store_without_default_catalog() {
        let store = CatalogStore::new("en");

        let result = I18n::new(store);

        expect_that!(result, err(pat!(CatalogError::DefaultLocaleUnregistered(eq("en")))));
    }

    #[googletest::test]
    fn new_starts_on_the_default_locale() {
        let i18n = context();

        expect_that!(i18n.locale(), eq("en"));
    }

    #[googletest::test]
    fn t_returns_the_exact_leaf_text() {
        let i18n = context();

        expect_that!(i18n.t("wizard.common.back"), eq("Back"));
    }

    #[googletest::test]
    fn set_locale_takes_effect_immediately() {
        let i18n = context();

        expect_that!(i18n.t("wizard.common.back"), eq("Back"));

        i18n.set_locale("fr");

        expect_that!(i18n.locale(), eq("fr"));
        expect_that!(i18n.t("wizard.common.back"), eq("Retour"));
    }

    #[googletest::test]
    fn t_falls_back_to_the_default_locale() {
        let i18n = context();
        i18n.set_locale("fr");

        // Absent in fr, present in en.
        expect_that!(i18n.t("wizard.common.next"), eq("Next"));
    }

    #[googletest::test]
    fn missing_everywhere_returns_the_literal_path() {
        let i18n = context();

        expect_that!(i18n.t("no.such.key"), eq("no.such.key"));
    }

    #[googletest::test]
    fn empty_path_returns_the_literal_path() {
        let i18n = context();

        expect_that!(i18n.t(""), eq(""));
    }

    #[googletest::test]
    fn t_on_a_mapping_returns_the_literal_path() {
        let i18n = context();

        expect_that!(i18n.t("wizard.common"), eq("wizard.common"));
    }

    #[googletest::test]
    fn t_on_a_list_returns_the_literal_path() {
        let i18n = context();

        expect_that!(i18n.t("landing.hero.logos"), eq("landing.hero.logos"));
    }

    #[googletest::test]
    fn t_with_interpolates_params() {
        let i18n = context();
        let params = Params::new().with("name", "Ada");

        expect_that!(i18n.t_with("dashboard.greeting", &params), eq("Welcome back, Ada"));
    }

    #[googletest::test]
    fn t_is_idempotent_between_switches() {
        let i18n = context();
        let params = Params::new().with("name", "Ada");

        let first = i18n.t_with("dashboard.greeting", &params);
        let second = i18n.t_with("dashboard.greeting", &params);

        expect_that!(first, eq(&second));
    }

    #[googletest::test]
    fn set_locale_with_unknown_code_falls_back_to_default() {
        let i18n = context();
        i18n.set_locale("fr");

        i18n.set_locale("de");

        expect_that!(i18n.locale(), eq("en"));
    }

    #[googletest::test]
    fn t_list_returns_the_ordered_strings() {
        let i18n = context();

        let logos: Vec<String> = i18n.t_list("landing.hero.logos");

        expect_that!(logos, elements_are![eq("ACME Corp"), eq("TechStart")]);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct OptionItem {
        id: String,
        label: String,
    }

    #[googletest::test]
    fn t_list_deserializes_structured_records() {
        let i18n = context();

        let options: Vec<OptionItem> = i18n.t_list("options");

        expect_that!(options.len(), eq(2));
        expect_that!(
            options.first(),
            some(eq(&OptionItem { id: "conference".to_string(), label: "Conference".to_string() }))
        );
    }

    #[googletest::test]
    fn t_list_on_a_string_leaf_is_empty() {
        let i18n = context();

        let result: Vec<String> = i18n.t_list("wizard.common.back");

        expect_that!(result, is_empty());
    }

    #[googletest::test]
    fn t_list_missing_everywhere_is_empty() {
        let i18n = context();

        let result: Vec<String> = i18n.t_list("no.such.list");

        expect_that!(result, is_empty());
    }

    #[googletest::test]
    fn t_list_with_mismatched_element_type_is_empty() {
        let i18n = context();

        // Structured records do not deserialize as plain strings.
        let result: Vec<String> = i18n.t_list("options");

        expect_that!(result, is_empty());
    }

    #[googletest::test]
    fn with_prefs_restores_the_stored_locale() {
        let temp_dir = TempDir::new().unwrap();
        let prefs = LocalePrefs::new(temp_dir.path().join("locale.json"));
        prefs.store("fr");

        let i18n = I18n::with_prefs(store(), prefs).unwrap();

        expect_that!(i18n.locale(), eq("fr"));
    }

    #[googletest::test]
    fn with_prefs_ignores_an_unregistered_stored_locale() {
        let temp_dir = TempDir::new().unwrap();
        let prefs = LocalePrefs::new(temp_dir.path().join("locale.json"));
        prefs.store("de");

        let i18n = I18n::with_prefs(store(), prefs).unwrap();

        expect_that!(i18n.locale(), eq("en"));
    }

    #[googletest::test]
    fn set_locale_persists_the_choice() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locale.json");

        let i18n = I18n::with_prefs(store(), LocalePrefs::new(&path)).unwrap();
        i18n.set_locale("fr");

        expect_that!(LocalePrefs::new(&path).load(), some(eq("fr")));
    }

    #[googletest::test]
    fn set_locale_persists_the_fallback_on_unknown_code() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locale.json");

        let i18n = I18n::with_prefs(store(), LocalePrefs::new(&path)).unwrap();
        i18n.set_locale("de");

        expect_that!(LocalePrefs::new(&path).load(), some(eq("en")));
    }
}
