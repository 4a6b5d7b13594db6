//! event-i18n
//!
//! Runtime localization engine for the event-management app: per-locale
//! translation catalogs, dot-path key resolution with locale fallback,
//! `{placeholder}` interpolation and typed list access.
//!
//! UI code consumes one facade, [`I18n`]: `t` / `t_with` for strings,
//! `t_list` for lists, `locale` to read the active locale and `set_locale`
//! to switch it. Everything degrades instead of failing: a missing key
//! renders as the key path itself, a missing list renders as an empty list,
//! and every such fallback emits a `tracing` warning.

pub mod catalog;
pub mod context;
pub mod embedded;
pub mod error;
pub mod interpolate;
pub mod prefs;
mod resolve;

pub use catalog::{Catalog, CatalogStore};
pub use context::I18n;
pub use error::CatalogError;
pub use interpolate::{ParamValue, Params, interpolate};
pub use prefs::LocalePrefs;
