//! Placeholder interpolation for template strings.

use std::collections::HashMap;
use std::fmt;

/// A value a caller can supply for a placeholder.
///
/// Numbers render with plain decimal stringification; locale-aware number
/// formatting is out of scope.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Literal text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Named parameters for one [`interpolate`] call.
///
/// Parameters a template does not reference are ignored; tokens with no
/// matching parameter stay verbatim in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    /// Placeholder name → value.
    values: HashMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds a parameter in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value for `name`, if supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Whether no parameters were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Substitutes `{identifier}` tokens in `template` with values from `params`.
///
/// One forward pass: substituted text is never re-scanned, so a value that
/// itself contains `{token}`-shaped text comes through literally and cannot
/// loop. Every occurrence of the same token is replaced identically. Tokens
/// without a matching parameter, and brace sequences that are not
/// `{identifier}`, stay verbatim. Never fails.
#[must_use]
pub fn interpolate(template: &str, params: &Params) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let (head, tail) = rest.split_at(start);
        out.push_str(head);

        if let Some((name, after)) = take_token(tail) {
            match params.get(name) {
                Some(value) => out.push_str(&value.to_string()),
                None => {
                    // Unmatched token stays verbatim, braces included.
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = after;
        } else {
            // Not a well-formed token; emit the brace and keep scanning.
            out.push('{');
            rest = tail.strip_prefix('{').unwrap_or(tail);
        }
    }

    out.push_str(rest);
    out
}

/// Parses a `{identifier}` token at the start of `input`.
///
/// Returns the identifier and the remainder after the closing brace.
fn take_token(input: &str) -> Option<(&str, &str)> {
    let body = input.strip_prefix('{')?;
    let end = body.find('}')?;
    let (name, after) = body.split_at(end);
    if is_identifier(name) { Some((name, after.strip_prefix('}')?)) } else { None }
}

/// `true` when `name` matches `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
