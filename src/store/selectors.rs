//! Environment and locale selection

use serde_json::Value;

use crate::namespace::LayeredNamespace;

/// Key naming the active deployment environment.
pub const ENVIRONMENT_KEY: &str = "BUILD_ENV";
/// Key naming the active locale.
pub const LOCALE_KEY: &str = "BUILD_LOCALE";

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_LOCALE: &str = "en_US";

/// A selector's default key, its fallback value and what it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorDefault {
    pub key: &'static str,
    pub value: &'static str,
    pub selects: &'static str,
}

/// Every selector a store resolves, in [`resolve_all`] order.
pub const SELECTOR_DEFAULTS: [SelectorDefault; 2] = [
    SelectorDefault { key: ENVIRONMENT_KEY, value: DEFAULT_ENVIRONMENT, selects: "build environment" },
    SelectorDefault { key: LOCALE_KEY, value: DEFAULT_LOCALE, selects: "build locale" },
];

pub(crate) const ENVIRONMENT: usize = 0;
pub(crate) const LOCALE: usize = 1;

/// A resolved selector and whether it came from the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub key: String,
    pub value: String,
    pub defaulted: bool,
}

/// Look `key` up as a single top-level segment and fall back to `default`
/// when it is missing, empty, or not a scalar.
pub fn resolve(namespace: &LayeredNamespace, key: &str, default: &str) -> Selector {
    let found = namespace.get(&[key]).and_then(|v| scalar_to_string(&v)).filter(|s| !s.is_empty());

    match found {
        Some(value) => Selector { key: key.to_string(), value, defaulted: false },
        None => Selector { key: key.to_string(), value: default.to_string(), defaulted: true },
    }
}

/// Resolve each entry of [`SELECTOR_DEFAULTS`], reading it from `keys[i]`
/// instead of the entry's default key. Each fallback is logged.
pub fn resolve_all(namespace: &LayeredNamespace, keys: &[String; 2]) -> [Selector; 2] {
    std::array::from_fn(|i| {
        let entry = SELECTOR_DEFAULTS[i];
        let selector = resolve(namespace, &keys[i], entry.value);
        if selector.defaulted {
            tracing::info!("{} not defined. Setting {} to {}", selector.key, entry.selects, selector.value);
        }
        selector
    })
}

/// Textual form of a scalar. Mappings, arrays and null have none.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
