//! Environment variable layer

use serde_json::{Map, Value};

use crate::namespace::{path, Layer, Source};

/// Build the environment layer from `vars`.
///
/// Every variable becomes a top-level string key. With a `separator`, names
/// containing it are split into a nested path instead, so with `"__"` the
/// variable `prod__redis__host` sets `prod:redis:host`. Values are never
/// typed: the environment only carries strings.
pub fn env_layer<I, K, V>(vars: I, separator: Option<&str>) -> Layer
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let separator = separator.filter(|s| !s.is_empty());
    let mut tree = Map::new();

    for (name, value) in vars {
        let name = name.into();
        let value = Value::String(value.into());
        match separator {
            Some(sep) if name.contains(sep) => {
                let segments: Vec<&str> = name.split(sep).filter(|s| !s.is_empty()).collect();
                path::insert(&mut tree, &segments, value);
            }
            _ => {
                tree.insert(name, value);
            }
        }
    }

    tracing::debug!("Loaded {} environment keys", tree.len());
    Layer::new(Source::Env, tree)
}

/// The process environment, skipping variables that are not valid UTF-8.
pub fn process_vars() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::LayeredNamespace;
    use serde_json::json;

    fn namespace(vars: &[(&str, &str)], separator: Option<&str>) -> LayeredNamespace {
        LayeredNamespace::new(vec![env_layer(vars.iter().copied(), separator)])
    }

    #[test]
    fn test_plain_variables_are_top_level_strings() {
        let ns = namespace(&[("BUILD_ENV", "prod"), ("PORT", "8080")], None);
        assert_eq!(ns.get_key("BUILD_ENV").as_deref(), Some(&json!("prod")));
        assert_eq!(ns.get_key("PORT").as_deref(), Some(&json!("8080")));
    }

    #[test]
    fn test_separator_nests() {
        let ns = namespace(&[("prod__redis__host", "r3"), ("PLAIN", "x")], Some("__"));
        assert_eq!(ns.get_key("prod:redis:host").as_deref(), Some(&json!("r3")));
        assert_eq!(ns.get_key("PLAIN").as_deref(), Some(&json!("x")));
    }

    #[test]
    fn test_without_separator_names_are_literal() {
        let ns = namespace(&[("prod__redis__host", "r3")], None);
        assert_eq!(ns.get_key("prod__redis__host").as_deref(), Some(&json!("r3")));
        assert_eq!(ns.get_key("prod:redis:host"), None);
    }

    #[test]
    fn test_empty_separator_is_ignored() {
        let ns = namespace(&[("A_B", "1")], Some(""));
        assert_eq!(ns.get_key("A_B").as_deref(), Some(&json!("1")));
    }
}
