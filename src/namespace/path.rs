//! Key path splitting and tree traversal

use serde_json::{Map, Value};

/// Delimiter joining the segments of a string key (`prod:redis:host`).
pub const KEY_DELIMITER: char = ':';

/// Split a string key into its path segments. Empty segments are dropped, so
/// `":a::b:"` addresses the same value as `"a:b"`.
pub fn split_key(key: &str) -> Vec<&str> {
    key.split(KEY_DELIMITER).filter(|s| !s.is_empty()).collect()
}

/// Walk `segments` down from `root`.
///
/// Mappings are indexed by key and arrays by decimal position. Any other
/// value, or a missing key at any depth, ends the walk with `None`.
pub fn lookup<'a, S: AsRef<str>>(root: &'a Value, segments: &[S]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |node, segment| {
        let segment = segment.as_ref();
        match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    })
}

/// Set `value` at `segments` below `root`, creating intermediate mappings.
///
/// An intermediate value that is not a mapping is replaced by one. An empty
/// path is ignored.
pub fn insert<S: AsRef<str>>(root: &mut Map<String, Value>, segments: &[S], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut node = root;
    for segment in parents {
        let slot = node.entry(segment.as_ref().to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        node = match slot {
            Value::Object(map) => map,
            _ => unreachable!("slot was just made a mapping"),
        };
    }
    node.insert(last.as_ref().to_string(), value);
}

/// Deep-merge `lower` underneath `target`: keys already in `target` win,
/// nested mappings present on both sides are merged recursively.
pub fn merge_under(target: &mut Map<String, Value>, lower: &Map<String, Value>) {
    for (key, lower_value) in lower {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), lower_value.clone());
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(lower_map) = lower_value {
                    merge_under(existing, lower_map);
                }
            }
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_key_drops_empty_segments() {
        assert_eq!(split_key("prod:redis:host"), vec!["prod", "redis", "host"]);
        assert_eq!(split_key(":a::b:"), vec!["a", "b"]);
        assert!(split_key("").is_empty());
    }

    #[test]
    fn test_split_key_keeps_dots() {
        assert_eq!(split_key("labels:en_US:login.screen.id"), vec!["labels", "en_US", "login.screen.id"]);
    }

    #[test]
    fn test_lookup_walks_objects_and_arrays() {
        let tree = json!({"a": {"b": [10, {"c": "deep"}]}});
        assert_eq!(lookup(&tree, &["a", "b", "0"]), Some(&json!(10)));
        assert_eq!(lookup(&tree, &["a", "b", "1", "c"]), Some(&json!("deep")));
        assert_eq!(lookup(&tree, &["a", "b", "x"]), None);
        assert_eq!(lookup(&tree, &["a", "missing", "c"]), None);
    }

    #[test]
    fn test_lookup_stops_at_scalars() {
        let tree = json!({"a": "scalar"});
        assert_eq!(lookup(&tree, &["a", "b"]), None);
    }

    #[test]
    fn test_insert_creates_and_replaces_intermediates() {
        let mut root = Map::new();
        insert(&mut root, &["a", "b"], json!(1));
        insert(&mut root, &["scalar"], json!("x"));
        insert(&mut root, &["scalar", "nested"], json!(true));
        assert_eq!(Value::Object(root), json!({"a": {"b": 1}, "scalar": {"nested": true}}));
    }

    #[test]
    fn test_merge_under_keeps_target_values() {
        let mut target = json!({"host": "top", "opts": {"a": 1}})
            .as_object()
            .cloned()
            .expect("object");
        let lower = json!({"host": "low", "port": 6379, "opts": {"a": 2, "b": 3}});
        merge_under(&mut target, lower.as_object().expect("object"));
        assert_eq!(
            Value::Object(target),
            json!({"host": "top", "port": 6379, "opts": {"a": 1, "b": 3}})
        );
    }
}
