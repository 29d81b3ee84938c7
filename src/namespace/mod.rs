//! Layered key-value namespace
//!
//! Every lookup is served from an ordered list of layers, one per source.
//! Precedence is fixed: command-line arguments > environment variables > file.

use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

pub mod path;

pub use path::{split_key, KEY_DELIMITER};

/// Where a layer's values came from. Declaration order is precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Source {
    Args,
    Env,
    File,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Args => "argv",
            Source::Env => "env",
            Source::File => "file",
        };
        f.write_str(name)
    }
}

/// One source's tree of values.
#[derive(Debug, Clone)]
pub struct Layer {
    source: Source,
    tree: Value,
}

impl Layer {
    pub fn new(source: Source, tree: Map<String, Value>) -> Self {
        Self { source, tree: Value::Object(tree) }
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.tree.as_object().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        path::lookup(&self.tree, segments)
    }
}

/// The merged, precedence-ordered view over all layers. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct LayeredNamespace {
    layers: Vec<Layer>,
}

impl LayeredNamespace {
    /// Build a namespace from `layers`, ordering them by [`Source`] precedence.
    /// Layers of the same source keep their relative order.
    pub fn new(mut layers: Vec<Layer>) -> Self {
        layers.sort_by_key(Layer::source);
        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Resolve `segments` against the layers.
    ///
    /// The highest-precedence layer defining the path wins. When the winning
    /// value is a mapping, mappings at the same path in lower layers are
    /// merged beneath it, so a partial override in the environment does not
    /// hide the rest of a file's section. Scalars and arrays never merge.
    pub fn get<S: AsRef<str>>(&self, segments: &[S]) -> Option<Cow<'_, Value>> {
        let mut found = self.layers.iter().filter_map(|layer| layer.get(segments));
        let first = found.next()?;

        let Value::Object(top) = first else {
            return Some(Cow::Borrowed(first));
        };

        let mut lower_maps = found.filter_map(Value::as_object).peekable();
        if lower_maps.peek().is_none() {
            return Some(Cow::Borrowed(first));
        }

        let mut merged = top.clone();
        for lower in lower_maps {
            path::merge_under(&mut merged, lower);
        }
        Some(Cow::Owned(Value::Object(merged)))
    }

    /// Resolve a `:`-delimited key such as `prod:redis:host`.
    pub fn get_key(&self, key: &str) -> Option<Cow<'_, Value>> {
        self.get(&split_key(key))
    }

    /// Which source the value at `segments` comes from, if any.
    pub fn source_of<S: AsRef<str>>(&self, segments: &[S]) -> Option<Source> {
        self.layers.iter().find(|layer| layer.get(segments).is_some()).map(Layer::source)
    }
}
