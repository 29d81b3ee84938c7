//! Explicit construction of a [`ConfigStore`]

use std::path::{Path, PathBuf};

use super::selectors::{self, ENVIRONMENT, LOCALE, SELECTOR_DEFAULTS};
use super::ConfigStore;
use crate::error::Result;
use crate::namespace::{LayeredNamespace, Source};
use crate::sources::{args_layer, env_layer, file_layer};

/// Collects the inputs of a store. Nothing is read until [`build`](Self::build).
///
/// Unlike [`ConfigStore::load`], the builder never touches the process: the
/// arguments and environment it layers are exactly the ones handed to it.
#[derive(Debug, Clone)]
pub struct ConfigStoreBuilder {
    args: Vec<String>,
    env: Vec<(String, String)>,
    file: Option<PathBuf>,
    env_separator: Option<String>,
    selector_keys: [String; 2],
}

impl Default for ConfigStoreBuilder {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            env: Vec::new(),
            file: None,
            env_separator: None,
            selector_keys: SELECTOR_DEFAULTS.map(|entry| entry.key.to_string()),
        }
    }
}

impl ConfigStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command-line arguments, without the program name.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.env.push((name.into(), value.into()));
        self
    }

    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env.extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Split environment variable names on `separator` to address nested keys.
    pub fn env_separator(mut self, separator: impl Into<String>) -> Self {
        self.env_separator = Some(separator.into());
        self
    }

    /// Read the environment selector from `key` instead of `BUILD_ENV`.
    pub fn environment_key(mut self, key: impl Into<String>) -> Self {
        self.selector_keys[ENVIRONMENT] = key.into();
        self
    }

    /// Read the locale selector from `key` instead of `BUILD_LOCALE`.
    pub fn locale_key(mut self, key: impl Into<String>) -> Self {
        self.selector_keys[LOCALE] = key.into();
        self
    }

    pub fn build(self) -> Result<ConfigStore> {
        let mut layers = vec![args_layer(self.args), env_layer(self.env, self.env_separator.as_deref())];
        if let Some(path) = &self.file {
            layers.push(file_layer(path)?);
        }
        let namespace = LayeredNamespace::new(layers);

        let [environment, locale] = selectors::resolve_all(&namespace, &self.selector_keys);

        let layer_sizes: Vec<(Source, usize)> =
            namespace.layers().iter().map(|l| (l.source(), l.len())).collect();
        tracing::debug!(
            environment = %environment.value,
            locale = %locale.value,
            layers = ?layer_sizes,
            "Configuration loaded"
        );

        Ok(ConfigStore::from_parts(namespace, environment.value, locale.value))
    }
}
