//! The configuration store
//!
//! A [`ConfigStore`] is built once from command-line arguments, environment
//! variables and a config file, then answers environment- and locale-scoped
//! lookups. It holds no global state: every store is independent.

use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;
use crate::namespace::LayeredNamespace;

pub mod builder;
pub mod connection;
pub mod selectors;

pub use builder::ConfigStoreBuilder;
pub use connection::Connection;

use connection::port_from_value;
use selectors::scalar_to_string;

const ERRORS_KEY: &str = "errors";
const LABELS_KEY: &str = "labels";
const QUERIES_KEY: &str = "db-queries";

/// Environment- and locale-scoped view over a [`LayeredNamespace`].
///
/// Component, error, label and query getters look the namespace up on every
/// call. [`errors`](Self::errors) and [`labels`](Self::labels) return the
/// tables captured when the store was built.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    namespace: LayeredNamespace,
    environment: String,
    locale: String,
    errors: Option<Value>,
    labels: Option<Value>,
}

impl ConfigStore {
    /// Load from the process's arguments (minus the program name), the
    /// process environment and the file at `path`.
    ///
    /// A missing file is treated as empty. A malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let args = std::env::args_os().skip(1).filter_map(|arg| arg.into_string().ok());
        Self::builder().args(args).envs(crate::sources::env::process_vars()).file(path).build()
    }

    pub fn builder() -> ConfigStoreBuilder {
        ConfigStoreBuilder::new()
    }

    pub(crate) fn from_parts(namespace: LayeredNamespace, environment: String, locale: String) -> Self {
        let errors = namespace.get(&[ERRORS_KEY, locale.as_str()]).map(Cow::into_owned);
        let labels = namespace.get(&[LABELS_KEY, locale.as_str()]).map(Cow::into_owned);
        Self { namespace, environment, locale, errors, labels }
    }

    pub fn namespace(&self) -> &LayeredNamespace {
        &self.namespace
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Host of `component` in the active environment.
    pub fn hostname(&self, component: &str) -> Option<String> {
        self.component_field(component, "host").and_then(|v| scalar_to_string(&v))
    }

    /// Port of `component` in the active environment. Numeric strings are
    /// accepted; anything that is not a valid port is `None`.
    pub fn port(&self, component: &str) -> Option<u16> {
        self.component_field(component, "port").and_then(|v| port_from_value(&v))
    }

    pub fn uid(&self, component: &str) -> Option<String> {
        self.component_field(component, "uid").and_then(|v| scalar_to_string(&v))
    }

    pub fn password(&self, component: &str) -> Option<String> {
        self.component_field(component, "password").and_then(|v| scalar_to_string(&v))
    }

    /// All connection fields of `component`, or `None` if the active
    /// environment has no mapping for it.
    pub fn connection(&self, component: &str) -> Option<Connection> {
        let entry = self.namespace.get(&[self.environment.as_str(), component])?;
        entry.as_object().map(Connection::from_map)
    }

    /// Value at an arbitrary `:`-delimited key, not scoped to environment or
    /// locale.
    pub fn any_value(&self, key: &str) -> Option<Value> {
        self.namespace.get_key(key).map(Cow::into_owned)
    }

    /// Error table of the locale, as captured at load.
    pub fn errors(&self) -> Option<&Value> {
        self.errors.as_ref()
    }

    pub fn error(&self, code: &str) -> Option<String> {
        self.string_at(&[ERRORS_KEY, self.locale.as_str(), code])
    }

    /// Label table of the locale, as captured at load.
    pub fn labels(&self) -> Option<&Value> {
        self.labels.as_ref()
    }

    pub fn label(&self, code: &str) -> Option<String> {
        self.string_at(&[LABELS_KEY, self.locale.as_str(), code])
    }

    /// Query text registered under `module`.
    pub fn query(&self, module: &str, query_id: &str) -> Option<String> {
        self.string_at(&[QUERIES_KEY, module, query_id])
    }

    fn component_field(&self, component: &str, field: &str) -> Option<Cow<'_, Value>> {
        self.namespace.get(&[self.environment.as_str(), component, field])
    }

    fn string_at(&self, segments: &[&str]) -> Option<String> {
        self.namespace.get(segments).and_then(|v| scalar_to_string(&v))
    }
}
