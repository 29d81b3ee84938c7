//! Lookup subcommands

use anyhow::Result;
use clap::Subcommand;
use ndd::ConfigStore;
use serde_json::Value;

#[derive(Subcommand)]
pub enum Lookup {
    /// Hostname of a component in the active environment
    Host { component: String },

    /// Port of a component in the active environment
    Port { component: String },

    /// Connection parameters of a component (password omitted)
    Connection { component: String },

    /// Any value by ':'-delimited key, e.g. prod:redis:host
    Get { key: String },

    /// Active deployment environment
    Env,

    /// Active locale
    Locale,

    /// All error strings of the active locale
    Errors,

    /// Error string for a code in the active locale
    Error { code: String },

    /// All labels of the active locale
    Labels,

    /// Label for an id in the active locale
    Label { code: String },

    /// Named database query
    Query { module: String, query_id: String },
}

pub fn run(store: &ConfigStore, lookup: &Lookup) -> Result<Value> {
    let (found, what) = match lookup {
        Lookup::Host { component } => {
            (store.hostname(component).map(Value::String), format!("host of '{component}'"))
        }
        Lookup::Port { component } => {
            (store.port(component).map(Value::from), format!("port of '{component}'"))
        }
        Lookup::Connection { component } => (
            store.connection(component).map(serde_json::to_value).transpose()?,
            format!("component '{component}'"),
        ),
        Lookup::Get { key } => (store.any_value(key), format!("key '{key}'")),
        Lookup::Env => return Ok(Value::String(store.environment().to_string())),
        Lookup::Locale => return Ok(Value::String(store.locale().to_string())),
        Lookup::Errors => (store.errors().cloned(), "errors".to_string()),
        Lookup::Error { code } => (store.error(code).map(Value::String), format!("error '{code}'")),
        Lookup::Labels => (store.labels().cloned(), "labels".to_string()),
        Lookup::Label { code } => (store.label(code).map(Value::String), format!("label '{code}'")),
        Lookup::Query { module, query_id } => (
            store.query(module, query_id).map(Value::String),
            format!("query '{query_id}' in module '{module}'"),
        ),
    };

    match found {
        Some(value) => Ok(value),
        None => anyhow::bail!(
            "No {what} defined (environment '{}', locale '{}')",
            store.environment(),
            store.locale()
        ),
    }
}
