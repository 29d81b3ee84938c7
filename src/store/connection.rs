//! Connection parameters of a component

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

use super::selectors::scalar_to_string;

/// Connection fields recorded for one component in one environment.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Connection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl Connection {
    pub(crate) fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            host: map.get("host").and_then(scalar_to_string),
            port: map.get("port").and_then(port_from_value),
            uid: map.get("uid").and_then(scalar_to_string),
            password: map.get("password").and_then(scalar_to_string),
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("uid", &self.uid)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Ports come as numbers from files and as strings from env/argv layers.
/// A string port is plain ASCII digits, nothing else.
pub(crate) fn port_from_value(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s.parse().ok(),
        _ => None,
    }
}
