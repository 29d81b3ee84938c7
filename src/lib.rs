//! ndd: deployment configuration scoped by environment and locale
//!
//! Connection parameters, localized error and label strings, and named
//! database queries are read from a config file, process environment
//! variables and command-line arguments (in increasing precedence), then
//! served through a [`ConfigStore`].
//!
//! ```no_run
//! let store = ndd::ConfigStore::load("config.json")?;
//! let host = store.hostname("redis");
//! let query = store.query("user-mgmt", "get-all-users");
//! # Ok::<(), ndd::LoadError>(())
//! ```

pub mod error;
pub mod namespace;
pub mod sources;
pub mod store;

pub use error::LoadError;
pub use namespace::{LayeredNamespace, Source};
pub use store::selectors::{SelectorDefault, SELECTOR_DEFAULTS, DEFAULT_ENVIRONMENT, DEFAULT_LOCALE, ENVIRONMENT_KEY, LOCALE_KEY};
pub use store::{ConfigStore, ConfigStoreBuilder, Connection};
