//! Typed configuration reading from flat `key = value` files.
//!
//! A default file declares every recognized key together with its type and
//! default value (`int max_number_of_users := 1`). An optional overlay file
//! may then replace the values of declared keys with bare `key = value`
//! lines; it can never introduce new keys or change a key's type. Lookups go
//! through the total typed accessors on [`ConfigStore`], which fall back to
//! the type's zero value for anything the schema does not know.

pub mod store;

pub use store::{ConfigStore, ConfigValue, Slot, ValueType};
