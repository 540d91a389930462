//! The typed key/value store behind the configuration reader.
//!
//! This module provides:
//! - A schema (key, type, default value) parsed from a default file
//! - Overlay files that override values of already-declared keys
//! - Total typed accessors that fall back to zero values on any miss
//! - A diagnostic dump of every slot, grouped by type

mod constants;
mod loader;
mod scan;
mod types;

// Re-export the main types for convenience
pub use types::{ConfigStore, ConfigValue, Slot, ValueType};
