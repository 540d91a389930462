use std::fs;
use std::io;
use std::path::Path;

use colored::Colorize;

use super::scan;
use super::types::{ConfigStore, Slot, ValueType};

impl ConfigStore {
    /// Builds a store from the default configuration file, which declares
    /// every recognized key together with its type and default value.
    ///
    /// An unreadable file is reported as a warning on stderr and yields an
    /// empty store; construction itself never fails.
    pub fn load(default_path: impl AsRef<Path>) -> Self {
        let mut store = ConfigStore {
            default_path: default_path.as_ref().to_path_buf(),
            ..ConfigStore::default()
        };
        store.parse_defaults();
        store
    }

    /// Builds a store from the default file, then immediately applies an
    /// overlay file on top of it.
    pub fn load_with_overlay(
        default_path: impl AsRef<Path>,
        overlay_path: impl AsRef<Path>,
    ) -> Self {
        let mut store = Self::load(default_path);
        store.overlay(overlay_path);
        store
    }

    /// Applies an overlay file on top of the current values.
    ///
    /// Overlay lines can only move values of keys the default file declared,
    /// never insert new ones. Repeated calls stack on top of each other
    /// rather than resetting to the defaults first; each call replaces the
    /// recorded overlay path, even when the file turns out to be unreadable.
    pub fn overlay(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.overlay_path = Some(path.to_path_buf());
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn_unreadable("overlay", path, &err);
                return;
            }
        };
        for raw in contents.lines() {
            self.apply_overlay_line(raw);
        }
    }

    fn parse_defaults(&mut self) {
        let contents = match fs::read_to_string(&self.default_path) {
            Ok(contents) => contents,
            Err(err) => {
                warn_unreadable("default", &self.default_path, &err);
                return;
            }
        };
        for raw in contents.lines() {
            self.register_default_line(raw);
        }
    }

    /// Handles one line of the default file: `<type> <key> := <value>`.
    /// Lines that do not fit the shape are skipped without diagnostics.
    fn register_default_line(&mut self, raw: &str) {
        let line = scan::trim(raw);
        if scan::leading_type_token(line).is_none() {
            return;
        }
        let Some((type_and_key, value)) = scan::split_assignment(line) else {
            return;
        };
        let (type_and_key, value) = (scan::trim(type_and_key), scan::trim(value));
        if type_and_key.is_empty() || value.is_empty() {
            return;
        }
        // Only the first space separates the keyword from the key; the key
        // itself may contain further spaces and arbitrary symbols.
        let Some((keyword, key)) = type_and_key.split_once(' ') else {
            return;
        };
        let Some(kind) = ValueType::from_keyword(keyword) else {
            return;
        };
        let key = scan::trim(key);
        // First declaration wins, across all four types.
        if key.is_empty() || self.slots.contains_key(key) {
            return;
        }
        let Some(value) = scan::convert(kind, value) else {
            return;
        };
        self.slots.insert(key.to_string(), Slot::new(value));
    }

    /// Handles one line of an overlay file: `[<type> ]<key> = <value>`.
    fn apply_overlay_line(&mut self, raw: &str) {
        let line = scan::trim(raw);
        let Some((key, value)) = scan::split_assignment(line) else {
            return;
        };
        let (key, value) = (scan::trim(key), scan::trim(value));
        if key.is_empty() || value.is_empty() {
            return;
        }
        if let Some(kind) = scan::leading_type_token(line) {
            // Type-enforcing line: the declared type constrains which slot
            // the key may target.
            let real_key = key
                .split_once([' ', '\t'])
                .map_or("", |(_, rest)| scan::trim(rest));
            self.set_typed(kind, real_key, value);
            return;
        }
        self.set_untyped(key, value);
    }

    /// Moves `key`'s current value when the key exists with type `kind` and
    /// the raw text converts; otherwise a no-op. Never creates keys.
    fn set_typed(&mut self, kind: ValueType, key: &str, value: &str) {
        let Some(slot) = self.slots.get_mut(key) else {
            return;
        };
        if slot.default.value_type() != kind {
            return;
        }
        if let Some(converted) = scan::convert(kind, value) {
            slot.current = converted;
        }
    }

    /// Same as [`ConfigStore::set_typed`] with the type taken from the key's
    /// own declaration.
    fn set_untyped(&mut self, key: &str, value: &str) {
        let Some(slot) = self.slots.get_mut(key) else {
            return;
        };
        if let Some(converted) = scan::convert(slot.default.value_type(), value) {
            slot.current = converted;
        }
    }
}

fn warn_unreadable(label: &str, path: &Path, err: &io::Error) {
    eprintln!(
        "{} could not read the {label} configuration file {}: {err}",
        "warning:".yellow().bold(),
        path.display()
    );
}
