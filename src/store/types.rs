use anyhow::anyhow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// The four types a configuration key can be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Float,
    String,
    Boolean,
}

impl ValueType {
    pub const ALL: [ValueType; 4] = [
        ValueType::Integer,
        ValueType::Float,
        ValueType::String,
        ValueType::Boolean,
    ];

    /// Maps a declaration keyword (`int`, `float`, `string`, `bool`) to its
    /// type. Anything else is not a recognized declaration.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(ValueType::Integer),
            "float" => Some(ValueType::Float),
            "string" => Some(ValueType::String),
            "bool" => Some(ValueType::Boolean),
            _ => None,
        }
    }

    /// Section heading used by the diagnostic dump.
    pub fn label(self) -> &'static str {
        match self {
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::Boolean => "Boolean",
        }
    }
}

impl std::str::FromStr for ValueType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::from_keyword(s)
            .ok_or_else(|| anyhow!("Unknown value type '{s}' (expected int, float, string or bool)"))
    }
}

/// A single typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl ConfigValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            ConfigValue::Integer(_) => ValueType::Integer,
            ConfigValue::Float(_) => ValueType::Float,
            ConfigValue::String(_) => ValueType::String,
            ConfigValue::Boolean(_) => ValueType::Boolean,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Integer(value) => write!(f, "{value}"),
            ConfigValue::Float(value) => write!(f, "{value}"),
            ConfigValue::String(value) => write!(f, "{value}"),
            ConfigValue::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// Default and current value for one declared key.
///
/// Both values always carry the same type. The current value starts out equal
/// to the default; only an overlay pass targeting the same key and type moves
/// it, and the default never changes after declaration.
#[derive(Debug, Clone)]
pub struct Slot {
    pub default: ConfigValue,
    pub current: ConfigValue,
}

impl Slot {
    pub(super) fn new(value: ConfigValue) -> Self {
        Self {
            default: value.clone(),
            current: value,
        }
    }
}

/// Typed key/value store filled from a default file and any overlay files.
///
/// Every key owns exactly one slot, so a key has exactly one type for the
/// lifetime of the store: whichever declaration in the default file claimed
/// it first.
#[derive(Debug, Default)]
pub struct ConfigStore {
    pub(super) slots: BTreeMap<String, Slot>,
    pub(super) default_path: PathBuf,
    pub(super) overlay_path: Option<PathBuf>,
}

impl ConfigStore {
    /// Path of the default configuration file.
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Path of the most recently applied overlay file, if any.
    pub fn overlay_path(&self) -> Option<&Path> {
        self.overlay_path.as_deref()
    }

    /// Current value of an integer key, or `0` when the key is absent or
    /// declared with a different type.
    pub fn get_int(&self, key: &str) -> i64 {
        match self.slots.get(key) {
            Some(Slot {
                current: ConfigValue::Integer(value),
                ..
            }) => *value,
            _ => 0,
        }
    }

    /// Current value of a float key, or `0.0` on any miss.
    pub fn get_float(&self, key: &str) -> f64 {
        match self.slots.get(key) {
            Some(Slot {
                current: ConfigValue::Float(value),
                ..
            }) => *value,
            _ => 0.0,
        }
    }

    /// Current value of a string key, or the empty string on any miss.
    pub fn get_string(&self, key: &str) -> String {
        match self.slots.get(key) {
            Some(Slot {
                current: ConfigValue::String(value),
                ..
            }) => value.clone(),
            _ => String::new(),
        }
    }

    /// Current value of a boolean key, or `false` on any miss.
    pub fn get_bool(&self, key: &str) -> bool {
        match self.slots.get(key) {
            Some(Slot {
                current: ConfigValue::Boolean(value),
                ..
            }) => *value,
            _ => false,
        }
    }

    /// Writes the full dump to stdout. Debugging aid only; state is untouched.
    pub fn print_configuration(&self) {
        print!("{self}");
    }
}

impl fmt::Display for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigStore: defaults='{}'", self.default_path.display())?;
        match &self.overlay_path {
            Some(path) => writeln!(f, ", overlay='{}'", path.display())?,
            None => writeln!(f)?,
        }
        for kind in ValueType::ALL {
            let mut entries = self
                .slots
                .iter()
                .filter(|(_, slot)| slot.current.value_type() == kind)
                .peekable();
            if entries.peek().is_none() {
                continue;
            }
            writeln!(f, "  {} values:", kind.label())?;
            for (key, slot) in entries {
                writeln!(f, "    {key}: {} (default: {})", slot.current, slot.default)?;
            }
        }
        Ok(())
    }
}
