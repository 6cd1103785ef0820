//! The loaded configuration store
//!
//! Configuration is read from a single TOML file in which every top-level
//! table is a section:
//!
//! ```toml
//! [Client]
//! name = "geolocationclient"
//! fullName = "Geolocation Client"
//! clientClassName = "GeolocationClient"
//! includeExampleMethod = "yes"
//! ```
//!
//! Scalar values are kept as strings. Arrays of scalars are kept in the
//! quoted, comma separated list form so that list properties read the same way
//! whichever syntax the file uses.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Section name -> property name -> raw value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigStore {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

/// TOML structure for deserializing a single property value
#[derive(Deserialize)]
#[serde(untagged)]
enum TomlValue {
    Scalar(TomlScalar),
    Array(Vec<TomlScalar>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlScalar {
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
}

impl TomlScalar {
    fn into_string(self) -> String {
        match self {
            TomlScalar::String(s) => s,
            TomlScalar::Boolean(b) => b.to_string(),
            TomlScalar::Integer(i) => i.to_string(),
            TomlScalar::Float(f) => f.to_string(),
        }
    }
}

impl TomlValue {
    fn into_string(self) -> String {
        match self {
            TomlValue::Scalar(scalar) => scalar.into_string(),
            TomlValue::Array(items) => items
                .into_iter()
                .map(|item| format!("'{}'", item.into_string().replace('\'', "''")))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl ConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load the store from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: BTreeMap<String, BTreeMap<String, TomlValue>> = toml::from_str(content)?;

        let sections = parsed
            .into_iter()
            .map(|(section, properties)| {
                let properties = properties
                    .into_iter()
                    .map(|(key, value)| (key, value.into_string()))
                    .collect();
                (section, properties)
            })
            .collect();

        Ok(Self { sections })
    }

    /// Set a property, creating its section if needed
    pub fn set(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Builder form of [`ConfigStore::set`]
    pub fn with(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set(section, key, value);
        self
    }

    /// Check if a property is present
    pub fn has(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Get the raw value of a property
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|properties| properties.get(key))
            .map(|s| s.as_str())
    }

    /// Get a property as a boolean
    ///
    /// Accepted tokens (case-insensitive): `true`/`false`, `yes`/`no`,
    /// `on`/`off`, `1`/`0`.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        let Some(value) = self.get(section, key) else {
            return Ok(None);
        };
        parse_boolean(value)
            .map(Some)
            .ok_or_else(|| ConfigError::InvalidBoolean {
                option: key.to_string(),
                section: section.to_string(),
                value: value.to_string(),
            })
    }
}

fn parse_boolean(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
