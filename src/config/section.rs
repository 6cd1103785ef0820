//! Typed views over a single configuration section

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::list::split_list;
use super::{ConfigError, ConfigStore};

/// Language version used when a package does not declare any
pub const DEFAULT_LANGUAGE_VERSION: &str = "2.7.9";

/// Language version token meaning "any supported version"
pub const UNIVERSAL_LANGUAGE_VERSION: &str = "universal";

/// Read-only accessor for the properties of one section
///
/// Every lookup follows the same rules: a present value wins, then the
/// supplied default, then a [`ConfigError::MissingOption`] when the property is
/// required. A property that is absent, optional and without default resolves
/// to `None` (or an empty list).
#[derive(Debug, Clone)]
pub struct ConfigSection<'a> {
    store: &'a ConfigStore,
    name: String,
}

impl<'a> ConfigSection<'a> {
    /// Create a view over the named section
    pub fn new(store: &'a ConfigStore, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    /// The section name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a string property
    pub fn get(
        &self,
        property: &str,
        default: Option<&str>,
        required: bool,
    ) -> Result<Option<String>, ConfigError> {
        if let Some(value) = self.store.get(&self.name, property) {
            return Ok(Some(value.to_string()));
        }
        self.fallback(property, default.map(str::to_string), required)
    }

    /// Get a string property that must be present
    pub fn required(&self, property: &str) -> Result<String, ConfigError> {
        self.get(property, None, true)?
            .ok_or_else(|| ConfigError::missing(property, &self.name))
    }

    /// Get a string property, falling back to a default
    pub fn get_or(&self, property: &str, default: &str) -> String {
        self.store
            .get(&self.name, property)
            .unwrap_or(default)
            .to_string()
    }

    /// Get a boolean property
    pub fn get_boolean(
        &self,
        property: &str,
        default: Option<bool>,
        required: bool,
    ) -> Result<Option<bool>, ConfigError> {
        if let Some(value) = self.store.get_bool(&self.name, property)? {
            return Ok(Some(value));
        }
        self.fallback(property, default, required)
    }

    /// Get a boolean property, falling back to a default
    pub fn boolean_or(&self, property: &str, default: bool) -> Result<bool, ConfigError> {
        Ok(self
            .get_boolean(property, Some(default), false)?
            .unwrap_or(default))
    }

    /// Get a list property
    ///
    /// An absent value and a value without any items are treated alike: the
    /// default applies, then the required check.
    pub fn get_list(
        &self,
        property: &str,
        default: Option<Vec<String>>,
        required: bool,
    ) -> Result<Vec<String>, ConfigError> {
        let items = match self.store.get(&self.name, property) {
            Some(raw) => split_list(raw).map_err(|err| ConfigError::MalformedList {
                option: property.to_string(),
                section: self.name.clone(),
                value: raw.to_string(),
                span: err.span,
            })?,
            None => Vec::new(),
        };

        if !items.is_empty() {
            return Ok(items);
        }
        Ok(self
            .fallback(property, default, required)?
            .unwrap_or_default())
    }

    /// Get an optional list property (empty when absent)
    pub fn list_or_empty(&self, property: &str) -> Result<Vec<String>, ConfigError> {
        self.get_list(property, Some(Vec::new()), false)
    }

    fn fallback<T>(
        &self,
        property: &str,
        default: Option<T>,
        required: bool,
    ) -> Result<Option<T>, ConfigError> {
        match default {
            Some(value) => Ok(Some(value)),
            None if required => Err(ConfigError::missing(property, &self.name)),
            None => Ok(None),
        }
    }
}

/// Properties shared by every section describing a package to generate
///
/// Each template contributes its own implicit requirements, which are appended
/// after the ones declared in `installRequires`.
#[derive(Debug, Clone)]
pub struct PackageSection<'a> {
    section: ConfigSection<'a>,
    implicit_requires: &'static [&'static str],
}

impl<'a> PackageSection<'a> {
    /// Create a package view over the named section
    pub fn new(
        store: &'a ConfigStore,
        name: impl Into<String>,
        implicit_requires: &'static [&'static str],
    ) -> Self {
        Self {
            section: ConfigSection::new(store, name),
            implicit_requires,
        }
    }

    /// The underlying section, for template-specific properties
    pub fn section(&self) -> &ConfigSection<'a> {
        &self.section
    }

    /// Package name (`name`)
    ///
    /// The name becomes a directory and file name prefix in the output, so it
    /// must be one plain path component.
    pub fn name(&self) -> Result<String, ConfigError> {
        let name = self.section.required("name")?;
        if !is_plain_component(&name) {
            return Err(ConfigError::InvalidPackageName {
                value: name,
                section: self.section.name().to_string(),
            });
        }
        Ok(name)
    }

    /// Human readable name (`fullName`)
    pub fn full_name(&self) -> Result<String, ConfigError> {
        self.section.required("fullName")
    }

    /// Copyright notice (`copyright`), empty when absent
    pub fn copyright(&self) -> String {
        self.section.get_or("copyright", "")
    }

    /// Declared requirements followed by the implicit ones
    pub fn install_requires(&self) -> Result<Vec<String>, ConfigError> {
        let mut requires = self.section.list_or_empty("installRequires")?;
        requires.extend(self.implicit_requires.iter().map(|r| r.to_string()));
        Ok(requires)
    }

    /// Supported language versions (`languageVersions`)
    ///
    /// Entries are lower-cased. If `universal` is present it is the only entry
    /// returned; otherwise every entry must look like `X`, `X.Y` or `X.Y.Z` and
    /// the result is sorted oldest first.
    pub fn language_versions(&self) -> Result<Vec<String>, ConfigError> {
        let versions: Vec<String> = self
            .section
            .get_list(
                "languageVersions",
                Some(vec![DEFAULT_LANGUAGE_VERSION.to_string()]),
                false,
            )?
            .into_iter()
            .map(|v| v.to_lowercase())
            .collect();

        if versions.iter().any(|v| v == UNIVERSAL_LANGUAGE_VERSION) {
            return Ok(vec![UNIVERSAL_LANGUAGE_VERSION.to_string()]);
        }

        for version in &versions {
            if !version_pattern().is_match(version) {
                return Err(ConfigError::InvalidLanguageVersion {
                    value: version.clone(),
                });
            }
        }

        let mut versions = versions;
        versions.sort_by_cached_key(|v| version_key(v));
        Ok(versions)
    }
}

fn is_plain_component(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed != "."
        && !trimmed.contains("..")
        && !trimmed.contains(['/', '\\'])
        && !Path::new(trimmed).is_absolute()
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+(\.\d*){0,2}$").expect("version pattern is valid"))
}

/// Sort key for a version: missing components sort before any number
fn version_key(version: &str) -> [Option<u64>; 3] {
    let mut key = [None; 3];
    for (slot, component) in key.iter_mut().zip(version.split('.')) {
        *slot = component.parse().ok().or(if component.is_empty() {
            None
        } else {
            Some(u64::MAX)
        });
    }
    key
}
