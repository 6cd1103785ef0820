//! Static resources and `${key}` placeholder substitution

use std::borrow::Cow;
use std::path::PathBuf;

use crate::resources::EMBEDDED;

use super::EngineError;

/// A value substituted for a placeholder
///
/// Deferred values are computed from the template's build state when the
/// resource is resolved, so they can depend on decisions made after the
/// component holding them was created.
pub enum SubstitutionValue<S> {
    Literal(String),
    Deferred(fn(&S) -> String),
}

impl<S> SubstitutionValue<S> {
    /// Compute the text for this value
    pub fn evaluate(&self, state: &S) -> Cow<'_, str> {
        match self {
            Self::Literal(text) => Cow::Borrowed(text.as_str()),
            Self::Deferred(compute) => Cow::Owned(compute(state)),
        }
    }
}

impl<S> std::fmt::Debug for SubstitutionValue<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Deferred(_) => f.write_str("Deferred"),
        }
    }
}

/// Ordered placeholder -> value map
#[derive(Debug)]
pub struct Substitutions<S> {
    entries: Vec<(String, SubstitutionValue<S>)>,
}

impl<S> Default for Substitutions<S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<S> Substitutions<S> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a literal value
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries
            .push((key.into(), SubstitutionValue::Literal(value.to_string())));
        self
    }

    /// Add a value computed from the build state at resolution time
    pub fn with_deferred(mut self, key: impl Into<String>, compute: fn(&S) -> String) -> Self {
        self.entries
            .push((key.into(), SubstitutionValue::Deferred(compute)));
        self
    }

    /// Get the value for a key
    pub fn get(&self, key: &str) -> Option<&SubstitutionValue<S>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Replace every known `${key}` placeholder in a line
    ///
    /// Placeholders without an entry are left as they are, and substituted text
    /// is never scanned again.
    pub fn apply(&self, line: &str, state: &S) -> String {
        let mut out = String::with_capacity(line.len());
        let mut rest = line;

        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let key = &after[..end];
                    match self.get(key) {
                        Some(value) => out.push_str(&value.evaluate(state)),
                        None => out.push_str(&rest[start..start + 2 + end + 1]),
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);

        out
    }
}

/// Source of static resource bodies
///
/// Lookups check the override directory first (when one is set), then the
/// resources embedded into the binary.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    override_dir: Option<PathBuf>,
}

impl Resources {
    /// Use only the embedded resources
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Look in a directory before falling back to the embedded resources
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    /// Load the raw body of a resource
    pub fn load(&self, path: &str) -> Result<Cow<'static, str>, EngineError> {
        if let Some(dir) = &self.override_dir {
            let candidate = dir.join(path);
            if candidate.is_file() {
                return std::fs::read_to_string(&candidate)
                    .map(Cow::Owned)
                    .map_err(|e| EngineError::io(candidate, e));
            }
        }

        EMBEDDED
            .iter()
            .find(|(key, _)| *key == path)
            .map(|(_, body)| Cow::Borrowed(*body))
            .ok_or_else(|| EngineError::ResourceNotFound {
                path: path.to_string(),
            })
    }

    /// Load a resource and apply substitutions line by line
    pub fn resolve<S>(
        &self,
        path: &str,
        substitutions: &Substitutions<S>,
        state: &S,
    ) -> Result<Vec<String>, EngineError> {
        let body = self.load(path)?;
        Ok(body
            .lines()
            .map(|line| substitutions.apply(line, state))
            .collect())
    }
}
