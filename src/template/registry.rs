//! Template registry for looking up templates by name

use std::collections::HashMap;

use thiserror::Error;

use super::{AppTemplate, ClientTemplate, Template};

/// Errors that can occur during template lookup
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in registry
    #[error("template not found: {name} (available: {})", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    /// Duplicate template registration
    #[error("duplicate template definition: {name}")]
    Duplicate { name: String },
}

/// Creates a fresh template instance
pub type TemplateFactory = fn() -> Box<dyn Template>;

/// Registry of available templates
#[derive(Debug, Default, Clone)]
pub struct TemplateRegistry {
    factories: HashMap<String, TemplateFactory>,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the application and client templates
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.factories.insert(
            AppTemplate::NAME.to_string(),
            || Box::new(AppTemplate::new()),
        );
        registry.factories.insert(
            ClientTemplate::NAME.to_string(),
            || Box::new(ClientTemplate::new()),
        );
        registry
    }

    /// Register a template factory under the name its templates report
    pub fn register(&mut self, factory: TemplateFactory) -> Result<(), TemplateError> {
        let name = factory().name().to_string();
        if self.factories.contains_key(&name) {
            return Err(TemplateError::Duplicate { name });
        }
        self.factories.insert(name, factory);
        Ok(())
    }

    /// Create the template registered under a name
    pub fn create(&self, name: &str) -> Result<Box<dyn Template>, TemplateError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_string(),
                available: self.names().into_iter().map(String::from).collect(),
            })
    }

    /// Check if a template is registered
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
