//! Fabric Bootstrap - project scaffolding for message fabric integrations
//!
//! This library generates the source tree of a fabric application or client
//! library from a small TOML configuration.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let summary = fabric_bootstrap::generate(
//!     "client-template",
//!     Path::new("client.toml"),
//!     Path::new("out"),
//! ).unwrap();
//! println!("{} files written", summary.files);
//! ```

pub mod config;
pub mod engine;
mod resources;
pub mod template;

pub use config::{ConfigError, ConfigSection, ConfigStore, PackageSection};
pub use engine::{EngineError, Resources, RunSummary};
pub use template::{Template, TemplateError, TemplateRegistry};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur during generation
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Requested template is not registered
    #[error("{0}")]
    Template(#[from] TemplateError),

    /// Configuration could not be loaded or resolved
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be written
    #[error("generation error: {0}")]
    Engine(#[from] EngineError),
}

impl GenerateError {
    /// Format the error for display, with source context where available
    pub fn format(&self) -> String {
        match self {
            GenerateError::Config(err @ ConfigError::MalformedList { .. }) => err.format(),
            other => other.to_string(),
        }
    }
}

/// Options for a generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory searched for static resources before the embedded set
    pub resource_dir: Option<PathBuf>,
    /// Templates available by name
    pub registry: TemplateRegistry,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            resource_dir: None,
            registry: TemplateRegistry::with_builtin(),
        }
    }
}

impl GenerateOptions {
    /// Create options with the built-in templates and embedded resources
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resource override directory
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    /// Set the template registry
    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    fn resources(&self) -> Resources {
        match &self.resource_dir {
            Some(dir) => Resources::with_override_dir(dir),
            None => Resources::embedded(),
        }
    }
}

/// Generate a project with default options
///
/// The template is looked up first, then the configuration file is loaded,
/// then the template runs its validate and write passes.
pub fn generate(
    template_name: &str,
    config_path: &Path,
    destination: &Path,
) -> Result<RunSummary, GenerateError> {
    generate_with_options(template_name, config_path, destination, &GenerateOptions::default())
}

/// Generate a project with custom options
pub fn generate_with_options(
    template_name: &str,
    config_path: &Path,
    destination: &Path,
    options: &GenerateOptions,
) -> Result<RunSummary, GenerateError> {
    let template = options.registry.create(template_name)?;

    debug!(path = %config_path.display(), "loading configuration");
    let store = ConfigStore::from_file(config_path)?;

    template.run(&store, destination, &options.resources())
}

/// Generate a project from an already loaded configuration store
pub fn generate_from_store(
    template_name: &str,
    store: &ConfigStore,
    destination: &Path,
    options: &GenerateOptions,
) -> Result<RunSummary, GenerateError> {
    let template = options.registry.create(template_name)?;
    template.run(store, destination, &options.resources())
}
