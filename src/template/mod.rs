//! Project templates
//!
//! A template turns the configuration store into a component tree and runs
//! it against a destination directory. Runs happen in two passes:
//!
//! 1. **Validate**: the tree is built, which resolves every configuration
//!    property it needs, and then executed without touching the filesystem.
//! 2. **Write**: the same tree is executed again, creating directories and
//!    writing files.
//!
//! A configuration problem therefore always fails a run before anything has
//! been written.

mod app;
mod client;
mod package;
mod registry;
pub mod text;

pub use app::{AppBuildState, AppConfig, AppTemplate, APPLICATION_SECTION};
pub use client::{ClientSection, ClientTemplate, CLIENT_SECTION};
pub use package::PackageInfo;
pub use registry::{TemplateError, TemplateFactory, TemplateRegistry};

use std::path::Path;

use tracing::{debug, info};

use crate::config::{ConfigError, ConfigStore};
use crate::engine::{Resources, RunSummary, TemplateComponent, TemplateContext};
use crate::GenerateError;

/// A kind of project that can be generated
pub trait Template {
    /// Name used to select the template
    fn name(&self) -> &'static str;

    /// One-line summary for listings
    fn description(&self) -> &'static str;

    /// Generate the project described by `store` under `destination`
    fn run(
        &self,
        store: &ConfigStore,
        destination: &Path,
        resources: &Resources,
    ) -> Result<RunSummary, GenerateError>;
}

/// A built component tree with the state its deferred values read
#[derive(Debug)]
pub struct Blueprint<S> {
    pub root: TemplateComponent<S>,
    pub state: S,
}

/// Build a blueprint, then execute it in validate and write passes
pub(crate) fn run_passes<S>(
    template: &str,
    destination: &Path,
    resources: &Resources,
    build: impl FnOnce() -> Result<Blueprint<S>, ConfigError>,
) -> Result<RunSummary, GenerateError> {
    debug!(template, destination = %destination.display(), "validate pass");
    let Blueprint { root, state } = build()?;
    let mut ctx = TemplateContext::new(resources, &state, destination);
    root.execute(&mut ctx, true)?;

    debug!(template, "write pass");
    root.execute(&mut ctx, false)?;

    let summary = ctx.summary();
    info!(
        template,
        directories = summary.directories,
        files = summary.files,
        fragments = summary.fragments,
        "generation complete"
    );
    Ok(summary)
}
