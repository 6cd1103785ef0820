//! Template execution engine
//!
//! This module provides:
//! - Component trees of directories, files and code fragments
//! - The per-run context those trees execute against
//! - Static resource loading with `${key}` substitution

pub mod component;
pub mod context;
pub mod error;
pub mod resource;

pub use component::{CodeFragment, ComponentKind, TemplateComponent};
pub use context::{RunSummary, TemplateContext, INDENT_UNIT};
pub use error::EngineError;
pub use resource::{Resources, SubstitutionValue, Substitutions};
