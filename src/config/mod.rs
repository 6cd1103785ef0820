//! Configuration access for template generation
//!
//! A [`ConfigStore`] holds the loaded key/value configuration, grouped into named
//! sections. Templates never read the store directly; they go through
//! [`ConfigSection`] views which add typed lookups with default and
//! required-option semantics.

pub mod list;
pub mod section;
pub mod store;

pub use section::{ConfigSection, PackageSection, UNIVERSAL_LANGUAGE_VERSION};
pub use store::ConfigStore;

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in a configuration value
pub type Span = std::ops::Range<usize>;

/// Errors raised while loading configuration or resolving its properties
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required option is absent from its section
    #[error("no option '{option}' in section '{section}'")]
    MissingOption { option: String, section: String },

    /// A boolean option holds something other than a boolean token
    #[error("invalid boolean '{value}' for option '{option}' in section '{section}'")]
    InvalidBoolean {
        option: String,
        section: String,
        value: String,
    },

    /// A list option cannot be tokenized
    #[error("malformed list for option '{option}' in section '{section}': quote is never closed")]
    MalformedList {
        option: String,
        section: String,
        value: String,
        span: Span,
    },

    /// A package name that is not a single path component
    #[error(
        "invalid package name '{value}' in section '{section}': \
         expected a single directory name"
    )]
    InvalidPackageName { value: String, section: String },

    /// An entry of `languageVersions` is not a version number
    #[error(
        "unexpected value in languageVersions: {value}. Expected X(.Y.Z) format \
         (for example, '2', '2.7', or '2.7.9') or 'universal'"
    )]
    InvalidLanguageVersion { value: String },

    /// The configuration file could not be read
    #[error("error attempting to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has an unsupported shape
    #[error("error parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Create a missing option error
    pub fn missing(option: impl Into<String>, section: impl Into<String>) -> Self {
        Self::MissingOption {
            option: option.into(),
            section: section.into(),
        }
    }

    /// The option and section this error refers to, if any
    pub fn location(&self) -> Option<(&str, &str)> {
        match self {
            Self::MissingOption { option, section }
            | Self::InvalidBoolean {
                option, section, ..
            }
            | Self::MalformedList {
                option, section, ..
            } => Some((option.as_str(), section.as_str())),
            Self::InvalidPackageName { section, .. } => Some(("name", section.as_str())),
            _ => None,
        }
    }

    /// Format the error for display, with the offending value shown for list errors
    pub fn format(&self) -> String {
        let Self::MalformedList {
            option,
            section,
            value,
            span,
        } = self
        else {
            return self.to_string();
        };

        let id = format!("{}.{}", section, option);
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, id.as_str(), span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((id.as_str(), span.clone()))
                    .with_message("this quote is never closed")
                    .with_color(Color::Red),
            )
            .finish()
            .write((id.as_str(), Source::from(value.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
