//! Mutable state threaded through one generation run

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{EngineError, Resources};

/// Text prepended to a line for each indent level
pub const INDENT_UNIT: &str = "    ";

/// What the write pass produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories ensured on disk
    pub directories: usize,
    /// Files created or truncated
    pub files: usize,
    /// Code fragments appended to files
    pub fragments: usize,
}

struct OpenFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

/// Per-run state shared by every component of a tree
///
/// Directory components push and pop the current directory, code fragments
/// raise and lower the indent level, and file components own the single open
/// output file. All of it is restored once a subtree has executed.
pub struct TemplateContext<'a, S> {
    resources: &'a Resources,
    state: &'a S,
    current_directory: PathBuf,
    saved_directories: Vec<PathBuf>,
    file: Option<OpenFile>,
    indent_level: usize,
    summary: RunSummary,
}

impl<'a, S> TemplateContext<'a, S> {
    /// Create a context rooted at the destination directory
    pub fn new(resources: &'a Resources, state: &'a S, destination: impl Into<PathBuf>) -> Self {
        Self {
            resources,
            state,
            current_directory: destination.into(),
            saved_directories: Vec::new(),
            file: None,
            indent_level: 0,
            summary: RunSummary::default(),
        }
    }

    pub fn resources(&self) -> &'a Resources {
        self.resources
    }

    /// Build state read by deferred substitution values
    pub fn state(&self) -> &'a S {
        self.state
    }

    pub fn current_directory(&self) -> &Path {
        &self.current_directory
    }

    /// Descend into a child directory (an empty name keeps the current one)
    pub fn enter_directory(&mut self, name: &str) {
        let next = if name.is_empty() {
            self.current_directory.clone()
        } else {
            self.current_directory.join(name)
        };
        let previous = std::mem::replace(&mut self.current_directory, next);
        self.saved_directories.push(previous);
    }

    /// Return to the directory active before the matching `enter_directory`
    pub fn leave_directory(&mut self) {
        if let Some(previous) = self.saved_directories.pop() {
            self.current_directory = previous;
        }
    }

    /// Create the current directory and its parents if needed
    pub fn create_current_directory(&mut self) -> Result<(), EngineError> {
        std::fs::create_dir_all(&self.current_directory)
            .map_err(|e| EngineError::io(&self.current_directory, e))?;
        debug!(path = %self.current_directory.display(), "directory ready");
        self.summary.directories += 1;
        Ok(())
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn add_indent(&mut self, levels: usize) {
        self.indent_level += levels;
    }

    pub fn remove_indent(&mut self, levels: usize) {
        self.indent_level = self.indent_level.saturating_sub(levels);
    }

    /// Whether a file component is currently writing
    pub fn has_open_file(&self) -> bool {
        self.file.is_some()
    }

    /// Create (or truncate) a file in the current directory and make it the
    /// target of subsequent writes
    pub fn open_file(&mut self, file_name: &str) -> Result<(), EngineError> {
        self.close_file()?;

        let path = self.current_directory.join(file_name);
        let file = File::create(&path).map_err(|e| EngineError::io(&path, e))?;
        debug!(path = %path.display(), "writing file");

        self.file = Some(OpenFile {
            path,
            writer: BufWriter::new(file),
        });
        self.summary.files += 1;
        Ok(())
    }

    /// Flush and close the open file, if any
    pub fn close_file(&mut self) -> Result<(), EngineError> {
        match self.file.take() {
            Some(mut open) => open
                .writer
                .flush()
                .map_err(|e| EngineError::io(&open.path, e)),
            None => Ok(()),
        }
    }

    /// Append lines to the open file, each padded to the current indent level
    ///
    /// `resource` names the fragment being written and is only used to report
    /// a write attempted with no open file.
    pub fn write_lines(&mut self, resource: &str, lines: &[String]) -> Result<(), EngineError> {
        let indent = INDENT_UNIT.repeat(self.indent_level);
        let open = self.file.as_mut().ok_or_else(|| EngineError::NoOpenFile {
            resource: resource.to_string(),
        })?;

        for line in lines {
            writeln!(open.writer, "{}{}", indent, line)
                .map_err(|e| EngineError::io(&open.path, e))?;
        }
        Ok(())
    }

    pub(super) fn record_fragment(&mut self) {
        self.summary.fragments += 1;
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}
