//! The component tree describing a generated project
//!
//! A tree mirrors the output layout: directory nodes contain file nodes, and
//! file nodes contain the code fragments appended after their own content.
//! Every node executes as
//!
//! ```text
//! pre-hook, own step, children in insertion order, post-hook
//! ```
//!
//! and the tree runs twice. The validate pass keeps the directory and indent
//! bookkeeping but touches neither the filesystem nor any resource body; the
//! write pass does the real work.

use tracing::trace;

use super::{EngineError, Substitutions, TemplateContext};

/// A static resource written with substitutions at some indent
#[derive(Debug)]
pub struct CodeFragment<S> {
    resource: String,
    substitutions: Substitutions<S>,
    indent: usize,
}

impl<S> CodeFragment<S> {
    pub fn resource(&self) -> &str {
        &self.resource
    }

    fn write(&self, ctx: &mut TemplateContext<'_, S>) -> Result<(), EngineError> {
        if !ctx.has_open_file() {
            return Err(EngineError::NoOpenFile {
                resource: self.resource.clone(),
            });
        }
        let lines = ctx
            .resources()
            .resolve(&self.resource, &self.substitutions, ctx.state())?;
        ctx.write_lines(&self.resource, &lines)
    }
}

/// The four kinds of node
#[derive(Debug)]
pub enum ComponentKind<S> {
    /// Groups children without producing output
    Generic,
    /// A directory below the current one (empty name: the current one)
    Directory { name: String },
    /// Lines appended to the enclosing file
    Code(CodeFragment<S>),
    /// A file whose own content is written before its children's
    File {
        file_name: String,
        fragment: CodeFragment<S>,
    },
}

/// A node of the component tree
#[derive(Debug)]
pub struct TemplateComponent<S> {
    kind: ComponentKind<S>,
    children: Vec<TemplateComponent<S>>,
}

impl<S> TemplateComponent<S> {
    fn new(kind: ComponentKind<S>) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn generic() -> Self {
        Self::new(ComponentKind::Generic)
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(ComponentKind::Directory { name: name.into() })
    }

    pub fn code(resource: impl Into<String>, substitutions: Substitutions<S>) -> Self {
        Self::new(ComponentKind::Code(CodeFragment {
            resource: resource.into(),
            substitutions,
            indent: 0,
        }))
    }

    pub fn file(
        file_name: impl Into<String>,
        resource: impl Into<String>,
        substitutions: Substitutions<S>,
    ) -> Self {
        Self::new(ComponentKind::File {
            file_name: file_name.into(),
            fragment: CodeFragment {
                resource: resource.into(),
                substitutions,
                indent: 0,
            },
        })
    }

    /// Set the relative indent of a code fragment
    ///
    /// File nodes never change the indent level, so this only affects
    /// [`ComponentKind::Code`] nodes.
    pub fn with_indent(mut self, levels: usize) -> Self {
        if let ComponentKind::Code(fragment) = &mut self.kind {
            fragment.indent = levels;
        }
        self
    }

    /// Append a child and return it for further building
    pub fn add_child(&mut self, child: TemplateComponent<S>) -> &mut TemplateComponent<S> {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Builder form of [`TemplateComponent::add_child`]
    pub fn with_child(mut self, child: TemplateComponent<S>) -> Self {
        self.children.push(child);
        self
    }

    /// Builder form taking several children in order
    pub fn with_children(
        mut self,
        children: impl IntoIterator<Item = TemplateComponent<S>>,
    ) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> &ComponentKind<S> {
        &self.kind
    }

    pub fn children(&self) -> &[TemplateComponent<S>] {
        &self.children
    }

    /// Find a direct child directory or file by name
    pub fn child(&self, name: &str) -> Option<&TemplateComponent<S>> {
        self.children.iter().find(|child| child.name() == Some(name))
    }

    /// Directory or file name of this node
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            ComponentKind::Directory { name } => Some(name),
            ComponentKind::File { file_name, .. } => Some(file_name),
            ComponentKind::Generic | ComponentKind::Code(_) => None,
        }
    }

    /// Execute this node and its subtree
    ///
    /// The first error aborts the traversal; nothing after the failing node
    /// is started.
    pub fn execute(
        &self,
        ctx: &mut TemplateContext<'_, S>,
        validate_only: bool,
    ) -> Result<(), EngineError> {
        self.pre_execute(ctx, validate_only)?;
        self.on_execute(ctx, validate_only)?;
        for child in &self.children {
            child.execute(ctx, validate_only)?;
        }
        self.post_execute(ctx, validate_only)
    }

    fn pre_execute(
        &self,
        ctx: &mut TemplateContext<'_, S>,
        validate_only: bool,
    ) -> Result<(), EngineError> {
        match &self.kind {
            ComponentKind::Generic => {}
            ComponentKind::Directory { name } => ctx.enter_directory(name),
            ComponentKind::Code(fragment) => ctx.add_indent(fragment.indent),
            ComponentKind::File { file_name, .. } => {
                if !validate_only {
                    ctx.open_file(file_name)?;
                }
            }
        }
        Ok(())
    }

    fn on_execute(
        &self,
        ctx: &mut TemplateContext<'_, S>,
        validate_only: bool,
    ) -> Result<(), EngineError> {
        if validate_only {
            return Ok(());
        }
        match &self.kind {
            ComponentKind::Generic => Ok(()),
            ComponentKind::Directory { .. } => ctx.create_current_directory(),
            ComponentKind::Code(fragment) => {
                trace!(resource = %fragment.resource, indent = ctx.indent_level(), "fragment");
                fragment.write(ctx)?;
                ctx.record_fragment();
                Ok(())
            }
            ComponentKind::File { fragment, .. } => fragment.write(ctx),
        }
    }

    fn post_execute(
        &self,
        ctx: &mut TemplateContext<'_, S>,
        validate_only: bool,
    ) -> Result<(), EngineError> {
        match &self.kind {
            ComponentKind::Generic => {}
            ComponentKind::Directory { .. } => ctx.leave_directory(),
            ComponentKind::Code(fragment) => ctx.remove_indent(fragment.indent),
            ComponentKind::File { .. } => {
                if !validate_only {
                    ctx.close_file()?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::engine::Resources;

    #[derive(Default)]
    struct Flags {
        enabled: bool,
    }

    fn resource_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (path, body) in files {
            let target = dir.path().join(path);
            std::fs::create_dir_all(target.parent().unwrap()).unwrap();
            std::fs::write(target, body).unwrap();
        }
        dir
    }

    fn sample_tree() -> TemplateComponent<Flags> {
        let mut file = TemplateComponent::file(
            "main.py",
            "t/main.tmpl",
            Substitutions::new()
                .with("name", "demo")
                .with_deferred("mode", |flags: &Flags| {
                    let mode = if flags.enabled { "on" } else { "off" };
                    mode.to_string()
                }),
        );
        let method = file.add_child(
            TemplateComponent::code("t/method.tmpl", Substitutions::new()).with_indent(1),
        );
        method.add_child(
            TemplateComponent::code("t/body.tmpl", Substitutions::new()).with_indent(1),
        );

        TemplateComponent::directory("")
            .with_child(TemplateComponent::directory("pkg").with_child(file))
            .with_child(TemplateComponent::directory("doc"))
    }

    fn sample_resources() -> tempfile::TempDir {
        resource_dir(&[
            ("t/main.tmpl", "# ${name} ${mode}\nclass Main:\n"),
            ("t/method.tmpl", "def run(self):\n"),
            ("t/body.tmpl", "return ${missing}\n"),
        ])
    }

    #[test]
    fn test_write_pass_output() {
        let templates = sample_resources();
        let out = tempfile::tempdir().unwrap();
        let resources = Resources::with_override_dir(templates.path());
        let state = Flags { enabled: true };
        let mut ctx = TemplateContext::new(&resources, &state, out.path());

        sample_tree().execute(&mut ctx, false).unwrap();

        let written = std::fs::read_to_string(out.path().join("pkg/main.py")).unwrap();
        assert_eq!(
            written,
            "# demo on\nclass Main:\n    def run(self):\n        return ${missing}\n"
        );
        assert!(out.path().join("doc").is_dir());
        assert_eq!(
            ctx.summary(),
            crate::engine::RunSummary {
                directories: 3,
                files: 1,
                fragments: 2,
            }
        );
    }

    #[test]
    fn test_validate_pass_writes_nothing() {
        let templates = sample_resources();
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("project");
        let resources = Resources::with_override_dir(templates.path());
        let state = Flags::default();
        let mut ctx = TemplateContext::new(&resources, &state, &dest);

        sample_tree().execute(&mut ctx, true).unwrap();

        assert!(!dest.exists());
        assert_eq!(ctx.summary(), crate::engine::RunSummary::default());
    }

    #[test]
    fn test_bookkeeping_restored_in_both_modes() {
        let templates = sample_resources();
        for validate_only in [true, false] {
            let out = tempfile::tempdir().unwrap();
            let resources = Resources::with_override_dir(templates.path());
            let state = Flags::default();
            let mut ctx = TemplateContext::new(&resources, &state, out.path());
            ctx.add_indent(2);

            sample_tree().execute(&mut ctx, validate_only).unwrap();

            assert_eq!(ctx.indent_level(), 2);
            assert_eq!(ctx.current_directory(), out.path());
            assert!(!ctx.has_open_file());
        }
    }

    #[test]
    fn test_file_does_not_indent() {
        let templates = resource_dir(&[("t/line.tmpl", "x\n")]);
        let out = tempfile::tempdir().unwrap();
        let resources = Resources::with_override_dir(templates.path());
        let mut ctx = TemplateContext::new(&resources, &(), out.path());

        let tree: TemplateComponent<()> =
            TemplateComponent::file("a.txt", "t/line.tmpl", Substitutions::new())
                .with_indent(3)
                .with_child(TemplateComponent::code("t/line.tmpl", Substitutions::new()));
        tree.execute(&mut ctx, false).unwrap();

        let written = std::fs::read_to_string(out.path().join("a.txt")).unwrap();
        assert_eq!(written, "x\nx\n");
    }

    #[test]
    fn test_fragment_outside_file() {
        let templates = resource_dir(&[("t/line.tmpl", "x\n")]);
        let out = tempfile::tempdir().unwrap();
        let resources = Resources::with_override_dir(templates.path());

        let tree: TemplateComponent<()> = TemplateComponent::generic().with_child(
            TemplateComponent::code("t/line.tmpl", Substitutions::new()).with_indent(1),
        );

        let mut ctx = TemplateContext::new(&resources, &(), out.path());
        assert!(tree.execute(&mut ctx, true).is_ok());

        let mut ctx = TemplateContext::new(&resources, &(), out.path());
        let err = tree.execute(&mut ctx, false).unwrap_err();
        assert!(matches!(err, EngineError::NoOpenFile { ref resource } if resource == "t/line.tmpl"));
    }

    #[test]
    fn test_failure_stops_traversal() {
        let out = tempfile::tempdir().unwrap();
        let resources = Resources::embedded();

        let tree: TemplateComponent<()> = TemplateComponent::directory("")
            .with_child(TemplateComponent::file("a.txt", "t/absent.tmpl", Substitutions::new()))
            .with_child(TemplateComponent::directory("later"));

        let mut ctx = TemplateContext::new(&resources, &(), out.path());
        let err = tree.execute(&mut ctx, false).unwrap_err();
        assert!(matches!(err, EngineError::ResourceNotFound { .. }));
        assert!(!out.path().join("later").exists());
    }

    #[test]
    fn test_child_lookup() {
        let tree = sample_tree();
        let pkg = tree.child("pkg").expect("pkg directory");
        assert!(pkg.child("main.py").is_some());
        assert!(tree.child("main.py").is_none());
        assert_eq!(pkg.children()[0].children().len(), 1);
        assert!(matches!(tree.kind(), ComponentKind::Directory { name } if name.is_empty()));
    }
}
