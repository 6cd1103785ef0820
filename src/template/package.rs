//! Package scaffolding shared by every template
//!
//! Both project shapes are installable packages with the same packaging
//! files, documentation skeleton and sample configuration. The components
//! for those are built here from the resolved package properties.

use crate::config::{ConfigError, PackageSection};
use crate::engine::{Substitutions, TemplateComponent};

use super::text;

/// Package properties resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    pub name: String,
    pub full_name: String,
    pub copyright: String,
    /// Declared requirements followed by the implicit ones
    pub install_requires: Vec<String>,
    /// Sorted versions, or only `universal`
    pub language_versions: Vec<String>,
}

impl PackageInfo {
    /// Read every package property of a section
    pub fn resolve(section: &PackageSection<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            name: section.name()?,
            full_name: section.full_name()?,
            copyright: section.copyright(),
            install_requires: section.install_requires()?,
            language_versions: section.language_versions()?,
        })
    }

    fn file<S>(&self, file_name: &str, resource: &str) -> TemplateComponent<S> {
        TemplateComponent::file(file_name, resource, Substitutions::new())
    }

    fn named_file<S>(&self, file_name: &str, resource: &str) -> TemplateComponent<S> {
        TemplateComponent::file(
            file_name,
            resource,
            Substitutions::new().with("name", &self.name),
        )
    }

    /// `README`, `README.md`, `setup.py`, `LICENSE` and `MANIFEST.in`
    pub fn packaging_files<S>(&self) -> Vec<TemplateComponent<S>> {
        vec![
            TemplateComponent::file(
                "README",
                "app/README.tmpl",
                Substitutions::new()
                    .with("fullName", &self.full_name)
                    .with("fullNameSep", text::underline(&self.full_name, '='))
                    .with("copyright", &self.copyright),
            ),
            TemplateComponent::file(
                "README.md",
                "app/README.md.tmpl",
                Substitutions::new()
                    .with("fullName", &self.full_name)
                    .with("copyright", &self.copyright),
            ),
            TemplateComponent::file(
                "setup.py",
                "app/setup.py.tmpl",
                Substitutions::new()
                    .with("name", &self.name)
                    .with("installRequires", text::install_requires(&self.install_requires))
                    .with("languageRequires", text::language_requires(&self.language_versions))
                    .with("classifiers", text::classifiers(&self.language_versions)),
            ),
            self.file("LICENSE", "app/LICENSE.tmpl"),
            self.file("MANIFEST.in", "app/MANIFEST.in.tmpl"),
        ]
    }

    /// Build script producing the distributable archives
    pub fn dist_file<S>(&self, resource: &str) -> TemplateComponent<S> {
        TemplateComponent::file(
            "dist.py",
            resource,
            Substitutions::new()
                .with("name", &self.name)
                .with("distVersionTag", text::dist_version_tag(&self.language_versions)),
        )
    }

    pub fn clean_file<S>(&self) -> TemplateComponent<S> {
        self.named_file("clean.py", "app/clean.py.tmpl")
    }

    /// Container image definition
    pub fn dockerfile<S>(&self) -> TemplateComponent<S> {
        TemplateComponent::file(
            "Dockerfile",
            "app/Dockerfile.tmpl",
            Substitutions::new()
                .with("name", &self.name)
                .with(
                    "languageVersion",
                    text::docker_language_version(&self.language_versions),
                )
                .with("pipInstall", text::pip_install(&self.install_requires)),
        )
    }

    /// `__init__.py` exporting the package's main class
    pub fn init_file<S>(&self, class_name: &str, rel_package: &str) -> TemplateComponent<S> {
        TemplateComponent::file(
            "__init__.py",
            "app/app/__init__.py.tmpl",
            Substitutions::new()
                .with("appClassName", class_name)
                .with("relPackage", rel_package),
        )
    }

    pub fn version_file<S>(&self) -> TemplateComponent<S> {
        self.file("_version.py", "app/app/_version.py.tmpl")
    }

    /// Fabric client configuration and its `.dist` copy
    pub fn client_config_files<S>(&self) -> Vec<TemplateComponent<S>> {
        vec![
            self.file("dxlclient.config", "app/config/dxlclient.config.tmpl"),
            self.file("dxlclient.config.dist", "app/config/dxlclient.config.tmpl"),
        ]
    }

    /// `sample/` with the client configuration, `common.py` and the basic sample
    pub fn sample_directory<S>(&self, basic_sample: TemplateComponent<S>) -> TemplateComponent<S> {
        TemplateComponent::directory("sample")
            .with_children(self.client_config_files())
            .with_child(self.file("common.py", "app/sample/common.py.tmpl"))
            .with_child(TemplateComponent::directory("basic").with_child(basic_sample))
    }

    /// Sphinx configuration for the documentation
    pub fn doc_conf_file<S>(&self) -> TemplateComponent<S> {
        TemplateComponent::file(
            "conf.py",
            "app/doc/conf.py.tmpl",
            Substitutions::new()
                .with("copyright", &self.copyright)
                .with("fullName", &self.full_name)
                .with("name", &self.name),
        )
    }

    pub fn doc_index_file<S>(&self, resource: &str) -> TemplateComponent<S> {
        TemplateComponent::file(
            "index.rst",
            resource,
            Substitutions::new()
                .with("fullName", &self.full_name)
                .with("fullNameSep", text::underline(&self.full_name, '='))
                .with("name", &self.name),
        )
    }

    pub fn doc_readme_file<S>(&self) -> TemplateComponent<S> {
        TemplateComponent::file(
            "README.html",
            "app/doc/sdk/README.html.tmpl",
            Substitutions::new()
                .with("copyright", &self.copyright)
                .with("fullName", &self.full_name),
        )
    }

    pub fn doc_overview_file<S>(&self) -> TemplateComponent<S> {
        self.file("overview.rst", "app/doc/sdk/overview.rst.tmpl")
    }

    pub fn doc_installation_file<S>(&self, resource: &str) -> TemplateComponent<S> {
        TemplateComponent::file(
            "installation.rst",
            resource,
            Substitutions::new()
                .with("name", &self.name)
                .with(
                    "versionText",
                    text::installation_version_text(&self.language_versions),
                )
                .with("wheelTag", text::wheel_tag(&self.language_versions)),
        )
    }

    pub fn doc_running_file<S>(&self) -> TemplateComponent<S> {
        self.named_file("running.rst", "app/doc/sdk/running.rst.tmpl")
    }

    pub fn doc_configuration_file<S>(&self) -> TemplateComponent<S> {
        let title = format!("{} ({}.config)", self.full_name, self.name);
        TemplateComponent::file(
            "configuration.rst",
            "app/doc/sdk/configuration.rst.tmpl",
            Substitutions::new()
                .with("fullName", &self.full_name)
                .with("name", &self.name)
                .with("configTitleSep", text::underline(&title, '-'))
                .with("configTitle", title),
        )
    }

    pub fn doc_sample_config_file<S>(&self) -> TemplateComponent<S> {
        TemplateComponent::file(
            "sampleconfig.rst",
            "app/doc/sdk/sampleconfig.rst.tmpl",
            Substitutions::new().with("fullName", &self.full_name),
        )
    }
}
