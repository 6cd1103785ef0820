//! The `client-template`: a wrapper library around service requests

use std::path::Path;

use crate::config::{ConfigError, ConfigStore, PackageSection};
use crate::engine::{Resources, RunSummary, Substitutions, TemplateComponent};
use crate::GenerateError;

use super::package::PackageInfo;
use super::{run_passes, Blueprint, Template};

/// Section holding the client's package properties
pub const CLIENT_SECTION: &str = "Client";

const IMPLICIT_REQUIRES: &[&str] = &["dxlbootstrap", "dxlclient"];

const EXAMPLE_CLIENT_IMPORTS: &str =
    "from dxlclient.message import Request\nfrom dxlbootstrap.util import MessageUtils\n";
const EXAMPLE_SAMPLE_IMPORTS: &str = "from dxlbootstrap.util import MessageUtils\n";

/// The `Client` section
#[derive(Debug, Clone)]
pub struct ClientSection<'a> {
    package: PackageSection<'a>,
}

impl<'a> ClientSection<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self {
            package: PackageSection::new(store, CLIENT_SECTION, IMPLICIT_REQUIRES),
        }
    }

    pub fn package(&self) -> &PackageSection<'a> {
        &self.package
    }

    /// Name of the generated wrapper class (`clientClassName`)
    pub fn client_class_name(&self) -> Result<String, ConfigError> {
        self.package.section().required("clientClassName")
    }

    /// Whether to generate an example service invocation
    /// (`includeExampleMethod`, default true)
    pub fn include_example_method(&self) -> Result<bool, ConfigError> {
        self.package.section().boolean_or("includeExampleMethod", true)
    }
}

/// Generates a client library wrapping requests to a remote service
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientTemplate;

impl ClientTemplate {
    pub const NAME: &'static str = "client-template";

    pub fn new() -> Self {
        Self
    }

    /// Build the component tree
    pub fn blueprint(&self, store: &ConfigStore) -> Result<Blueprint<()>, ConfigError> {
        let section = ClientSection::new(store);
        let package = PackageInfo::resolve(section.package())?;
        let class_name = section.client_class_name()?;
        let include_example = section.include_example_method()?;

        let mut client_file = TemplateComponent::file(
            "client.py",
            "client/client/client.py.tmpl",
            Substitutions::new()
                .with("clientClassName", &class_name)
                .with("fullName", &package.full_name)
                .with(
                    "additionalImports",
                    if include_example { EXAMPLE_CLIENT_IMPORTS } else { "" },
                ),
        );
        let mut basic_sample = TemplateComponent::file(
            "basic_sample.py",
            "client/sample/basic/basic_sample.py.tmpl",
            Substitutions::new()
                .with("clientClassName", &class_name)
                .with("name", &package.name)
                .with(
                    "additionalImports",
                    if include_example { EXAMPLE_SAMPLE_IMPORTS } else { "" },
                ),
        );
        if include_example {
            client_file.add_child(
                TemplateComponent::code(
                    "client/client/code/example_method.code.tmpl",
                    Substitutions::new(),
                )
                .with_indent(1),
            );
            basic_sample.add_child(
                TemplateComponent::code(
                    "client/sample/basic/code/invoke_example_method.code.tmpl",
                    Substitutions::new(),
                )
                .with_indent(1),
            );
        }

        let client_dir = TemplateComponent::directory(package.name.as_str())
            .with_child(package.init_file(&class_name, ".client"))
            .with_child(client_file)
            .with_child(package.version_file());

        let doc_dir = TemplateComponent::directory("doc")
            .with_child(package.doc_conf_file())
            .with_child(TemplateComponent::directory("sdk").with_children([
                package.doc_index_file("client/doc/sdk/index.rst.tmpl"),
                package.doc_readme_file(),
                package.doc_overview_file(),
                package.doc_installation_file("client/doc/sdk/installation.rst.tmpl"),
                package.doc_sample_config_file(),
            ]));

        let root = TemplateComponent::directory("")
            .with_children(package.packaging_files())
            .with_child(package.dist_file("client/dist.py.tmpl"))
            .with_child(package.clean_file())
            .with_child(client_dir)
            .with_child(package.sample_directory(basic_sample))
            .with_child(doc_dir);

        Ok(Blueprint { root, state: () })
    }
}

impl Template for ClientTemplate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Client library that hides service topics and message formats"
    }

    fn run(
        &self,
        store: &ConfigStore,
        destination: &Path,
        resources: &Resources,
    ) -> Result<RunSummary, GenerateError> {
        run_passes(self.name(), destination, resources, || self.blueprint(store))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store(include_example: &str) -> ConfigStore {
        ConfigStore::new()
            .with("Client", "name", "geolocationclient")
            .with("Client", "fullName", "Geolocation Client")
            .with("Client", "clientClassName", "GeolocationClient")
            .with("Client", "includeExampleMethod", include_example)
    }

    fn names<S>(component: &TemplateComponent<S>) -> Vec<&str> {
        component
            .children()
            .iter()
            .filter_map(|child| child.name())
            .collect()
    }

    #[test]
    fn test_tree_shape() {
        let blueprint = ClientTemplate::new().blueprint(&store("yes")).unwrap();
        assert_eq!(
            names(&blueprint.root),
            vec![
                "README",
                "README.md",
                "setup.py",
                "LICENSE",
                "MANIFEST.in",
                "dist.py",
                "clean.py",
                "geolocationclient",
                "sample",
                "doc",
            ]
        );

        let sdk = blueprint.root.child("doc").unwrap().child("sdk").unwrap();
        assert_eq!(
            names(sdk),
            vec![
                "index.rst",
                "README.html",
                "overview.rst",
                "installation.rst",
                "sampleconfig.rst",
            ]
        );
    }

    #[test]
    fn test_example_method_toggle() {
        let with_example = ClientTemplate::new().blueprint(&store("yes")).unwrap();
        let client_dir = with_example.root.child("geolocationclient").unwrap();
        assert_eq!(client_dir.child("client.py").unwrap().children().len(), 1);

        let without = ClientTemplate::new().blueprint(&store("no")).unwrap();
        let client_dir = without.root.child("geolocationclient").unwrap();
        assert!(client_dir.child("client.py").unwrap().children().is_empty());
        let sample = without.root.child("sample").unwrap().child("basic").unwrap();
        assert!(sample.child("basic_sample.py").unwrap().children().is_empty());
    }

    #[test]
    fn test_example_method_defaults_on() {
        let store = ConfigStore::new()
            .with("Client", "name", "geolocationclient")
            .with("Client", "fullName", "Geolocation Client")
            .with("Client", "clientClassName", "GeolocationClient");
        let section = ClientSection::new(&store);
        assert!(section.include_example_method().unwrap());
    }

    #[test]
    fn test_missing_client_class_name() {
        let store = ConfigStore::new()
            .with("Client", "name", "geolocationclient")
            .with("Client", "fullName", "Geolocation Client");
        let err = ClientTemplate::new().blueprint(&store).unwrap_err();
        assert_eq!(err.location(), Some(("clientClassName", "Client")));
    }
}
