//! The `application-template`: a long-running fabric application
//!
//! The generated package registers one event callback per entry of
//! `eventHandlers` and one service per entry of `services`. Each service names
//! its request handlers, and every handler (event or request) has a section of
//! its own holding its topic and class name:
//!
//! ```toml
//! [Application]
//! name = "geolocationservice"
//! fullName = "Geolocation Service"
//! appClassName = "GeolocationService"
//! services = "geolocation_service"
//!
//! [geolocation_service]
//! serviceType = "/mycompany/service/geolocation"
//! requestHandlers = "geolocation_service_hostlookup"
//!
//! [geolocation_service_hostlookup]
//! topic = "/mycompany/service/geolocation/host_lookup"
//! className = "GeolocationHostLookupRequestCallback"
//! ```

use std::path::Path;

use crate::config::{ConfigError, ConfigSection, ConfigStore, PackageSection};
use crate::engine::{Resources, RunSummary, Substitutions, TemplateComponent};
use crate::GenerateError;

use super::package::PackageInfo;
use super::{run_passes, text, Blueprint, Template};

/// Section holding the application's package properties
pub const APPLICATION_SECTION: &str = "Application";

const IMPLICIT_REQUIRES: &[&str] = &["dxlbootstrap", "dxlclient"];

/// Typed access to the application template's configuration
#[derive(Debug, Clone, Copy)]
pub struct AppConfig<'a> {
    store: &'a ConfigStore,
}

impl<'a> AppConfig<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    pub fn application(&self) -> ApplicationSection<'a> {
        ApplicationSection {
            package: PackageSection::new(self.store, APPLICATION_SECTION, IMPLICIT_REQUIRES),
        }
    }

    /// The section describing a service
    pub fn service(&self, name: &str) -> ServiceSection<'a> {
        ServiceSection {
            section: ConfigSection::new(self.store, name),
        }
    }

    /// The section describing an event or request handler
    pub fn handler(&self, name: &str) -> HandlerSection<'a> {
        HandlerSection {
            section: ConfigSection::new(self.store, name),
        }
    }
}

/// The `Application` section
#[derive(Debug, Clone)]
pub struct ApplicationSection<'a> {
    package: PackageSection<'a>,
}

impl<'a> ApplicationSection<'a> {
    pub fn package(&self) -> &PackageSection<'a> {
        &self.package
    }

    /// Name of the generated application class (`appClassName`)
    pub fn app_class_name(&self) -> Result<String, ConfigError> {
        self.package.section().required("appClassName")
    }

    /// Event handler names (`eventHandlers`)
    pub fn event_handlers(&self) -> Result<Vec<String>, ConfigError> {
        self.package.section().list_or_empty("eventHandlers")
    }

    /// Service names (`services`)
    pub fn services(&self) -> Result<Vec<String>, ConfigError> {
        self.package.section().list_or_empty("services")
    }
}

#[derive(Debug, Clone)]
pub struct ServiceSection<'a> {
    section: ConfigSection<'a>,
}

impl<'a> ServiceSection<'a> {
    /// `serviceType`
    pub fn service_type(&self) -> Result<String, ConfigError> {
        self.section.required("serviceType")
    }

    /// Request handler names (`requestHandlers`)
    pub fn request_handlers(&self) -> Result<Vec<String>, ConfigError> {
        self.section.list_or_empty("requestHandlers")
    }
}

#[derive(Debug, Clone)]
pub struct HandlerSection<'a> {
    section: ConfigSection<'a>,
}

impl<'a> HandlerSection<'a> {
    pub fn topic(&self) -> Result<String, ConfigError> {
        self.section.required("topic")
    }

    /// Name of the generated callback class (`className`)
    pub fn class_name(&self) -> Result<String, ConfigError> {
        self.section.required("className")
    }

    /// Whether the callback runs off the incoming message thread
    /// (`separateThread`, default true)
    pub fn separate_thread(&self) -> Result<bool, ConfigError> {
        self.section.boolean_or("separateThread", true)
    }
}

/// Facts about the tree read back by deferred substitutions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppBuildState {
    pub has_events: bool,
    pub has_services: bool,
}

/// Imports `app.py` needs for the registered callbacks
fn additional_imports(state: &AppBuildState) -> String {
    let mut imports = String::new();
    if state.has_events || state.has_services {
        imports.push('\n');
        if state.has_services {
            imports.push_str("from dxlclient.service import ServiceRegistrationInfo\n");
            imports.push_str("from requesthandlers import *\n");
        }
        if state.has_events {
            imports.push_str("from eventhandlers import *\n");
        }
    }
    imports
}

/// Per-handler values shared by the callback, registration and sample code
struct Handler {
    name: String,
    topic: String,
    class_name: String,
    separate_thread: bool,
}

impl Handler {
    fn resolve(config: &AppConfig<'_>, name: &str) -> Result<Self, ConfigError> {
        let section = config.handler(name);
        Ok(Self {
            name: name.to_string(),
            topic: section.topic()?,
            class_name: section.class_name()?,
            separate_thread: section.separate_thread()?,
        })
    }

    fn callback(&self, resource: &str) -> TemplateComponent<AppBuildState> {
        TemplateComponent::code(
            resource,
            Substitutions::new()
                .with("className", &self.class_name)
                .with("name", &self.name)
                .with("topic", &self.topic),
        )
    }

    fn registration(&self, resource: &str) -> TemplateComponent<AppBuildState> {
        TemplateComponent::code(
            resource,
            Substitutions::new()
                .with("className", &self.class_name)
                .with("topic", &self.topic)
                .with("callbackName", &self.name)
                .with("separateThread", text::python_bool(self.separate_thread)),
        )
        .with_indent(1)
    }
}

/// Components that later build steps attach code to
struct AppTree {
    app_file: TemplateComponent<AppBuildState>,
    basic_sample: TemplateComponent<AppBuildState>,
    handler_files: Vec<TemplateComponent<AppBuildState>>,
    state: AppBuildState,
}

impl AppTree {
    fn new(package: &PackageInfo, app_class_name: &str) -> Self {
        let app_file: TemplateComponent<AppBuildState> = TemplateComponent::file(
            "app.py",
            "app/app/app.py.tmpl",
            Substitutions::new()
                .with("appClassName", app_class_name)
                .with("name", &package.name)
                .with("fullName", &package.full_name)
                .with_deferred("additionalImports", additional_imports),
        );
        let basic_sample = TemplateComponent::file(
            "basic_sample.py",
            "app/sample/basic/basic_sample.py.tmpl",
            Substitutions::new(),
        );

        Self {
            app_file,
            basic_sample,
            handler_files: Vec::new(),
            state: AppBuildState::default(),
        }
    }

    fn add_event_handlers(
        &mut self,
        config: &AppConfig<'_>,
        names: &[String],
    ) -> Result<(), ConfigError> {
        if names.is_empty() {
            return Ok(());
        }
        self.state.has_events = true;

        let mut register = TemplateComponent::code(
            "app/app/code/register_event_handler_def.code.tmpl",
            Substitutions::new(),
        )
        .with_indent(1);
        let mut events_file = TemplateComponent::file(
            "eventhandlers.py",
            "app/app/eventhandlers.py.tmpl",
            Substitutions::new(),
        );

        for name in names {
            let handler = Handler::resolve(config, name)?;
            events_file.add_child(handler.callback("app/app/code/events_event_callback.code.tmpl"));
            register.add_child(
                handler.registration("app/app/code/register_event_handler.code.tmpl"),
            );
            self.basic_sample.add_child(
                TemplateComponent::code(
                    "app/sample/basic/code/event.code.tmpl",
                    Substitutions::new()
                        .with("topic", &handler.topic)
                        .with("callbackName", &handler.name),
                )
                .with_indent(1),
            );
        }

        self.app_file.add_child(register);
        self.handler_files.push(events_file);
        Ok(())
    }

    fn add_services(
        &mut self,
        config: &AppConfig<'_>,
        names: &[String],
    ) -> Result<(), ConfigError> {
        if names.is_empty() {
            return Ok(());
        }
        self.state.has_services = true;

        let mut register = TemplateComponent::code(
            "app/app/code/register_services_def.code.tmpl",
            Substitutions::new(),
        )
        .with_indent(1);
        let mut requests_file: Option<TemplateComponent<AppBuildState>> = None;

        for service_name in names {
            let service = config.service(service_name);
            register.add_child(
                TemplateComponent::code(
                    "app/app/code/service_create.code.tmpl",
                    Substitutions::new()
                        .with("serviceType", service.service_type()?)
                        .with("serviceName", service_name),
                )
                .with_indent(1),
            );

            for handler_name in service.request_handlers()? {
                let handler = Handler::resolve(config, &handler_name)?;
                requests_file
                    .get_or_insert_with(|| {
                        TemplateComponent::file(
                            "requesthandlers.py",
                            "app/app/requesthandlers.py.tmpl",
                            Substitutions::new(),
                        )
                    })
                    .add_child(
                        handler.callback("app/app/code/requests_request_callback.code.tmpl"),
                    );
                register.add_child(
                    handler.registration("app/app/code/service_add_topic.code.tmpl"),
                );
                self.basic_sample.add_child(
                    TemplateComponent::code(
                        "app/sample/basic/code/request.code.tmpl",
                        Substitutions::new()
                            .with("topic", &handler.topic)
                            .with("name", &handler.name),
                    )
                    .with_indent(1),
                );
            }

            register.add_child(
                TemplateComponent::code(
                    "app/app/code/service_register.code.tmpl",
                    Substitutions::new(),
                )
                .with_indent(1),
            );
        }

        self.app_file.add_child(register);
        self.handler_files.extend(requests_file);
        Ok(())
    }
}

/// Generates a fabric application that listens for events and hosts services
#[derive(Debug, Clone, Copy, Default)]
pub struct AppTemplate;

impl AppTemplate {
    pub const NAME: &'static str = "application-template";

    pub fn new() -> Self {
        Self
    }

    /// Build the component tree and the state its deferred values read
    ///
    /// Every configuration property the tree depends on is resolved here.
    pub fn blueprint(&self, store: &ConfigStore) -> Result<Blueprint<AppBuildState>, ConfigError> {
        let config = AppConfig::new(store);
        let application = config.application();
        let package = PackageInfo::resolve(application.package())?;
        let app_class_name = application.app_class_name()?;

        let mut tree = AppTree::new(&package, &app_class_name);
        tree.add_event_handlers(&config, &application.event_handlers()?)?;
        tree.add_services(&config, &application.services()?)?;

        let config_dir = TemplateComponent::directory("config")
            .with_child(TemplateComponent::file(
                "logging.config",
                "app/config/logging.config.tmpl",
                Substitutions::new(),
            ))
            .with_child(TemplateComponent::file(
                "logging.config.dist",
                "app/config/logging.config.tmpl",
                Substitutions::new(),
            ))
            .with_children(package.client_config_files())
            .with_child(TemplateComponent::file(
                format!("{}.config", package.name),
                "app/config/app.config.tmpl",
                Substitutions::new().with("fullName", &package.full_name),
            ))
            .with_child(TemplateComponent::file(
                format!("{}.config.dist", package.name),
                "app/config/app.config.tmpl",
                Substitutions::new().with("fullName", &package.full_name),
            ));

        let doc_dir = TemplateComponent::directory("doc")
            .with_child(package.doc_conf_file())
            .with_child(TemplateComponent::directory("sdk").with_children([
                package.doc_index_file("app/doc/sdk/index.rst.tmpl"),
                package.doc_readme_file(),
                package.doc_overview_file(),
                package.doc_installation_file("app/doc/sdk/installation.rst.tmpl"),
                package.doc_running_file(),
                package.doc_configuration_file(),
                package.doc_sample_config_file(),
            ]));

        let app_dir = TemplateComponent::directory(package.name.as_str())
            .with_child(package.init_file(&app_class_name, ".app"))
            .with_child(tree.app_file)
            .with_child(TemplateComponent::file(
                "__main__.py",
                "app/app/__main__.py.tmpl",
                Substitutions::new()
                    .with("appClassName", &app_class_name)
                    .with("name", &package.name),
            ))
            .with_child(package.version_file())
            .with_children(tree.handler_files);

        let root = TemplateComponent::directory("")
            .with_children(package.packaging_files())
            .with_child(package.dist_file("app/dist.py.tmpl"))
            .with_child(package.clean_file())
            .with_child(package.dockerfile())
            .with_child(config_dir)
            .with_child(package.sample_directory(tree.basic_sample))
            .with_child(doc_dir)
            .with_child(app_dir);

        Ok(Blueprint {
            root,
            state: tree.state,
        })
    }
}

impl Template for AppTemplate {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        "Application that registers event callbacks and request-handling services"
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
