//! End-to-end generation tests for the built-in templates

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use fabric_bootstrap::{generate, ConfigError, GenerateError, TemplateError};

const APP_CONFIG: &str = r#"
[Application]
name = "geolocationservice"
fullName = "Geolocation Service"
appClassName = "GeolocationService"
services = "geolocation_service"

[geolocation_service]
serviceType = "/mycompany/service/geolocation"
requestHandlers = "geolocation_service_hostlookup"

[geolocation_service_hostlookup]
topic = "/mycompany/service/geolocation/host_lookup"
className = "GeolocationHostLookupRequestCallback"
"#;

const CLIENT_CONFIG: &str = r#"
[Client]
name = "geolocationclient"
fullName = "Geolocation Client"
clientClassName = "GeolocationClient"
includeExampleMethod = "yes"
"#;

/// Write a configuration file into a fresh temporary directory
fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bootstrap.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).unwrap().next().is_none()
}

#[test]
fn test_application_with_service() {
    let (_config_dir, config) = write_config(APP_CONFIG);
    let out = tempfile::tempdir().unwrap();

    generate("application-template", &config, out.path()).expect("Should generate");

    let package = out.path().join("geolocationservice");
    let app = read(&package.join("app.py"));
    assert!(app.contains("class GeolocationService(Application):"));
    assert!(app.contains("from dxlclient.service import ServiceRegistrationInfo"));
    assert!(app.contains("from requesthandlers import *"));
    assert!(!app.contains("from eventhandlers import *"));
    assert!(app.contains("    def on_register_services(self):"));
    assert!(app.contains(
        "        service = ServiceRegistrationInfo(self._dxl_client, \
         \"/mycompany/service/geolocation\")"
    ));
    assert!(app.contains(
        "        self.add_request_callback(service, \
         \"/mycompany/service/geolocation/host_lookup\", \
         GeolocationHostLookupRequestCallback(self), True)"
    ));

    let requests = read(&package.join("requesthandlers.py"));
    assert!(requests.contains("class GeolocationHostLookupRequestCallback(RequestCallback):"));
    assert!(!package.join("eventhandlers.py").exists());

    let sample = read(&out.path().join("sample/basic/basic_sample.py"));
    assert!(sample.contains("    # Invoke request handler \"geolocation_service_hostlookup\""));

    for file in [
        "README",
        "setup.py",
        "config/geolocationservice.config.dist",
        "doc/sdk/configuration.rst",
        "geolocationservice/_version.py",
    ] {
        assert!(out.path().join(file).is_file(), "{} should exist", file);
    }
}

#[test]
fn test_application_rerun_is_idempotent() {
    let (_config_dir, config) = write_config(APP_CONFIG);
    let out = tempfile::tempdir().unwrap();

    let first = generate("application-template", &config, out.path()).unwrap();
    let app_first = read(&out.path().join("geolocationservice/app.py"));

    let second = generate("application-template", &config, out.path()).unwrap();
    let app_second = read(&out.path().join("geolocationservice/app.py"));

    assert_eq!(first, second);
    assert_eq!(app_first, app_second);
}

#[test]
fn test_application_dockerfile() {
    let (_config_dir, config) = write_config(APP_CONFIG);
    let out = tempfile::tempdir().unwrap();

    generate("application-template", &config, out.path()).unwrap();

    insta::assert_snapshot!(read(&out.path().join("Dockerfile")), @r#"
    FROM python:2.7-slim

    VOLUME ["/opt/geolocationservice-config"]

    # Install required packages
    RUN pip install "dxlbootstrap"
    RUN pip install "dxlclient"

    # Build application
    COPY . /tmp/build
    WORKDIR /tmp/build
    RUN python ./clean.py
    RUN python ./setup.py bdist_wheel
    RUN pip install dist/*.whl

    # Cleanup build
    RUN rm -rf /tmp/build

    WORKDIR /opt/geolocationservice
    CMD ["python", "-m", "geolocationservice", "/opt/geolocationservice-config"]
    "#);
}

#[test]
fn test_application_language_versions() {
    let config_text = APP_CONFIG.replace(
        "appClassName = \"GeolocationService\"",
        "appClassName = \"GeolocationService\"\nlanguageVersions = [\"3.6\", \"2.7.9\"]\n\
         installRequires = \"requests\"",
    );
    let (_config_dir, config) = write_config(&config_text);
    let out = tempfile::tempdir().unwrap();

    generate("application-template", &config, out.path()).unwrap();

    let setup = read(&out.path().join("setup.py"));
    assert!(setup.contains("python_requires=\">=2.7.9\","));
    assert!(setup.contains("        \"requests\",\n        \"dxlbootstrap\",\n        \"dxlclient\""));
    assert!(setup.contains("\"Programming Language :: Python :: 2.7\","));
    assert!(setup.contains("\"Programming Language :: Python :: 3.6\""));

    let dist = read(&out.path().join("dist.py"));
    assert!(dist.contains("run_setup([\"bdist_wheel\", \"--python-tag\", \"py27.py36\"])"));

    let installation = read(&out.path().join("doc/sdk/installation.rst"));
    assert!(installation.contains("* Python 2.7.9 or 3.6 installed within a Windows or Linux environment."));
    assert!(installation.contains("-py27.py36-none-any.whl"));
}

#[test]
fn test_application_events_and_services() {
    let config_text = APP_CONFIG.replace(
        "services = \"geolocation_service\"",
        "services = \"geolocation_service\"\neventHandlers = \"geolocation_event\"",
    ) + r#"
[geolocation_event]
topic = "/mycompany/event/geolocation"
className = "GeolocationEventCallback"
separateThread = "off"
"#;
    let (_config_dir, config) = write_config(&config_text);
    let out = tempfile::tempdir().unwrap();

    let summary = generate("application-template", &config, out.path()).unwrap();
    // events: def + registration + sample + callback; services: def + create +
    // add topic + register + sample + callback
    assert_eq!(summary.fragments, 10);

    let app = read(&out.path().join("geolocationservice/app.py"));
    assert!(app.contains("from eventhandlers import *"));
    assert!(app.contains(
        "        self.add_event_callback(\"/mycompany/event/geolocation\", \
         GeolocationEventCallback(self), False)"
    ));
    let register_events = app.find("def on_register_event_handlers").unwrap();
    let register_services = app.find("def on_register_services").unwrap();
    assert!(register_events < register_services);

    let events = read(&out.path().join("geolocationservice/eventhandlers.py"));
    assert!(events.starts_with("from __future__ import absolute_import\n"));
    assert!(events.contains("class GeolocationEventCallback(EventCallback):"));
}

#[test]
fn test_client_with_example_method() {
    let (_config_dir, config) = write_config(CLIENT_CONFIG);
    let out = tempfile::tempdir().unwrap();

    generate("client-template", &config, out.path()).expect("Should generate");

    let client = read(&out.path().join("geolocationclient/client.py"));
    assert!(client.contains("class GeolocationClient(Client):"));
    assert!(client.contains("from dxlclient.message import Request\nfrom dxlbootstrap.util import MessageUtils\n"));
    assert!(client.contains("    def example_method(self, topic, payload):"));

    let sample = read(&out.path().join("sample/basic/basic_sample.py"));
    assert!(sample.contains("    resp_dict = client.example_method(\"/mycompany/myservice\", \"ping\")"));

    let init = read(&out.path().join("geolocationclient/__init__.py"));
    assert!(init.contains("GeolocationClient"));
    assert!(!out.path().join("Dockerfile").exists());
}

#[test]
fn test_client_without_example_method() {
    let (_config_dir, config) = write_config(&CLIENT_CONFIG.replace("\"yes\"", "\"no\""));
    let out = tempfile::tempdir().unwrap();

    generate("client-template", &config, out.path()).unwrap();

    let client = read(&out.path().join("geolocationclient/client.py"));
    assert!(client.contains("class GeolocationClient(Client):"));
    assert!(!client.contains("example_method"));
    assert!(!client.contains("from dxlclient.message import Request"));
    assert!(!client.contains("MessageUtils"));
}

#[test]
fn test_missing_app_class_name_writes_nothing() {
    let (_config_dir, config) = write_config(&APP_CONFIG.replace(
        "appClassName = \"GeolocationService\"\n",
        "",
    ));
    let out = tempfile::tempdir().unwrap();

    let err = generate("application-template", &config, out.path()).unwrap_err();
    match err {
        GenerateError::Config(ConfigError::MissingOption { option, section }) => {
            assert_eq!(option, "appClassName");
            assert_eq!(section, "Application");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(is_empty_dir(out.path()));
}

#[test]
fn test_invalid_language_version_writes_nothing() {
    let config_text = APP_CONFIG.replace(
        "appClassName = \"GeolocationService\"",
        "appClassName = \"GeolocationService\"\nlanguageVersions = \"3, three\"",
    );
    let (_config_dir, config) = write_config(&config_text);
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("project");

    let err = generate("application-template", &config, &dest).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::InvalidLanguageVersion { ref value }) if value == "three"
    ));
    assert!(!dest.exists());
}

#[test]
fn test_malformed_list_writes_nothing() {
    let config_text = APP_CONFIG.replace(
        "services = \"geolocation_service\"",
        "services = \"geolocation_service, 'unterminated\"",
    );
    let (_config_dir, config) = write_config(&config_text);
    let out = tempfile::tempdir().unwrap();

    let err = generate("application-template", &config, out.path()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::MalformedList { .. })
    ));
    assert!(err.format().contains("Application.services"));
    assert!(is_empty_dir(out.path()));
}

#[test]
fn test_package_name_outside_destination_rejected() {
    let outside = tempfile::tempdir().unwrap();
    let escaped = outside.path().join("escaped");
    let config_text = APP_CONFIG.replace(
        "name = \"geolocationservice\"",
        &format!("name = {:?}", escaped.display().to_string()),
    );
    let (_config_dir, config) = write_config(&config_text);
    let out = tempfile::tempdir().unwrap();
    let dest = out.path().join("dest");

    let err = generate("application-template", &config, &dest).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::InvalidPackageName { ref section, .. })
            if section == "Application"
    ));
    assert!(!dest.exists());
    assert!(!escaped.exists());
    assert!(is_empty_dir(outside.path()));

    let (_config_dir, config) =
        write_config(&CLIENT_CONFIG.replace("\"geolocationclient\"", "\"../geolocationclient\""));
    let err = generate("client-template", &config, &dest).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Config(ConfigError::InvalidPackageName { .. })
    ));
    assert!(!out.path().join("geolocationclient").exists());
}

#[test]
fn test_unknown_template_checked_before_config() {
    let out = tempfile::tempdir().unwrap();
    let missing = out.path().join("does-not-exist.toml");

    let err = generate("service-template", &missing, out.path()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::Template(TemplateError::NotFound { .. })
    ));
}

#[test]
fn test_unparseable_config() {
    let (_config_dir, config) = write_config("[Client\nname = ");
    let out = tempfile::tempdir().unwrap();

    let err = generate("client-template", &config, out.path()).unwrap_err();
    assert!(matches!(err, GenerateError::Config(ConfigError::Parse(_))));
    assert!(is_empty_dir(out.path()));
}
