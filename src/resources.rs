//! Static resource bodies embedded into the binary
//!
//! Keys are paths relative to the `resources/` directory at the crate root.

pub(crate) static EMBEDDED: &[(&str, &str)] = &[
    (
        "app/Dockerfile.tmpl",
        include_str!("../resources/app/Dockerfile.tmpl"),
    ),
    (
        "app/LICENSE.tmpl",
        include_str!("../resources/app/LICENSE.tmpl"),
    ),
    (
        "app/MANIFEST.in.tmpl",
        include_str!("../resources/app/MANIFEST.in.tmpl"),
    ),
    (
        "app/README.md.tmpl",
        include_str!("../resources/app/README.md.tmpl"),
    ),
    (
        "app/README.tmpl",
        include_str!("../resources/app/README.tmpl"),
    ),
    (
        "app/app/__init__.py.tmpl",
        include_str!("../resources/app/app/__init__.py.tmpl"),
    ),
    (
        "app/app/__main__.py.tmpl",
        include_str!("../resources/app/app/__main__.py.tmpl"),
    ),
    (
        "app/app/_version.py.tmpl",
        include_str!("../resources/app/app/_version.py.tmpl"),
    ),
    (
        "app/app/app.py.tmpl",
        include_str!("../resources/app/app/app.py.tmpl"),
    ),
    (
        "app/app/code/events_event_callback.code.tmpl",
        include_str!("../resources/app/app/code/events_event_callback.code.tmpl"),
    ),
    (
        "app/app/code/register_event_handler.code.tmpl",
        include_str!("../resources/app/app/code/register_event_handler.code.tmpl"),
    ),
    (
        "app/app/code/register_event_handler_def.code.tmpl",
        include_str!("../resources/app/app/code/register_event_handler_def.code.tmpl"),
    ),
    (
        "app/app/code/register_services_def.code.tmpl",
        include_str!("../resources/app/app/code/register_services_def.code.tmpl"),
    ),
    (
        "app/app/code/requests_request_callback.code.tmpl",
        include_str!("../resources/app/app/code/requests_request_callback.code.tmpl"),
    ),
    (
        "app/app/code/service_add_topic.code.tmpl",
        include_str!("../resources/app/app/code/service_add_topic.code.tmpl"),
    ),
    (
        "app/app/code/service_create.code.tmpl",
        include_str!("../resources/app/app/code/service_create.code.tmpl"),
    ),
    (
        "app/app/code/service_register.code.tmpl",
        include_str!("../resources/app/app/code/service_register.code.tmpl"),
    ),
    (
        "app/app/eventhandlers.py.tmpl",
        include_str!("../resources/app/app/eventhandlers.py.tmpl"),
    ),
    (
        "app/app/requesthandlers.py.tmpl",
        include_str!("../resources/app/app/requesthandlers.py.tmpl"),
    ),
    (
        "app/clean.py.tmpl",
        include_str!("../resources/app/clean.py.tmpl"),
    ),
    (
        "app/config/app.config.tmpl",
        include_str!("../resources/app/config/app.config.tmpl"),
    ),
    (
        "app/config/dxlclient.config.tmpl",
        include_str!("../resources/app/config/dxlclient.config.tmpl"),
    ),
    (
        "app/config/logging.config.tmpl",
        include_str!("../resources/app/config/logging.config.tmpl"),
    ),
    (
        "app/dist.py.tmpl",
        include_str!("../resources/app/dist.py.tmpl"),
    ),
    (
        "app/doc/conf.py.tmpl",
        include_str!("../resources/app/doc/conf.py.tmpl"),
    ),
    (
        "app/doc/sdk/README.html.tmpl",
        include_str!("../resources/app/doc/sdk/README.html.tmpl"),
    ),
    (
        "app/doc/sdk/configuration.rst.tmpl",
        include_str!("../resources/app/doc/sdk/configuration.rst.tmpl"),
    ),
    (
        "app/doc/sdk/index.rst.tmpl",
        include_str!("../resources/app/doc/sdk/index.rst.tmpl"),
    ),
    (
        "app/doc/sdk/installation.rst.tmpl",
        include_str!("../resources/app/doc/sdk/installation.rst.tmpl"),
    ),
    (
        "app/doc/sdk/overview.rst.tmpl",
        include_str!("../resources/app/doc/sdk/overview.rst.tmpl"),
    ),
    (
        "app/doc/sdk/running.rst.tmpl",
        include_str!("../resources/app/doc/sdk/running.rst.tmpl"),
    ),
    (
        "app/doc/sdk/sampleconfig.rst.tmpl",
        include_str!("../resources/app/doc/sdk/sampleconfig.rst.tmpl"),
    ),
    (
        "app/sample/basic/basic_sample.py.tmpl",
        include_str!("../resources/app/sample/basic/basic_sample.py.tmpl"),
    ),
    (
        "app/sample/basic/code/event.code.tmpl",
        include_str!("../resources/app/sample/basic/code/event.code.tmpl"),
    ),
    (
        "app/sample/basic/code/request.code.tmpl",
        include_str!("../resources/app/sample/basic/code/request.code.tmpl"),
    ),
    (
        "app/sample/common.py.tmpl",
        include_str!("../resources/app/sample/common.py.tmpl"),
    ),
    (
        "app/setup.py.tmpl",
        include_str!("../resources/app/setup.py.tmpl"),
    ),
    (
        "client/client/client.py.tmpl",
        include_str!("../resources/client/client/client.py.tmpl"),
    ),
    (
        "client/client/code/example_method.code.tmpl",
        include_str!("../resources/client/client/code/example_method.code.tmpl"),
    ),
    (
        "client/dist.py.tmpl",
        include_str!("../resources/client/dist.py.tmpl"),
    ),
    (
        "client/doc/sdk/index.rst.tmpl",
        include_str!("../resources/client/doc/sdk/index.rst.tmpl"),
    ),
    (
        "client/doc/sdk/installation.rst.tmpl",
        include_str!("../resources/client/doc/sdk/installation.rst.tmpl"),
    ),
    (
        "client/sample/basic/basic_sample.py.tmpl",
        include_str!("../resources/client/sample/basic/basic_sample.py.tmpl"),
    ),
    (
        "client/sample/basic/code/invoke_example_method.code.tmpl",
        include_str!("../resources/client/sample/basic/code/invoke_example_method.code.tmpl"),
    ),
];
