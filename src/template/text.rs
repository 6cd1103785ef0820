//! Text snippets computed from package properties
//!
//! These fill placeholders whose content depends on lists (requirements,
//! language versions) rather than on a single configuration value.

use crate::config::section::DEFAULT_LANGUAGE_VERSION;
use crate::config::UNIVERSAL_LANGUAGE_VERSION;

const UNIVERSAL_LANGUAGE_REQUIRES: &str = ">=2.7.9,!=3.0.*,!=3.1.*,!=3.2.*,!=3.3.*";
const UNIVERSAL_CLASSIFIER_VERSIONS: [&str; 6] = ["2", "2.7", "3", "3.4", "3.5", "3.6"];
const CLASSIFIER_BASE: &str = "\"Programming Language :: Python";
const LIST_LINE_START: &str = "\n        ";
const OS_TEXT: &str = " installed within a Windows or Linux environment.";

fn is_universal(versions: &[String]) -> bool {
    versions.iter().any(|v| v == UNIVERSAL_LANGUAGE_VERSION)
}

fn only_major_two(versions: &[String]) -> bool {
    versions.last().is_some_and(|v| v.starts_with('2'))
}

/// A line of `ch` as long as `text` (in characters)
pub fn underline(text: &str, ch: char) -> String {
    std::iter::repeat(ch).take(text.chars().count()).collect()
}

/// Entries of the `install_requires` list in `setup.py`
pub fn install_requires(requires: &[String]) -> String {
    requires
        .iter()
        .enumerate()
        .map(|(i, req)| {
            let separator = if i == 0 { "" } else { "," };
            format!("{}{}\"{}\"", separator, LIST_LINE_START, req)
        })
        .collect()
}

/// `RUN pip install` lines for the Dockerfile
pub fn pip_install(requires: &[String]) -> String {
    requires
        .iter()
        .map(|req| format!("RUN pip install \"{}\"", req))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop the patch component of an `X.Y.Z` version
pub fn remove_z_version(version: &str) -> &str {
    if version.matches('.').count() == 2 {
        version.rsplit_once('.').map_or(version, |(xy, _)| xy)
    } else {
        version
    }
}

fn wheel_tags(versions: &[String]) -> String {
    versions
        .iter()
        .map(|v| format!("py{}", remove_z_version(v).replace('.', "")))
        .collect::<Vec<_>>()
        .join(".")
}

/// Arguments tagging the wheel built by `setup.py bdist_wheel`
pub fn dist_version_tag(versions: &[String]) -> String {
    if is_universal(versions) {
        "\"--universal\"".to_string()
    } else {
        format!("\"--python-tag\", \"{}\"", wheel_tags(versions))
    }
}

/// Version tag part of the wheel file name (e.g. `py2.py3`)
pub fn wheel_tag(versions: &[String]) -> String {
    if is_universal(versions) {
        "py2.py3".to_string()
    } else {
        wheel_tags(versions)
    }
}

/// Value of `python_requires` in `setup.py`
pub fn language_requires(versions: &[String]) -> String {
    if is_universal(versions) {
        return UNIVERSAL_LANGUAGE_REQUIRES.to_string();
    }
    let oldest = versions
        .first()
        .map_or(DEFAULT_LANGUAGE_VERSION, String::as_str);
    let mut requires = format!(">={}", oldest);
    if only_major_two(versions) {
        requires.push_str(",<3");
    }
    requires
}

/// Language classifiers for `setup.py`
pub fn classifiers(versions: &[String]) -> String {
    let listed: Vec<&str> = if is_universal(versions) {
        UNIVERSAL_CLASSIFIER_VERSIONS.to_vec()
    } else {
        versions.iter().map(String::as_str).collect()
    };

    let mut lines = vec![format!("{}{}\"", LIST_LINE_START, CLASSIFIER_BASE)];
    lines.extend(listed.into_iter().map(|version| {
        format!(
            "{}{} :: {}\"",
            LIST_LINE_START,
            CLASSIFIER_BASE,
            remove_z_version(version)
        )
    }));
    lines.join(",")
}

/// Language version of the Docker base image
pub fn docker_language_version(versions: &[String]) -> String {
    let version = match versions.first() {
        Some(first) if !is_universal(versions) => first.as_str(),
        _ => DEFAULT_LANGUAGE_VERSION,
    };
    remove_z_version(version).to_string()
}

/// Supported versions sentence for the installation docs
pub fn installation_version_text(versions: &[String]) -> String {
    if is_universal(versions) {
        return format!(
            "2.7.9 or higher in the Python 2.x series or \
             3.4.0 or higher in the Python 3.x series{}",
            OS_TEXT
        );
    }

    let mut text = match versions {
        [] => String::new(),
        [only] => format!("{} or higher", only),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    };
    text.push_str(OS_TEXT);
    if only_major_two(versions) {
        text.push_str(" (Python 3 is not supported at this time)");
    }
    text
}

/// Boolean literal in the generated code
pub fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
