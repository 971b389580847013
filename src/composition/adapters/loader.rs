//! Configuration file loading.

use crate::composition::domain::Configuration;
use crate::error::ConfigurationError;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;
use tracing::debug;

/// Reads a configuration file.
///
/// Files with a `.json` extension are parsed as JSON; everything else is
/// parsed as YAML, which preserves declaration order.
///
/// # Errors
///
/// Returns [`ConfigurationError::Unreadable`] when the file cannot be read
/// and parse or validation errors from [`Configuration`] otherwise.
pub fn load_configuration(path: &Utf8Path) -> Result<Configuration, ConfigurationError> {
    let file_name = path.file_name().ok_or_else(|| {
        ConfigurationError::unreadable(
            path.as_str(),
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| ConfigurationError::unreadable(path.as_str(), err))?;
    let text = dir
        .read_to_string(file_name)
        .map_err(|err| ConfigurationError::unreadable(path.as_str(), err))?;
    debug!(%path, bytes = text.len(), "read configuration file");

    if path.extension() == Some("json") {
        let document = serde_json::from_str(&text).map_err(ConfigurationError::parse)?;
        return Configuration::from_json_value(document);
    }
    Configuration::from_yaml_str(&text)
}
