//! Reading the settings file and structured data files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn read_to_string(file_description: &str, path: &str) -> Result<String> {
    let mut content = String::new();
    get_reader(file_description, path)?
        .read_to_string(&mut content)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))?;
    Ok(content)
}

/// Loads settings from `settings_path`.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid YAML
/// for [`Settings`].
///
/// # Examples
///
/// ```
/// use termkit_core::file_handling::load_settings;
///
/// let settings = load_settings("/this/path/does/not/exist.yml")?;
/// assert_eq!(settings.date_layout, "%y%m%d");
/// # Ok::<(), termkit_core::error::Error>(())
/// ```
pub fn load_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        debug!("No settings file at {settings_path}, using defaults");
        return Ok(Settings::default());
    }

    debug!("Reading settings from {settings_path}");
    let content = read_to_string("settings", settings_path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )
    })
}

/// Reads a data file as YAML (which also accepts JSON) into `T`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse into `T`.
pub fn read_data_file<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content = read_to_string("data", path)?;
    serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml_error(
            "parsing".to_string(),
            "data".to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Reads the non-empty, trimmed lines of a text file.
pub fn read_lines(path: &str) -> Result<Vec<String>> {
    let content = read_to_string("list", path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    #[test]
    fn test_load_settings_file_not_exists() {
        let settings = load_settings("/this/path/does/not/exist.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_partial_file() {
        let temp_file = temp_file_with("date_layout: \"%Y-%m-%d\"\nindentation: \"  \"\n");
        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(settings.date_layout, "%Y-%m-%d");
        assert_eq!(settings.indentation, "  ");
        assert_eq!(settings.time_layout, "%H%M");
        assert!(settings.colors);
    }

    #[test]
    fn test_load_settings_empty_file() {
        let temp_file = temp_file_with("");
        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_with_palette() {
        let yaml_content = r#"
colors: true
palette:
  warn:
    name: magenta
  info:
    rgb: [10, 20, 30]
"#;
        let temp_file = temp_file_with(yaml_content);
        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        let palette = settings.palette.unwrap();
        assert_eq!(palette.warn.unwrap().name.as_deref(), Some("magenta"));
        assert_eq!(palette.info.unwrap().rgb, Some((10, 20, 30)));
        assert!(palette.fatal.is_none());
    }

    #[test]
    fn test_load_settings_invalid_yaml() {
        let temp_file = temp_file_with("invalid: yaml: content: [");
        let result = load_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_read_data_file_accepts_json() {
        let temp_file = temp_file_with(r#"{"name": "alpha", "size": 3}"#);
        let value: serde_json::Value = read_data_file(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(value["name"], "alpha");
        assert_eq!(value["size"], 3);
    }

    #[test]
    fn test_read_data_file_missing() {
        let result: Result<serde_json::Value> = read_data_file("/this/path/does/not/exist.yml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let temp_file = temp_file_with("alpha\n\n  beta  \n\ngamma\n");
        let lines = read_lines(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }
}
