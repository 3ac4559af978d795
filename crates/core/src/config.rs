//! Settings for termkit tools.
//!
//! Settings are read from an optional YAML file. Every field has a default, so
//! a missing file or a partial file is fine.

use serde::Deserialize;

use crate::colors::PaletteDefinition;
use crate::datetime::{DATE_INPUT_LAYOUT, DATE_TIME_INPUT_LAYOUT, TIME_INPUT_LAYOUT};
use crate::error::Result;
use crate::style::Palette;
use crate::table::TableConfig;

/// Default path for the settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.termkit/settings.yml";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use termkit_core::config::get_settings_path;
///
/// let default_path = get_settings_path(None);
/// assert!(default_path.ends_with("settings.yml"));
///
/// let custom_path = get_settings_path(Some("/etc/termkit.yml"));
/// assert_eq!(custom_path, "/etc/termkit.yml");
/// ```
pub fn get_settings_path(settings_path_arg: Option<&str>) -> String {
    let settings_path = settings_path_arg.unwrap_or(DEFAULT_SETTINGS_PATH);
    shellexpand::tilde(settings_path).to_string()
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// `chrono` layout of absolute dates.
    pub date_layout: String,
    /// `chrono` layout of times of day.
    pub time_layout: String,
    /// `chrono` layout of absolute date-times.
    pub date_time_layout: String,
    pub debug: bool,
    /// Disables every escape sequence when false.
    pub colors: bool,
    /// Prefix of every table line.
    pub indentation: String,
    pub palette: Option<PaletteDefinition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_layout: DATE_INPUT_LAYOUT.to_string(),
            time_layout: TIME_INPUT_LAYOUT.to_string(),
            date_time_layout: DATE_TIME_INPUT_LAYOUT.to_string(),
            debug: false,
            colors: true,
            indentation: String::new(),
            palette: None,
        }
    }
}

impl Settings {
    /// The palette to print with: plain without colors, else defaults with overrides.
    pub fn palette(&self) -> Result<Palette> {
        if !self.colors {
            return Ok(Palette::plain());
        }
        match &self.palette {
            Some(definition) => definition.to_palette(),
            None => Ok(Palette::default()),
        }
    }

    #[must_use]
    pub fn table_config(&self) -> TableConfig {
        TableConfig {
            hide_headers: false,
            indentation: self.indentation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorDefinition;
    use crate::style::Style;
    use crossterm::style::Color;

    #[test]
    fn test_get_settings_path_with_none() {
        let result = get_settings_path(None);
        assert!(result.ends_with(".termkit/settings.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_settings_path_with_tilde() {
        let result = get_settings_path(Some("~/other.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("other.yml"));
    }

    #[test]
    fn test_default_layouts() {
        let settings = Settings::default();
        assert_eq!(settings.date_layout, "%y%m%d");
        assert_eq!(settings.time_layout, "%H%M");
        assert_eq!(settings.date_time_layout, "%y%m%d %H%M");
        assert!(settings.colors);
    }

    #[test]
    fn test_palette_without_colors_is_plain() {
        let settings = Settings {
            colors: false,
            palette: Some(PaletteDefinition {
                info: Some(ColorDefinition {
                    name: Some("red".to_string()),
                    ..ColorDefinition::default()
                }),
                ..PaletteDefinition::default()
            }),
            ..Settings::default()
        };
        assert_eq!(settings.palette().unwrap(), Palette::plain());
    }

    #[test]
    fn test_palette_applies_overrides() {
        let settings = Settings {
            palette: Some(PaletteDefinition {
                info: Some(ColorDefinition {
                    ansi: Some(33),
                    ..ColorDefinition::default()
                }),
                ..PaletteDefinition::default()
            }),
            ..Settings::default()
        };
        let palette = settings.palette().unwrap();
        assert_eq!(palette.info, Style::colored(Color::AnsiValue(33)));
        assert_eq!(palette.success, Palette::default().success);
    }

    #[test]
    fn test_table_config_uses_indentation() {
        let settings = Settings {
            indentation: "  ".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.table_config().indentation, "  ");
        assert!(!settings.table_config().hide_headers);
    }
}
