//! Color definitions read from the settings file.

use crossterm::style::Color;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::style::{Palette, Style};

/// One color, given as exactly one of an RGB triple, an ANSI value or a name.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

impl ColorDefinition {
    /// Converts to a terminal color. An empty definition yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MultipleColorTypes`] if more than one field is set, or
    /// [`Error::UnknownColorName`] for a name crossterm does not know.
    pub fn to_color(&self) -> Result<Option<Color>> {
        match (self.rgb, self.ansi, &self.name) {
            (None, None, None) => Ok(None),
            (Some((r, g, b)), None, None) => Ok(Some(Color::Rgb { r, g, b })),
            (None, Some(ansi), None) => Ok(Some(Color::AnsiValue(ansi))),
            (None, None, Some(name)) => named_color(name).map(Some),
            _ => Err(Error::MultipleColorTypes),
        }
    }
}

fn named_color(name: &str) -> Result<Color> {
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "darkgrey" => Color::DarkGrey,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" => Color::Grey,
        _ => return Err(Error::UnknownColorName(name.to_string())),
    };
    Ok(color)
}

/// Overrides for the semantic colors; unset entries keep their default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PaletteDefinition {
    pub info: Option<ColorDefinition>,
    pub warn: Option<ColorDefinition>,
    pub fatal: Option<ColorDefinition>,
    pub success: Option<ColorDefinition>,
    pub text: Option<ColorDefinition>,
}

impl PaletteDefinition {
    pub fn to_palette(&self) -> Result<Palette> {
        let defaults = Palette::default();
        Ok(Palette {
            info: override_style(&self.info, defaults.info)?,
            warn: override_style(&self.warn, defaults.warn)?,
            fatal: override_style(&self.fatal, defaults.fatal)?,
            success: override_style(&self.success, defaults.success)?,
            text: override_style(&self.text, defaults.text)?,
        })
    }
}

fn override_style(definition: &Option<ColorDefinition>, fallback: Style) -> Result<Style> {
    let color = match definition {
        Some(definition) => definition.to_color()?,
        None => None,
    };
    Ok(color.map_or(fallback, Style::colored))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> ColorDefinition {
        ColorDefinition {
            name: Some(name.to_string()),
            ..ColorDefinition::default()
        }
    }

    #[test]
    fn test_each_color_kind() {
        let rgb = ColorDefinition {
            rgb: Some((1, 2, 3)),
            ..ColorDefinition::default()
        };
        assert_eq!(rgb.to_color().unwrap(), Some(Color::Rgb { r: 1, g: 2, b: 3 }));

        let ansi = ColorDefinition {
            ansi: Some(208),
            ..ColorDefinition::default()
        };
        assert_eq!(ansi.to_color().unwrap(), Some(Color::AnsiValue(208)));

        assert_eq!(named("DarkCyan").to_color().unwrap(), Some(Color::DarkCyan));
        assert_eq!(ColorDefinition::default().to_color().unwrap(), None);
    }

    #[test]
    fn test_multiple_color_types_rejected() {
        let definition = ColorDefinition {
            rgb: Some((0, 0, 0)),
            ansi: Some(1),
            name: None,
        };
        assert!(matches!(
            definition.to_color(),
            Err(Error::MultipleColorTypes)
        ));
    }

    #[test]
    fn test_unknown_color_name() {
        match named("octarine").to_color() {
            Err(Error::UnknownColorName(name)) => assert_eq!(name, "octarine"),
            _ => panic!("Expected UnknownColorName"),
        }
    }

    #[test]
    fn test_palette_overrides_only_defined_entries() {
        let definition = PaletteDefinition {
            warn: Some(named("magenta")),
            ..PaletteDefinition::default()
        };
        let palette = definition.to_palette().unwrap();
        let defaults = Palette::default();

        assert_eq!(palette.warn, Style::colored(Color::Magenta));
        assert_eq!(palette.info, defaults.info);
        assert_eq!(palette.fatal, defaults.fatal);
    }

    #[test]
    fn test_palette_with_bad_color_fails() {
        let definition = PaletteDefinition {
            text: Some(named("nope")),
            ..PaletteDefinition::default()
        };
        assert!(definition.to_palette().is_err());
    }
}
