//! Style templates and the color palette.
//!
//! A [`Style`] is a template with a single `{text}` placeholder. Rendering
//! substitutes the (already padded) text into the template, so terminal escape
//! sequences never count towards the width of a table column.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crossterm::style::{Color, ContentStyle, Stylize};
use leon::Template;

/// Name of the placeholder a template substitutes text into.
pub const PLACEHOLDER: &str = "text";

const PLAIN_TEMPLATE: &str = "{text}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    template: String,
}

impl Style {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The pass-through style, renders text verbatim.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(PLAIN_TEMPLATE)
    }

    /// Bold text in the given foreground color.
    #[must_use]
    pub fn colored(color: Color) -> Self {
        Self::from_content_style(ContentStyle::new().with(color).bold())
    }

    #[must_use]
    pub fn from_content_style(style: ContentStyle) -> Self {
        Self::new(style.apply(PLAIN_TEMPLATE).to_string())
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.template == PLAIN_TEMPLATE
    }

    /// Substitutes `text` into the template.
    ///
    /// A template that does not parse, or that has no `{text}` placeholder, is
    /// returned literally.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let Ok(template) = Template::parse(&self.template) else {
            return self.template.clone();
        };

        if !template.has_key(PLACEHOLDER) {
            return self.template.clone();
        }

        let values: HashMap<&str, &str> = HashMap::from([(PLACEHOLDER, text)]);
        template
            .render(&values)
            .unwrap_or_else(|_| self.template.clone())
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::plain()
    }
}

impl Display for Style {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.template)
    }
}

/// Semantic styles used by console output and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub info: Style,
    pub warn: Style,
    pub fatal: Style,
    pub success: Style,
    pub text: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: Style::colored(Color::Blue),
            warn: Style::colored(Color::Yellow),
            fatal: Style::colored(Color::Red),
            success: Style::colored(Color::Green),
            text: Style::colored(Color::White),
        }
    }
}

impl Palette {
    /// A palette where every style renders verbatim.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            info: Style::plain(),
            warn: Style::plain(),
            fatal: Style::plain(),
            success: Style::plain(),
            text: Style::plain(),
        }
    }
}
