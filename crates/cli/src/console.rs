//! Colored console output.
//!
//! A [`Console`] owns its output stream, so tests can capture everything it
//! prints. Nothing is written with a trailing newline unless the message has one.

use std::fmt::Display;
use std::io::{stdout, Stdout, Write};

use termkit_core::config::Settings;
use termkit_core::error::{Error, Result};
use termkit_core::style::{Palette, Style};
use termkit_core::table::TableBuilder;

pub struct Console<W: Write> {
    out: W,
    debug: bool,
    colors: bool,
    palette: Palette,
}

impl Console<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            debug: false,
            colors: true,
            palette: Palette::default(),
        }
    }

    /// A console configured from the debug, colors and palette settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette contains an invalid color definition.
    pub fn from_settings(out: W, settings: &Settings) -> Result<Self> {
        Ok(Self::new(out)
            .debug_mode(settings.debug)
            .colors(settings.colors)
            .palette(settings.palette()?))
    }

    #[must_use]
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn current_palette(&self) -> &Palette {
        &self.palette
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Applies `style` unless colors are disabled.
    pub fn sprint(&self, style: &Style, msg: impl Display) -> String {
        let msg = msg.to_string();
        if self.colors {
            style.apply(&msg)
        } else {
            msg
        }
    }

    pub fn print(&mut self, style: &Style, msg: impl Display) -> Result<()> {
        let styled = self.sprint(style, msg);
        self.out.write_all(styled.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn text(&mut self, msg: impl Display) -> Result<()> {
        let style = self.palette.text.clone();
        self.print(&style, msg)
    }

    pub fn info(&mut self, msg: impl Display) -> Result<()> {
        let style = self.palette.info.clone();
        self.print(&style, msg)
    }

    pub fn warn(&mut self, msg: impl Display) -> Result<()> {
        let style = self.palette.warn.clone();
        self.print(&style, msg)
    }

    pub fn fail(&mut self, msg: impl Display) -> Result<()> {
        let style = self.palette.fatal.clone();
        self.print(&style, msg)
    }

    pub fn success(&mut self, msg: impl Display) -> Result<()> {
        let style = self.palette.success.clone();
        self.print(&style, msg)
    }

    /// Prints in the fatal style, only in debug mode.
    pub fn debug(&mut self, msg: impl Display) -> Result<()> {
        if !self.debug {
            return Ok(());
        }
        self.fail(msg)
    }

    /// An error carrying `msg` in the fatal style. Nothing is printed.
    pub fn error(&self, msg: impl Display) -> Error {
        Error::Misc(self.sprint(&self.palette.fatal, msg))
    }

    /// Prints `msg` in the fatal style and returns it as an error.
    pub fn fail_error(&mut self, msg: impl Display) -> Error {
        let msg = msg.to_string();
        if let Err(e) = self.fail(&msg) {
            return e;
        }
        Error::Misc(msg)
    }

    /// Success for positive values, text for zero, warn for negative values.
    #[must_use]
    pub fn conditional_style(&self, value: i64) -> &Style {
        match value {
            v if v > 0 => &self.palette.success,
            0 => &self.palette.text,
            _ => &self.palette.warn,
        }
    }

    pub fn print_conditional(&mut self, value: i64, msg: impl Display) -> Result<()> {
        let style = self.conditional_style(value).clone();
        self.print(&style, msg)
    }

    /// Style of a status word: `success`, `failed`, `none`, anything else warns.
    #[must_use]
    pub fn status_style(&self, status: &str) -> &Style {
        match status {
            "success" => &self.palette.success,
            "failed" => &self.palette.fatal,
            "none" => &self.palette.text,
            _ => &self.palette.warn,
        }
    }

    /// Writes a rendered table. Cell styles are dropped when colors are disabled.
    pub fn table<T, F>(&mut self, table: &TableBuilder<T, F>) -> Result<()>
    where
        F: Fn(&T, &str) -> (Style, String),
    {
        let rendered = if self.colors {
            table.build()
        } else {
            table.build_plain()
        };
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_console() -> Console<Vec<u8>> {
        Console::new(Vec::new()).palette(Palette::plain())
    }

    fn marked_palette() -> Palette {
        Palette {
            info: Style::new("i:{text}"),
            warn: Style::new("w:{text}"),
            fatal: Style::new("f:{text}"),
            success: Style::new("s:{text}"),
            text: Style::new("t:{text}"),
        }
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_semantic_output_uses_palette() {
        let mut console = Console::new(Vec::new()).palette(marked_palette());
        console.text("a").unwrap();
        console.info("b").unwrap();
        console.warn("c").unwrap();
        console.fail("d").unwrap();
        console.success("e").unwrap();
        assert_eq!(output(console), "t:ai:bw:cf:ds:e");
    }

    #[test]
    fn test_disabled_colors_print_verbatim() {
        let mut console = Console::new(Vec::new())
            .palette(marked_palette())
            .colors(false);
        console.warn("careful\n").unwrap();
        assert_eq!(output(console), "careful\n");
    }

    #[test]
    fn test_debug_only_in_debug_mode() {
        let mut console = plain_console();
        console.debug("hidden").unwrap();
        assert_eq!(output(console), "");

        let mut console = plain_console().debug_mode(true);
        console.debug("shown").unwrap();
        assert_eq!(output(console), "shown");
    }

    #[test]
    fn test_conditional_style() {
        let console = Console::new(Vec::new()).palette(marked_palette());
        assert_eq!(console.conditional_style(3).apply("x"), "s:x");
        assert_eq!(console.conditional_style(0).apply("x"), "t:x");
        assert_eq!(console.conditional_style(-1).apply("x"), "w:x");
    }

    #[test]
    fn test_print_conditional() {
        let mut console = Console::new(Vec::new()).palette(marked_palette());
        console.print_conditional(-5, "-5").unwrap();
        assert_eq!(output(console), "w:-5");
    }

    #[test]
    fn test_status_style() {
        let console = Console::new(Vec::new()).palette(marked_palette());
        assert_eq!(console.status_style("success").apply("x"), "s:x");
        assert_eq!(console.status_style("failed").apply("x"), "f:x");
        assert_eq!(console.status_style("none").apply("x"), "t:x");
        assert_eq!(console.status_style("running").apply("x"), "w:x");
    }

    #[test]
    fn test_error_is_styled_and_not_printed() {
        let console = Console::new(Vec::new()).palette(marked_palette());
        let error = console.error("boom");
        assert_eq!(error.to_string(), "f:boom");
        assert_eq!(output(console), "");
    }

    #[test]
    fn test_fail_error_prints_and_returns() {
        let mut console = Console::new(Vec::new()).palette(marked_palette());
        let error = console.fail_error("bad input");
        assert_eq!(error.to_string(), "bad input");
        assert_eq!(output(console), "f:bad input");
    }

    #[test]
    fn test_table_is_written_as_built() {
        let table = TableBuilder::<u8>::new().add_headers(["n"]).add_row(7);
        let mut console = plain_console();
        console.table(&table).unwrap();
        assert_eq!(output(console), table.build());
    }

    #[test]
    fn test_table_styles_dropped_without_colors() {
        let table = TableBuilder::<u8>::with_renderer(|n: &u8, _header: &str| {
            (Style::new("<{text}>"), n.to_string())
        })
        .add_headers(["n"])
        .add_row(7);

        let mut colored = Console::new(Vec::new());
        colored.table(&table).unwrap();
        assert_eq!(output(colored), "n\n-\n<7>\n");

        let mut uncolored = Console::new(Vec::new()).colors(false);
        uncolored.table(&table).unwrap();
        assert_eq!(output(uncolored), "n\n-\n7\n");
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            debug: true,
            colors: false,
            ..Settings::default()
        };
        let console = Console::from_settings(Vec::new(), &settings).unwrap();
        assert!(console.is_debug());
        assert_eq!(console.current_palette(), &Palette::plain());
    }
}
