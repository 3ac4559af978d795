//! Line-based prompts.
//!
//! Every prompt is printed through a [`Console`] and answered with one line of
//! input. When the input ends before an answer is read the prompt fails with
//! [`Error::InputClosed`].

use std::fmt::Display;
use std::io::{stdin, BufRead, StdinLock, Stdout, Write};
use std::str::FromStr;

use log::debug;
use termkit_core::error::{Error, Result};

use crate::console::Console;

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    console: Console<W>,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompts on stdout, reads answers from stdin.
    #[must_use]
    pub fn stdio(console: Console<Stdout>) -> Self {
        Self::new(stdin().lock(), console)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, console: Console<W>) -> Self {
        Self { input, console }
    }

    pub fn console(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks a yes/no question. Only `y` (any case) confirms.
    ///
    /// Blank lines are skipped; the first word of the next line is the answer.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.console.warn(format!("{prompt} (y/n): "))?;
        loop {
            let response = self.read_line()?;
            if let Some(answer) = response.split_whitespace().next() {
                return Ok(answer.eq_ignore_ascii_case("y"));
            }
        }
    }

    /// Asks for a number in `min..=max`.
    ///
    /// An empty answer returns `None`. So does an invalid answer, after telling
    /// the user why.
    pub fn choose_manual(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>> {
        self.console.warn(format!("{prompt}: "))?;
        let response = self.read_line()?;

        if response.trim().is_empty() {
            debug!("Empty answer to `{prompt}`");
            return Ok(None);
        }

        match response.trim().parse::<i64>() {
            Ok(choice) if (min..=max).contains(&choice) => Ok(Some(choice)),
            _ => {
                self.console.fail(format!("invalid input: {response}\n\n"))?;
                Ok(None)
            }
        }
    }

    /// Asks for a required value. An empty answer takes `default`; the prompt
    /// repeats while the result would be empty.
    pub fn prompt_string(&mut self, prompt: &str, default: &str) -> Result<String> {
        loop {
            let value = self.prompt_string_optional(prompt, default)?;
            if !value.trim().is_empty() {
                return Ok(value);
            }
            self.console.fail("value required\n")?;
        }
    }

    /// Asks for a value that may be empty. An empty answer takes `default`.
    pub fn prompt_string_optional(&mut self, prompt: &str, default: &str) -> Result<String> {
        self.console.warn(format!("{prompt} ({default}): "))?;
        let response = self.read_line()?;
        if response.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(response.trim().to_string())
        }
    }

    pub fn prompt_int(&mut self, prompt: &str, default: i64) -> Result<i64> {
        self.prompt_parsed(prompt, default)
    }

    pub fn prompt_float(&mut self, prompt: &str, default: f64) -> Result<f64> {
        self.prompt_parsed(prompt, default)
    }

    /// Repeats the prompt until the answer parses. An empty answer takes `default`.
    fn prompt_parsed<T>(&mut self, prompt: &str, default: T) -> Result<T>
    where
        T: FromStr + Display + Copy,
    {
        loop {
            self.console.warn(format!("{prompt} ({default}): "))?;
            let response = self.read_line()?;
            let trimmed = response.trim();
            if trimmed.is_empty() {
                return Ok(default);
            }
            match trimmed.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.console.fail(format!("invalid input: {trimmed}\n"))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use termkit_core::style::Palette;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        let console = Console::new(Vec::new()).palette(Palette::plain());
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), console)
    }

    fn printed(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_console().into_inner()).unwrap()
    }

    #[test]
    fn test_confirm() {
        assert!(prompter("y\n").confirm("Delete?").unwrap());
        assert!(prompter("Y\n").confirm("Delete?").unwrap());
        assert!(!prompter("yes\n").confirm("Delete?").unwrap());
        assert!(!prompter("n\n").confirm("Delete?").unwrap());
    }

    #[test]
    fn test_confirm_skips_blank_lines() {
        let mut p = prompter("\n  \ny\n");
        assert!(p.confirm("Delete?").unwrap());
        assert_eq!(printed(p), "Delete? (y/n): ");
        assert!(matches!(
            prompter("\n\n").confirm("Delete?"),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn test_confirm_prints_prompt() {
        let mut p = prompter("n\n");
        p.confirm("Delete?").unwrap();
        assert_eq!(printed(p), "Delete? (y/n): ");
    }

    #[test]
    fn test_confirm_closed_input() {
        assert!(matches!(
            prompter("").confirm("Delete?"),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn test_choose_manual_valid() {
        assert_eq!(prompter("3\n").choose_manual("Pick", 1, 5).unwrap(), Some(3));
    }

    #[test]
    fn test_choose_manual_empty_is_abort() {
        let mut p = prompter("\n");
        assert_eq!(p.choose_manual("Pick", 1, 5).unwrap(), None);
        assert_eq!(printed(p), "Pick: ");
    }

    #[test]
    fn test_choose_manual_invalid() {
        let mut p = prompter("abc\n");
        assert_eq!(p.choose_manual("Pick", 1, 5).unwrap(), None);
        assert_eq!(printed(p), "Pick: invalid input: abc\n\n");

        let mut p = prompter("9\n");
        assert_eq!(p.choose_manual("Pick", 1, 5).unwrap(), None);
        assert!(printed(p).ends_with("invalid input: 9\n\n"));
    }

    #[test]
    fn test_prompt_string_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(p.prompt_string("Name", "bob").unwrap(), "bob");
        assert_eq!(printed(p), "Name (bob): ");
    }

    #[test]
    fn test_prompt_string_repeats_until_value() {
        let mut p = prompter("\n   \nalice\n");
        assert_eq!(p.prompt_string("Name", "").unwrap(), "alice");
        assert_eq!(printed(p).matches("value required").count(), 2);
    }

    #[test]
    fn test_prompt_string_optional_allows_empty() {
        assert_eq!(
            prompter("\n").prompt_string_optional("Note", "").unwrap(),
            ""
        );
        assert_eq!(
            prompter("  hi  \n")
                .prompt_string_optional("Note", "")
                .unwrap(),
            "hi"
        );
    }

    #[test]
    fn test_prompt_int() {
        assert_eq!(prompter("\n").prompt_int("Count", 4).unwrap(), 4);
        assert_eq!(prompter("-12\n").prompt_int("Count", 4).unwrap(), -12);

        let mut p = prompter("four\n5\n");
        assert_eq!(p.prompt_int("Count", 4).unwrap(), 5);
        assert!(printed(p).contains("invalid input: four\n"));
    }

    #[test]
    fn test_prompt_float() {
        assert_eq!(prompter("2.5\n").prompt_float("Hours", 8.0).unwrap(), 2.5);
        assert_eq!(prompter("\n").prompt_float("Hours", 8.0).unwrap(), 8.0);
    }

    #[test]
    fn test_prompt_int_closed_input() {
        assert!(matches!(
            prompter("x\n").prompt_int("Count", 1),
            Err(Error::InputClosed)
        ));
    }
}
