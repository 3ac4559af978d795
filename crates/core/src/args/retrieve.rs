use log::debug;

use crate::error::{Error, Result};

/// A function turning one argument into a value.
pub type Parser<'a, T> = Box<dyn Fn(&str) -> Result<T> + 'a>;

/// Parsers and an optional default for one argument.
pub struct Retrieval<'a, T> {
    parsers: Vec<Parser<'a, T>>,
    default: Option<T>,
}

impl<'a, T> Retrieval<'a, T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            default: None,
        }
    }

    /// Registers a parser; parsers are tried in registration order.
    #[must_use]
    pub fn parser(mut self, parser: impl Fn(&str) -> Result<T> + 'a) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Value returned when the argument is not supplied.
    #[must_use]
    pub fn default_value(mut self, default: Option<T>) -> Self {
        self.default = default;
        self
    }
}

impl<T> Default for Retrieval<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the argument at `index`.
///
/// # Errors
///
/// Returns:
/// - [`Error::NoParsers`] if no parser is registered
/// - [`Error::MissingArgument`] if the index is out of range and there is no default
/// - the error of the last parser if every parser fails
pub fn retrieve<T>(args: &[String], index: usize, retrieval: Retrieval<'_, T>) -> Result<T> {
    if retrieval.parsers.is_empty() {
        return Err(Error::NoParsers);
    }

    let Some(expression) = args.get(index) else {
        return retrieval.default.ok_or(Error::MissingArgument(index));
    };

    let mut last_error = Error::NoParsers;
    for parser in &retrieval.parsers {
        match parser(expression) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("Parser rejected argument {index} `{expression}`: {e}");
                last_error = e;
            }
        }
    }

    Err(last_error)
}
