use itertools::Itertools;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing arg at index {}", .0)]
    MissingArgument(usize),

    #[error("no parsers provided")]
    NoParsers,

    #[error("at least {} args required, got {}", .required, .actual)]
    NotEnoughArguments { required: usize, actual: usize },

    #[error("invalid integer `{}`: {}", .expression, .original)]
    InvalidInteger {
        expression: String,
        original: std::num::ParseIntError,
    },

    #[error("cannot parse `{}` with layout `{}`: {}", .expression, .layout, .original)]
    InvalidDate {
        expression: String,
        layout: String,
        original: chrono::ParseError,
    },

    #[error("invalid date expression: {}", .0)]
    InvalidDateExpression(String),

    #[error("invalid duration: {}", .0)]
    InvalidDuration(String),

    #[error("no item found for expression [{}]", .0)]
    NoItemFound(String),

    #[error("selection aborted")]
    SelectionAborted,

    #[error("input stream closed before a response was read")]
    InputClosed,

    #[error("batch error: [{}]", .0.iter().join(", "))]
    Batch(Vec<Error>),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("JSON error: {}", .0)]
    Json(#[from] serde_json::Error),

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("{}", .0)]
    Misc(String),
}

impl Error {
    pub fn invalid_integer(expression: &str, original: std::num::ParseIntError) -> Self {
        Self::InvalidInteger {
            expression: expression.to_string(),
            original,
        }
    }

    pub fn invalid_date(expression: &str, layout: &str, original: chrono::ParseError) -> Self {
        Self::InvalidDate {
            expression: expression.to_string(),
            layout: layout.to_string(),
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_lists_every_error() {
        let error = Error::Batch(vec![Error::MissingArgument(0), Error::NoParsers]);
        assert_eq!(
            error.to_string(),
            "batch error: [missing arg at index 0, no parsers provided]"
        );
    }

    #[test]
    fn test_invalid_integer_mentions_expression() {
        let original = "abc".parse::<i64>().unwrap_err();
        let error = Error::invalid_integer("abc", original);
        assert!(error.to_string().starts_with("invalid integer `abc`"));
    }
}
