//! Main error type from reading stories.

use std::{
    error::Error,
    fmt::{self, Write},
};

use crate::error::parse::{
    address::InvalidAddressError,
    parse::{print_parse_error, ParseError},
};

#[derive(Clone, Debug, PartialEq)]
/// Errors from reading a story.
///
/// Only returned when reading with [strict settings][crate::ReadSettings::strict].
/// A full print out of all individual errors can be made through
/// [`print_read_error`][crate::error::print_read_error].
pub enum ReadError {
    /// Attempted to construct a story from an empty or blank string.
    Empty,
    /// The content had no chapter heading lines.
    NoChapters,
    /// Encountered one or more malformed lines while parsing.
    ParseError(ParseError),
    /// One or more choices link to chapters that are not in the story.
    InvalidAddress(Vec<InvalidAddressError>),
}

/// Get a string containing all errors encountered while reading a story.
///
/// The errors are printed one per line along with the line they were found in.
pub fn print_read_error(error: &ReadError) -> Result<String, fmt::Error> {
    match &error {
        ReadError::ParseError(parse_error) => print_parse_error(parse_error),
        ReadError::InvalidAddress(errors) => {
            let mut buffer = String::new();

            for err in errors {
                write!(&mut buffer, "{}\n", err)?;
            }

            Ok(buffer)
        }
        _ => Ok(format!("{}\n", error)),
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            ReadError::ParseError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ReadError::*;

        match self {
            Empty => write!(f, "Could not parse story: no content was available"),
            NoChapters => write!(
                f,
                "Could not parse story: no chapter headings were found"
            ),
            ParseError(err) => write!(f, "{}", err),
            InvalidAddress(errors) => write!(
                f,
                "Could not validate story: found {} choices linking to unknown chapters",
                errors.len()
            ),
        }
    }
}

impl_from_error![
    ReadError;
    [ParseError, ParseError]
];

impl From<Vec<InvalidAddressError>> for ReadError {
    fn from(errors: Vec<InvalidAddressError>) -> Self {
        ReadError::InvalidAddress(errors)
    }
}
