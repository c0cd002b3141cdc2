//! Error type from parsing lines into a story.

use std::{
    error::Error,
    fmt::{self, Write},
};

use crate::error::parse::line::LineError;

impl Error for ParseError {}

#[derive(Clone, Debug, PartialEq)]
/// List of errors encountered when parsing lines of a story.
pub struct ParseError {
    /// Errors from individual lines, in the order of the lines.
    pub line_errors: Vec<LineError>,
}

/// Get a string containing all line errors encountered when parsing a story.
pub(crate) fn print_parse_error(error: &ParseError) -> Result<String, fmt::Error> {
    let mut buffer = String::new();

    for line_error in &error.line_errors {
        write!(&mut buffer, "{}\n", line_error)?;
    }

    Ok(buffer)
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Could not parse story: found {} errors in lines.",
            self.line_errors.len()
        )
    }
}
