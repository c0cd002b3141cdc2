//! Errors from parsing individual lines in stories.

use std::{error::Error, fmt};

use crate::{
    consts::{CHAPTER_MARKER, CHOICE_MARKER},
    error::utils::{write_line_information, MetaData},
};

#[derive(Clone, Debug, PartialEq)]
/// Error from parsing individual lines in a story.
pub struct LineError {
    /// Line that caused the error.
    pub line: String,
    /// Kind of error.
    pub kind: LineErrorKind,
    /// Information about the origin of the line that caused this error.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
/// Variants of line errors.
pub enum LineErrorKind {
    /// Line starts with the chapter marker but is not on the form `# Title {id}`,
    /// with an optional single `!` after the id.
    InvalidChapterHeading,
    /// Line starts like a choice but is not on the form `- [text](#id)`.
    InvalidChoice,
    /// A choice was found before the first chapter heading.
    OrphanChoice,
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

impl Error for LineErrorKind {}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_line_information(f, &self.meta_data)?;
        write!(f, "{} (line was: '{}')", self.kind, self.line)
    }
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use LineErrorKind::*;

        match self {
            InvalidChapterHeading => write!(
                f,
                "line starts with '{}' but is not a chapter heading of the form \
                 '# Title {{id}}' or '# Title {{id}} !'",
                CHAPTER_MARKER.trim()
            ),
            InvalidChoice => write!(
                f,
                "line starts with '{}' but is not a choice of the form '- [text](#id)'",
                CHOICE_MARKER
            ),
            OrphanChoice => write!(
                f,
                "found a choice before the first chapter heading: there is no chapter to \
                 attach it to"
            ),
        }
    }
}
