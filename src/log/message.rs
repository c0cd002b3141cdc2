use crate::error::MetaData;

use std::fmt;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Log message with additional information.
pub struct LogMessage {
    /// Logged warning.
    pub warning: Warning,
    /// Information of where the message originated from.
    pub meta_data: MetaData,
}

impl LogMessage {
    pub(crate) fn with_warning(warning: Warning, meta_data: &MetaData) -> Self {
        LogMessage {
            warning,
            meta_data: meta_data.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// A detected non-fatal error in the story text.
///
/// Every warning corresponds to something that is rejected when reading with
/// [strict settings][crate::ReadSettings::strict].
pub enum Warning {
    /// A line started with the chapter marker but did not match the heading pattern.
    ///
    /// The chapter is still opened, but with an empty title and id.
    InvalidChapterHeading { line: String },
    /// A line started like a choice but did not match the choice pattern. It was ignored.
    InvalidChoice { line: String },
    /// A choice was found before the first chapter heading. It was dropped.
    OrphanChoice { text: String },
    /// A choice links to a chapter id which no chapter in the story has.
    UnknownChoiceTarget { target: String },
    /// A third (or later) front matter line replaced the author.
    AuthorOverwritten { previous: String },
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] WARNING: {}", self.meta_data, self.warning)
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Warning::*;

        match self {
            InvalidChapterHeading { line } => write!(
                f,
                "could not read title and id from chapter heading '{}': opened a chapter \
                 without them (a dead end is marked with a single '!')",
                line
            ),
            InvalidChoice { line } => write!(f, "ignored malformed choice '{}'", line),
            OrphanChoice { text } => write!(
                f,
                "dropped choice '{}' which comes before the first chapter",
                text
            ),
            UnknownChoiceTarget { target } => {
                write!(f, "choice links to unknown chapter '{}'", target)
            }
            AuthorOverwritten { previous } => write!(
                f,
                "more than two front matter lines: replaced author '{}'",
                previous
            ),
        }
    }
}
