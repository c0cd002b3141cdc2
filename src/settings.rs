//! Settings for reading stories.

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde_support", serde(default))]
/// Settings for how a story is read.
///
/// The default settings are lenient: reading never fails and problems with the text
/// are reported as warnings in the story [log][crate::Story::log].
pub struct ReadSettings {
    /// Fail on problems which are otherwise logged as warnings.
    ///
    /// Checks are made in order and the first failing one returns its error:
    ///  1. the content is empty or blank ([`ReadError::Empty`][crate::ReadError::Empty]),
    ///  2. there are no chapter headings ([`ReadError::NoChapters`][crate::ReadError::NoChapters]),
    ///  3. malformed chapter headings or choices, or choices before the first chapter
    ///     ([`ReadError::ParseError`][crate::ReadError::ParseError]),
    ///  4. choices linking to chapters which are not in the story
    ///     ([`ReadError::InvalidAddress`][crate::ReadError::InvalidAddress]).
    pub strict: bool,
    /// Remove a leading `#` from chapter ids, so that they are written like choice targets.
    pub strip_id_marker: bool,
}

impl ReadSettings {
    /// Settings with all strict checks enabled.
    pub fn strict() -> Self {
        ReadSettings {
            strict: true,
            ..Default::default()
        }
    }
}
