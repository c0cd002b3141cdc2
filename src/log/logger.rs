use crate::{
    error::MetaData,
    log::{LogMessage, Warning},
};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Non-fatal messages collected while reading a story.
pub struct Logger {
    /// Non-fatal errors found in the story text.
    pub warnings: Vec<LogMessage>,
}

impl Logger {
    pub(crate) fn add_warning(&mut self, warning: Warning, meta_data: &MetaData) {
        self.warnings
            .push(LogMessage::with_warning(warning, meta_data));
    }

    /// Sort warnings by the line they were found at.
    ///
    /// Warnings from validation are added after parsing is done, which puts them
    /// out of order with the line warnings. The sort is stable.
    pub(crate) fn sort(&mut self) {
        self.warnings
            .sort_by_key(|message| message.meta_data.line_index);
    }

    /// Whether or not any warnings were logged.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of logged warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Create an iterator over the log items.
    ///
    /// The iterator visits the messages in the order of their line numbers.
    pub fn iter(&self) -> std::slice::Iter<LogMessage> {
        self.warnings.iter()
    }
}

impl<'a> IntoIterator for &'a Logger {
    type Item = &'a LogMessage;
    type IntoIter = std::slice::Iter<'a, LogMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
