//! Errors from validating choice targets in stories that were successfully read.

use std::{error::Error, fmt};

use crate::error::utils::{write_line_information, MetaData};

#[derive(Clone, Debug, PartialEq)]
/// A choice links to a chapter id that no chapter in the story has.
pub struct InvalidAddressError {
    /// Target chapter id of the choice, as written after the anchor marker.
    pub target: String,
    /// Title of the chapter which contains the choice.
    pub chapter_title: String,
    /// Information about the origin of the choice line.
    pub meta_data: MetaData,
}

impl Error for InvalidAddressError {}

impl fmt::Display for InvalidAddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_line_information(f, &self.meta_data)?;

        write!(
            f,
            "Invalid address: choice in chapter '{}' links to '{}' which is not a chapter in \
             the story",
            self.chapter_title, self.target
        )
    }
}
