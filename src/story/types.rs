//! Data types of a parsed story.

use crate::{error::MetaData, log::Logger, story::utils::strip_anchor_marker};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Story with metadata and an ordered set of chapters.
///
/// # Examples
/// ```
/// # use pathbook::read_story_from_string;
/// let content = "\
/// % The Cellar
/// % A. Nonymous
///
/// ## You stand at the top of the stairs. {#stairs}
///
/// - [go down](#cellar)
///
/// ## It is dark. You are eaten by a grue. {#cellar} !
/// ";
///
/// let story = read_story_from_string(content).unwrap();
///
/// let start = story.first_chapter().unwrap();
/// let next = story.follow(&start.choices[0]).unwrap();
///
/// assert!(next.is_dead_end);
/// ```
pub struct Story {
    /// Title from the first front matter line. Empty if there was none.
    pub title: String,
    /// Author from the second front matter line. Empty if there was none.
    pub author: String,
    /// Chapters in the order they appear in the text.
    ///
    /// The first chapter is the entry point of the story.
    pub chapters: Vec<Chapter>,
    /// Warnings from reading the story.
    #[cfg_attr(feature = "serde_support", serde(skip))]
    pub log: Logger,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Single node of a story, with narrative text and choices leading to other chapters.
pub struct Chapter {
    /// Title from the chapter heading. May be empty if the heading could not be read.
    pub title: String,
    /// Identifier of the chapter, as written in the heading between the braces.
    ///
    /// Note that this includes the leading `#` if the author wrote one, unless the story
    /// was read with [`strip_id_marker`][crate::ReadSettings::strip_id_marker] set.
    /// [`Story::get_chapter`] disregards the marker.
    pub id: String,
    /// Narrative text between the heading and the next chapter, with line breaks kept.
    pub body: String,
    /// Whether the chapter is marked as an ending.
    pub is_dead_end: bool,
    /// Choices of the chapter, in the order they appear in the text.
    pub choices: Vec<Choice>,
    /// Information about the heading line which opened the chapter.
    pub meta_data: MetaData,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_support", derive(Deserialize, Serialize))]
/// Choice presented to the reader, leading to another chapter.
pub struct Choice {
    /// Text to present the choice with.
    pub text: String,
    /// Id of the target chapter, without the leading `#`.
    ///
    /// This is not validated against the chapters when reading with default settings.
    pub chapter_id: String,
}

impl Story {
    /// Get the chapter which the story starts from.
    pub fn first_chapter(&self) -> Option<&Chapter> {
        self.chapters.first()
    }

    /// Get the first chapter with the given id.
    ///
    /// A single leading `#` is disregarded in both the given id and chapter ids, so
    /// `lion` and `#lion` both find the chapter with heading `{#lion}`.
    pub fn get_chapter(&self, id: &str) -> Option<&Chapter> {
        let needle = strip_anchor_marker(id);

        if needle.is_empty() {
            return None;
        }

        self.chapters
            .iter()
            .find(|chapter| strip_anchor_marker(&chapter.id) == needle)
    }

    /// Get the chapter that a choice leads to.
    pub fn follow(&self, choice: &Choice) -> Option<&Chapter> {
        self.get_chapter(&choice.chapter_id)
    }
}

impl Chapter {
    /// Whether the story ends at this chapter: it is marked as a dead end or
    /// has no choices to continue with.
    pub fn is_ending(&self) -> bool {
        self.is_dead_end || self.choices.is_empty()
    }
}
