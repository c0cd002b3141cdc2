//! Validation of choice targets against the chapters of a story.

use crate::{
    error::{InvalidAddressError, MetaData},
    story::{utils::strip_anchor_marker, Story},
};

use std::collections::HashSet;

#[derive(Clone, Debug)]
/// Origin of a choice in a story, recorded while reading lines.
pub struct ChoiceLink {
    /// Index of the chapter which contains the choice.
    pub chapter_index: usize,
    /// Index of the choice in the chapter.
    pub choice_index: usize,
    /// Information about the choice line.
    pub meta_data: MetaData,
}

/// Find all choices whose target is not the id of any chapter in the story.
///
/// Ids are compared without their leading anchor marker. Errors are returned in the
/// order of the given links.
pub fn validate_choice_targets(story: &Story, links: &[ChoiceLink]) -> Vec<InvalidAddressError> {
    let known_ids = story
        .chapters
        .iter()
        .map(|chapter| strip_anchor_marker(&chapter.id))
        .filter(|id| !id.is_empty())
        .collect::<HashSet<_>>();

    links
        .iter()
        .filter_map(|link| {
            let chapter = story.chapters.get(link.chapter_index)?;
            let choice = chapter.choices.get(link.choice_index)?;

            let target = strip_anchor_marker(&choice.chapter_id);

            if known_ids.contains(target) {
                None
            } else {
                Some(InvalidAddressError {
                    target: choice.chapter_id.clone(),
                    chapter_title: chapter.title.clone(),
                    meta_data: link.meta_data.clone(),
                })
            }
        })
        .collect()
}
