//! Classify lines of story text by their kind.

use crate::{
    consts::{CHAPTER_MARKER, CHOICE_MARKER, FRONT_MATTER_MARKER},
    line::is_choice,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Kind of a single line of story text.
///
/// A line is classified independently of all other lines.
pub enum LineKind {
    /// Line starts with `% `: sets the story title or author.
    FrontMatter,
    /// Line starts with `# `: opens a new chapter, even if the heading cannot be read.
    ChapterHeading,
    /// Line is a link on the form `- [text](#id)`.
    Choice,
    /// Line starts with `- [` but is not a choice link.
    MalformedChoice,
    /// Any other line: narrative text or blank.
    Text,
}

/// Determine the kind of a line.
///
/// The kinds are checked in order of precedence: front matter, chapter heading
/// and choice. Everything else is text.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(FRONT_MATTER_MARKER) {
        LineKind::FrontMatter
    } else if line.starts_with(CHAPTER_MARKER) {
        LineKind::ChapterHeading
    } else if is_choice(line) {
        LineKind::Choice
    } else if line.starts_with(CHOICE_MARKER) {
        LineKind::MalformedChoice
    } else {
        LineKind::Text
    }
}

/// Read the front matter value from a line: the text after the marker, trimmed.
pub fn read_front_matter(line: &str) -> &str {
    line.strip_prefix(FRONT_MATTER_MARKER).unwrap_or(line).trim()
}
