//! Read the title, id and dead end marker from chapter headings.

use regex::Regex;

use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq)]
/// Data read from a chapter heading line.
pub struct ChapterHeading {
    /// Title of chapter, trimmed of surrounding whitespace.
    pub title: String,
    /// Id of chapter, exactly as written between the braces.
    pub id: String,
    /// Whether the heading ended with the dead end marker.
    pub is_dead_end: bool,
}

/// Pattern for `# Title {id}` with an optional single `!` after the id.
///
/// A heading ending with `!!` does not match at all.
fn chapter_heading_regex() -> &'static Regex {
    static CHAPTER_HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

    CHAPTER_HEADING_REGEX.get_or_init(|| {
        Regex::new(r"^# ([^{]+)\{([^}]+)\}[ \t]*(!)?[ \t]*$")
            .expect("Invalid chapter heading regex")
    })
}

/// Read a chapter heading from a line which starts with the chapter marker.
///
/// Returns `None` if the line does not match the full heading pattern. The id is not
/// modified: an author writing `{#lion}` gets the id `#lion`.
///
/// # Notes
///  *  The dead end flag is set only if the marker capture is exactly `!`.
pub fn parse_chapter_heading(line: &str) -> Option<ChapterHeading> {
    chapter_heading_regex().captures(line).map(|captures| {
        let title = captures
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let id = captures
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let is_dead_end = captures
            .get(3)
            .map(|m| m.as_str() == "!")
            .unwrap_or(false);

        ChapterHeading {
            title,
            id,
            is_dead_end,
        }
    })
}
