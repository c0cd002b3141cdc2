//! Read choice links from lines.

use regex::Regex;

use crate::story::Choice;

use std::sync::OnceLock;

/// Pattern for `- [text](#id)`. Content after the closing parenthesis is not matched.
fn choice_regex() -> &'static Regex {
    static CHOICE_REGEX: OnceLock<Regex> = OnceLock::new();

    CHOICE_REGEX
        .get_or_init(|| Regex::new(r"^- \[([^\]]+)\]\(#([^)]+)\)").expect("Invalid choice regex"))
}

/// Whether the line is a choice link.
pub fn is_choice(line: &str) -> bool {
    choice_regex().is_match(line)
}

/// Read a choice from a line.
///
/// The text is everything up to the first `]` and the target everything after the
/// anchor marker up to the first `)`. The anchor marker is not part of the target.
pub fn parse_choice(line: &str) -> Option<Choice> {
    let captures = choice_regex().captures(line)?;

    let text = captures.get(1)?.as_str().to_string();
    let chapter_id = captures.get(2)?.as_str().to_string();

    Some(Choice { text, chapter_id })
}
