//! Parsing of story content.
//!
//! Lines are [classified][crate::line::classify_line] one at a time in a single pass.
//! Front matter sets the story title and author, every chapter heading opens a new chapter
//! and choices and text are added to the chapter which was opened last. A chapter is
//! finished when the next heading opens or when the text ends.

use crate::{
    error::{LineError, LineErrorKind, MetaData, ParseError, ReadError},
    line::{classify_line, parse_chapter_heading, parse_choice, read_front_matter, LineKind},
    log::{Logger, Warning},
    settings::ReadSettings,
    story::{
        utils::strip_anchor_marker,
        validate::{validate_choice_targets, ChoiceLink},
        Chapter, Story,
    },
};

/// Read a story from a string with default settings.
///
/// With the default settings this never fails: lines that cannot be read are skipped
/// or yield empty fields, and a warning is added to the [story log][Story::log].
///
/// # Examples
/// ```
/// # use pathbook::read_story_from_string;
/// let content = "\
/// % You're probably going to die.
/// % Jeffrey Chupp
///
/// ## Something isn't right here. {#intro}
///
/// You hear a phone ringing.
///
/// - [pick up phone](#phone)
/// - [do not answer](#ignore-phone)
/// ";
///
/// let story = read_story_from_string(content).unwrap();
///
/// assert_eq!(&story.title, "You're probably going to die.");
/// assert_eq!(&story.chapters[0].body, "You hear a phone ringing.");
/// assert_eq!(story.chapters[0].choices.len(), 2);
/// ```
pub fn read_story_from_string(content: &str) -> Result<Story, ReadError> {
    read_story_from_string_with_settings(content, &ReadSettings::default())
}

/// Read a story from a string with the given settings.
///
/// See [`ReadSettings`] for which checks make reading fail in strict mode.
pub fn read_story_from_string_with_settings(
    content: &str,
    settings: &ReadSettings,
) -> Result<Story, ReadError> {
    if settings.strict && content.trim().is_empty() {
        return Err(ReadError::Empty);
    }

    let mut builder = StoryBuilder::new(settings);

    for (i, line) in content.lines().enumerate() {
        builder.add_line(line, MetaData::from(i));
    }

    let StoryBuilder {
        mut story,
        line_errors,
        links,
        log,
        ..
    } = builder.finish();

    if settings.strict && story.chapters.is_empty() {
        return Err(ReadError::NoChapters);
    }

    if settings.strict && !line_errors.is_empty() {
        return Err(ParseError { line_errors }.into());
    }

    let invalid_targets = validate_choice_targets(&story, &links);

    if settings.strict && !invalid_targets.is_empty() {
        return Err(invalid_targets.into());
    }

    story.log = log;

    for error in invalid_targets {
        story.log.add_warning(
            Warning::UnknownChoiceTarget {
                target: error.target,
            },
            &error.meta_data,
        );
    }

    story.log.sort();

    Ok(story)
}

/// Chapter which is still receiving lines.
struct OpenChapter<'c> {
    chapter: Chapter,
    body_lines: Vec<&'c str>,
}

impl<'c> OpenChapter<'c> {
    /// Finish the chapter, joining its text lines into the body.
    ///
    /// Blank lines at the start and end of the text are dropped.
    fn close(self) -> Chapter {
        let OpenChapter {
            mut chapter,
            body_lines,
        } = self;

        let is_blank = |line: &&str| line.trim().is_empty();

        let start = body_lines
            .iter()
            .position(|line| !is_blank(line))
            .unwrap_or(body_lines.len());
        let end = body_lines
            .iter()
            .rposition(|line| !is_blank(line))
            .map(|i| i + 1)
            .unwrap_or(start);

        chapter.body = body_lines[start..end.max(start)].join("\n");

        chapter
    }
}

/// Accumulator for reading a story line by line.
struct StoryBuilder<'c, 's> {
    settings: &'s ReadSettings,
    story: Story,
    current: Option<OpenChapter<'c>>,
    /// Number of front matter lines which have set the author.
    num_author_lines: usize,
    /// Errors from malformed lines, only collected in strict mode.
    line_errors: Vec<LineError>,
    /// Origins of all choices, for validating their targets.
    links: Vec<ChoiceLink>,
    log: Logger,
}

impl<'c, 's> StoryBuilder<'c, 's> {
    fn new(settings: &'s ReadSettings) -> Self {
        StoryBuilder {
            settings,
            story: Story::default(),
            current: None,
            num_author_lines: 0,
            line_errors: Vec::new(),
            links: Vec::new(),
            log: Logger::default(),
        }
    }

    fn add_line(&mut self, line: &'c str, meta_data: MetaData) {
        match classify_line(line) {
            LineKind::FrontMatter => self.add_front_matter(line, &meta_data),
            LineKind::ChapterHeading => self.open_chapter(line, meta_data),
            LineKind::Choice => self.add_choice(line, meta_data),
            LineKind::MalformedChoice => {
                self.log.add_warning(
                    Warning::InvalidChoice {
                        line: line.to_string(),
                    },
                    &meta_data,
                );

                self.add_line_error(line, LineErrorKind::InvalidChoice, meta_data);
            }
            LineKind::Text => {
                if let Some(open) = self.current.as_mut() {
                    open.body_lines.push(line);
                }
            }
        }
    }

    /// Set the story title from the first front matter line and the author from the rest.
    fn add_front_matter(&mut self, line: &str, meta_data: &MetaData) {
        let value = read_front_matter(line).to_string();

        if self.story.title.is_empty() {
            self.story.title = value;
        } else {
            if self.num_author_lines > 0 {
                self.log.add_warning(
                    Warning::AuthorOverwritten {
                        previous: self.story.author.clone(),
                    },
                    meta_data,
                );
            }

            self.story.author = value;
            self.num_author_lines += 1;
        }
    }

    /// Finish the current chapter and open a new one from the heading.
    ///
    /// The chapter is opened even if the heading cannot be read, in which case its
    /// title and id are empty.
    fn open_chapter(&mut self, line: &str, meta_data: MetaData) {
        self.close_chapter();

        let mut chapter = Chapter {
            meta_data: meta_data.clone(),
            ..Default::default()
        };

        match parse_chapter_heading(line) {
            Some(heading) => {
                chapter.title = heading.title;
                chapter.is_dead_end = heading.is_dead_end;

                chapter.id = if self.settings.strip_id_marker {
                    strip_anchor_marker(&heading.id).to_string()
                } else {
                    heading.id
                };
            }
            None => {
                self.log.add_warning(
                    Warning::InvalidChapterHeading {
                        line: line.to_string(),
                    },
                    &meta_data,
                );

                self.add_line_error(line, LineErrorKind::InvalidChapterHeading, meta_data);
            }
        }

        self.current = Some(OpenChapter {
            chapter,
            body_lines: Vec::new(),
        });
    }

    fn add_choice(&mut self, line: &str, meta_data: MetaData) {
        let choice = match parse_choice(line) {
            Some(choice) => choice,
            None => return,
        };

        let chapter_index = self.story.chapters.len();

        match self.current.as_mut() {
            Some(open) => {
                self.links.push(ChoiceLink {
                    chapter_index,
                    choice_index: open.chapter.choices.len(),
                    meta_data,
                });

                open.chapter.choices.push(choice);
            }
            None => {
                self.log
                    .add_warning(Warning::OrphanChoice { text: choice.text }, &meta_data);

                self.add_line_error(line, LineErrorKind::OrphanChoice, meta_data);
            }
        }
    }

    fn close_chapter(&mut self) {
        if let Some(open) = self.current.take() {
            self.story.chapters.push(open.close());
        }
    }

    fn add_line_error(&mut self, line: &str, kind: LineErrorKind, meta_data: MetaData) {
        if self.settings.strict {
            self.line_errors.push(LineError {
                line: line.to_string(),
                kind,
                meta_data,
            });
        }
    }

    fn finish(mut self) -> Self {
        self.close_chapter();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::story::Choice;

    fn choice(text: &str, chapter_id: &str) -> Choice {
        Choice {
            text: text.to_string(),
            chapter_id: chapter_id.to_string(),
        }
    }

    #[test]
    fn front_matter_sets_title_then_author() {
        let content = "\
% A title
% An author
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.title, "A title");
        assert_eq!(&story.author, "An author");
        assert!(story.chapters.is_empty());
    }

    #[test]
    fn missing_front_matter_yields_empty_title_and_author() {
        let story = read_story_from_string("# Chapter {#one}").unwrap();

        assert_eq!(&story.title, "");
        assert_eq!(&story.author, "");
    }

    #[test]
    fn third_front_matter_line_replaces_author_with_warning() {
        let content = "\
% Title
% First author
% Second author
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.title, "Title");
        assert_eq!(&story.author, "Second author");

        assert_eq!(story.log.len(), 1);
        assert_eq!(
            story.log.warnings[0].warning,
            Warning::AuthorOverwritten {
                previous: "First author".to_string()
            }
        );
    }

    #[test]
    fn third_front_matter_line_warns_even_if_author_was_empty() {
        let content = "% Title\n% \n% Author\n";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.author, "Author");

        assert_eq!(story.log.len(), 1);
        assert_eq!(
            story.log.warnings[0].warning,
            Warning::AuthorOverwritten {
                previous: String::new()
            }
        );
        assert_eq!(story.log.warnings[0].meta_data, MetaData::from(2));
    }

    #[test]
    fn empty_title_line_does_not_count_as_setting_the_author() {
        let content = "% \n% Title\n% Author\n";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.title, "Title");
        assert_eq!(&story.author, "Author");
        assert!(story.log.is_empty());
    }

    #[test]
    fn front_matter_is_read_anywhere_in_the_text() {
        let content = "\
# Chapter {#one}
% Late title
Some text.
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.title, "Late title");
        assert_eq!(&story.chapters[0].body, "Some text.");
    }

    #[test]
    fn every_heading_line_yields_one_chapter() {
        let content = "\
# One {#one}
# Two {#two} !
# Three {#three}
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(story.chapters.len(), 3);

        let ids = story
            .chapters
            .iter()
            .map(|chapter| chapter.id.as_str())
            .collect::<Vec<_>>();

        assert_eq!(&ids, &["#one", "#two", "#three"]);
        assert!(story.chapters[1].is_dead_end);
    }

    #[test]
    fn choices_are_added_to_the_last_opened_chapter_in_order() {
        let content = "\
# One {#one}
- [first](#two)
- [second](#three)
# Two {#two}
- [back](#one)
# Three {#three}
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(
            story.chapters[0].choices,
            vec![choice("first", "two"), choice("second", "three")]
        );
        assert_eq!(story.chapters[1].choices, vec![choice("back", "one")]);
        assert!(story.chapters[2].choices.is_empty());
    }

    #[test]
    fn chapter_meta_data_is_set_from_heading_line() {
        let content = "\
% Title

# One {#one}

# Two {#two}
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(story.chapters[0].meta_data, MetaData::from(2));
        assert_eq!(story.chapters[1].meta_data, MetaData::from(4));
    }

    #[test]
    fn malformed_heading_opens_chapter_without_title_or_id() {
        let content = "\
# One {#one}
- [go](#two)
# Two {#two} !!
- [back](#one)
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(story.chapters.len(), 2);

        let second = &story.chapters[1];

        assert_eq!(&second.title, "");
        assert_eq!(&second.id, "");
        assert!(!second.is_dead_end);
        assert_eq!(second.choices, vec![choice("back", "one")]);
    }

    #[test]
    fn malformed_heading_is_logged() {
        let story = read_story_from_string("# Broken {#heading").unwrap();

        assert_eq!(
            story.log.warnings[0].warning,
            Warning::InvalidChapterHeading {
                line: "# Broken {#heading".to_string()
            }
        );
    }

    #[test]
    fn body_is_text_between_headings_with_line_breaks_kept() {
        let content = "\
# One {#one}

You hear a phone ringing.
_Something_ makes you suspicious of it.

It keeps ringing.

- [pick up phone](#two)

# Two {#two}
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(
            &story.chapters[0].body,
            "You hear a phone ringing.\n_Something_ makes you suspicious of it.\n\nIt keeps ringing."
        );
        assert_eq!(&story.chapters[1].body, "");
    }

    #[test]
    fn text_around_choices_is_part_of_the_body() {
        let content = "\
# One {#one}
Before.
- [go](#one)
After.
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.chapters[0].body, "Before.\nAfter.");
    }

    #[test]
    fn text_before_the_first_chapter_is_not_part_of_any_body() {
        let content = "\
Preamble.
# One {#one}
Text.
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.chapters[0].body, "Text.");
    }

    #[test]
    fn malformed_choices_are_ignored_and_logged() {
        let content = "\
# One {#one}
- [no closing parenthesis](#one
Text.
";

        let story = read_story_from_string(content).unwrap();

        assert!(story.chapters[0].choices.is_empty());
        assert_eq!(&story.chapters[0].body, "Text.");
        assert_eq!(
            story.log.warnings[0].warning,
            Warning::InvalidChoice {
                line: "- [no closing parenthesis](#one".to_string()
            }
        );
    }

    #[test]
    fn choices_before_the_first_chapter_are_dropped_and_logged() {
        let content = "\
- [orphan](#one)
# One {#one}
";

        let story = read_story_from_string(content).unwrap();

        assert!(story.chapters[0].choices.is_empty());
        assert_eq!(
            story.log.warnings[0].warning,
            Warning::OrphanChoice {
                text: "orphan".to_string()
            }
        );
    }

    #[test]
    fn choices_to_unknown_chapters_are_kept_and_logged() {
        let content = "\
# One {#one}
- [nowhere](#two)
";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(story.chapters[0].choices, vec![choice("nowhere", "two")]);
        assert_eq!(story.log.len(), 1);
        assert_eq!(story.log.warnings[0].meta_data, MetaData::from(1));
    }

    #[test]
    fn warnings_are_logged_in_line_order() {
        let content = "\
# One {#one}
- [nowhere](#two)
# Broken
";

        let story = read_story_from_string(content).unwrap();

        let lines = story
            .log
            .iter()
            .map(|message| message.meta_data.line_index)
            .collect::<Vec<_>>();

        assert_eq!(&lines, &[1, 2]);
    }

    #[test]
    fn empty_content_yields_empty_story_with_default_settings() {
        assert_eq!(read_story_from_string("").unwrap(), Story::default());
        assert_eq!(read_story_from_string("\n\n  \n").unwrap(), Story::default());
    }

    #[test]
    fn windows_line_endings_are_handled() {
        let content = "% Title\r\n# One {#one} !\r\n- [go](#one)\r\n";

        let story = read_story_from_string(content).unwrap();

        assert_eq!(&story.title, "Title");
        assert!(story.chapters[0].is_dead_end);
        assert_eq!(story.chapters[0].choices, vec![choice("go", "one")]);
    }

    #[test]
    fn strip_id_marker_setting_removes_leading_marker_from_chapter_ids() {
        let settings = ReadSettings {
            strip_id_marker: true,
            ..Default::default()
        };

        let content = "\
# One {#one}
# Two {two}
";

        let story = read_story_from_string_with_settings(content, &settings).unwrap();

        assert_eq!(&story.chapters[0].id, "one");
        assert_eq!(&story.chapters[1].id, "two");
    }

    #[test]
    fn strict_settings_fail_on_empty_content() {
        let settings = ReadSettings::strict();

        assert_eq!(
            read_story_from_string_with_settings("  \n", &settings).unwrap_err(),
            ReadError::Empty
        );
    }

    #[test]
    fn strict_settings_fail_without_chapters() {
        let settings = ReadSettings::strict();

        assert_eq!(
            read_story_from_string_with_settings("% Title\nText.", &settings).unwrap_err(),
            ReadError::NoChapters
        );
    }

    #[test]
    fn strict_settings_collect_all_line_errors() {
        let content = "\
- [orphan](#one)
# One {#one}
- [broken](one)
# Two {#two} !!
";

        let error = read_story_from_string_with_settings(content, &ReadSettings::strict())
            .unwrap_err();

        match error {
            ReadError::ParseError(ParseError { line_errors }) => {
                let kinds = line_errors
                    .iter()
                    .map(|error| error.kind.clone())
                    .collect::<Vec<_>>();

                assert_eq!(
                    &kinds,
                    &[
                        LineErrorKind::OrphanChoice,
                        LineErrorKind::InvalidChoice,
                        LineErrorKind::InvalidChapterHeading
                    ]
                );

                assert_eq!(line_errors[2].meta_data, MetaData::from(3));
            }
            other => panic!("expected line errors, got {:?}", other),
        }
    }

    #[test]
    fn strict_settings_fail_on_unknown_choice_targets() {
        let content = "\
# One {#one}
- [stay](#one)
- [nowhere](#two)
";

        let error = read_story_from_string_with_settings(content, &ReadSettings::strict())
            .unwrap_err();

        match error {
            ReadError::InvalidAddress(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(&errors[0].target, "two");
                assert_eq!(&errors[0].chapter_title, "One");
            }
            other => panic!("expected invalid address, got {:?}", other),
        }
    }

    #[test]
    fn strict_settings_accept_a_well_formed_story() {
        let content = "\
% Title
% Author

# One {#one}
- [go](#two)

# Two {#two} !
";

        let story = read_story_from_string_with_settings(content, &ReadSettings::strict()).unwrap();

        assert_eq!(story.chapters.len(), 2);
        assert!(story.log.is_empty());
    }
}
