//! Parser for choose-your-own-adventure stories written in a markdown-like format.
//!
//! A story is written as plain text. Front matter lines give the title and author,
//! chapter headings open chapters with an id and choices link to other chapters by id:
//!
//! ```text
//! % You're probably going to die.
//! % Jeffrey Chupp
//!
//! # Something isn't right here. {#intro}
//!
//! You hear a phone ringing. _Something_ makes you suspicious of it.
//!
//! - [pick up phone](#phone)
//! - [jump in a nearby lion's mouth](#lion)
//!
//! # You pick up the phone... {#phone} !
//!
//! It is your grandmother. **You die.**
//! ```
//!
//! A heading which ends with a single `!` marks the chapter as a dead end. Text between
//! a heading and the next is kept as the chapter body, without interpreting any markup.
//!
//! Reading the text yields a [`Story`] with its [`Chapter`]s in order. The first chapter
//! is where the story starts, and a renderer moves between chapters by looking up the
//! target of a [`Choice`]:
//!
//! ```
//! # use pathbook::read_story_from_string;
//! let content = "\
//! ## Something isn't right here. {#intro}
//! - [pick up phone](#phone)
//!
//! ## You pick up the phone... {#phone} !
//! ";
//!
//! let story = read_story_from_string(content).unwrap();
//!
//! let intro = story.first_chapter().unwrap();
//! let phone = story.follow(&intro.choices[0]).unwrap();
//!
//! assert_eq!(&phone.id, "#phone");
//! assert!(phone.is_dead_end);
//! ```
//!
//! Note that chapter ids are kept as written, including the leading `#`, while choice
//! targets are read without it. [`Story::get_chapter`] disregards the marker, and
//! [`ReadSettings::strip_id_marker`] removes it from chapter ids while reading.
//!
//! # Errors and warnings
//! With default settings reading never fails. Lines which cannot be read are skipped
//! or give empty fields, and are reported as [warnings][log::Warning] in the story
//! [log][Story::log]. Reading with [`ReadSettings::strict`] turns them into errors.
//!
//! # Features
//!  *  `serde_support`: derive `Serialize` and `Deserialize` for stories and settings.

mod consts;
pub mod error;
mod line;
pub mod log;
mod settings;
mod story;

pub use error::{print_read_error, ReadError};
pub use settings::ReadSettings;
pub use story::{
    read_story_from_string, read_story_from_string_with_settings, Chapter, Choice, Story,
};
