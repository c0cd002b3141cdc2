mod parse;
mod types;
mod utils;
mod validate;

pub use parse::{read_story_from_string, read_story_from_string_with_settings};
pub use types::{Chapter, Choice, Story};
