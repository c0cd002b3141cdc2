//! Classification and reading of individual lines.

mod chapter;
mod choice;
mod kind;

pub use chapter::parse_chapter_heading;
pub use choice::{is_choice, parse_choice};
pub use kind::{classify_line, read_front_matter, LineKind};
