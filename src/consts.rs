// Line markers
pub const FRONT_MATTER_MARKER: &'static str = "% ";
pub const CHAPTER_MARKER: &'static str = "# ";
pub const CHOICE_MARKER: &'static str = "- [";

// Chapter id marker
pub const ANCHOR_MARKER: char = '#';
