//! Errors from reading and validating stories.

pub mod address;
pub mod error;
pub mod line;
pub mod parse;

pub use address::InvalidAddressError;
pub use error::{print_read_error, ReadError};
pub use line::{LineError, LineErrorKind};
pub use parse::ParseError;
