//! Errors from reading stories.

#[macro_use]
pub(crate) mod utils;
pub mod parse;

pub use parse::{
    print_read_error, InvalidAddressError, LineError, LineErrorKind, ParseError, ReadError,
};
pub use utils::MetaData;
