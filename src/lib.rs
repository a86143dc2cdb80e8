use std::error::Error as StdError;
use std::fmt;

mod codepoint;
mod parser;
mod registry;
mod subset;
mod unicode_data;

pub use codepoint::CodePoint;
pub use parser::{CharClassIter, parse_character_class};
pub use registry::{
    BlockDiff, BlockProvider, CategoryChange, CategoryDiff, CategoryProvider, SubsetRegistry,
    UnicodeVersion,
};
pub use subset::UnicodeSubset;
pub use unicode_data::{BuiltinBlocks, BuiltinCategories};

pub const MAX_CODE_POINT: u32 = 0x10FFFF;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MalformedClass { message: String, position: usize },
    InvalidCodePoint(String),
    NotFound { name: String, table: NameTable },
    Configuration(String),
    InvariantViolation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameTable {
    Categories,
    Blocks,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedClass { message, .. } => {
                write!(f, "malformed character class: {message}")
            }
            Self::InvalidCodePoint(msg) => write!(f, "invalid code point: {msg}"),
            Self::NotFound {
                name,
                table: NameTable::Categories,
            } => write!(f, "{name:?} doesn't match any Unicode category"),
            Self::NotFound {
                name,
                table: NameTable::Blocks,
            } => write!(f, "{name:?} doesn't match any Unicode block"),
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl StdError for Error {}
