use std::fmt;

use crate::{Error, MAX_CODE_POINT, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePoint {
    Single(u32),
    Range(u32, u32),
}

impl CodePoint {
    pub fn start(self) -> u32 {
        match self {
            Self::Single(cp) => cp,
            Self::Range(lo, _) => lo,
        }
    }

    // Normalized half-open bounds, validated against the code space.
    pub fn bounds(self) -> Result<(u32, u32)> {
        match self {
            Self::Single(cp) if cp <= MAX_CODE_POINT => Ok((cp, cp + 1)),
            Self::Single(cp) => Err(Error::InvalidCodePoint(format!(
                "{cp:#06x} is not a Unicode code point value"
            ))),
            Self::Range(lo, hi) if lo < hi && hi <= MAX_CODE_POINT + 1 => Ok((lo, hi)),
            Self::Range(lo, hi) => Err(Error::InvalidCodePoint(format!(
                "({lo:#06x}, {hi:#06x}) is not a Unicode code point range"
            ))),
        }
    }
}

impl From<u32> for CodePoint {
    fn from(cp: u32) -> Self {
        Self::Single(cp)
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        Self::Single(ch as u32)
    }
}

impl From<(u32, u32)> for CodePoint {
    fn from((lo, hi): (u32, u32)) -> Self {
        Self::Range(lo, hi)
    }
}

const CLASS_ESCAPED: &str = r"-|.^?*+{}()[]\";

fn write_scalar(f: &mut fmt::Formatter<'_>, cp: u32) -> fmt::Result {
    match char::from_u32(cp) {
        Some(ch) if CLASS_ESCAPED.contains(ch) => write!(f, "\\{ch}"),
        Some(ch) => write!(f, "{ch}"),
        // Surrogate scalars have no char form.
        None => write!(f, "\\u{cp:04X}"),
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Single(cp) => write_scalar(f, cp),
            Self::Range(lo, hi) if hi == lo + 1 => write_scalar(f, lo),
            Self::Range(lo, hi) if hi == lo + 2 => {
                write_scalar(f, lo)?;
                write_scalar(f, lo + 1)
            }
            Self::Range(lo, hi) => {
                write_scalar(f, lo)?;
                write!(f, "-")?;
                write_scalar(f, hi - 1)
            }
        }
    }
}
