use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

/// Largest symbol the grid accepts
pub const MAX_DIGIT: u8 = 9;

/// A value entered into a cell. Zero clears the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const CLEAR: Self = Self(0);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= MAX_DIGIT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse button or key text, falling back to [`Digit::CLEAR`].
    ///
    /// Anything that is not a base-10 integer in `0..=9` after trimming
    /// clears the cell instead of being rejected.
    pub fn parse_or_clear(text: &str) -> Self {
        text.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .unwrap_or(Self::CLEAR)
    }

    /// Digit for a single keyboard character, if it is one
    pub fn from_key_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| u8::try_from(d).ok()).and_then(Self::new)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_clear(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Digit {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ProtocolError::DigitOutOfRange(value))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
