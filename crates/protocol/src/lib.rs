//! Shared form-field types for the Sudoku numpad
//!
//! Defines what the numpad writes into the page's HTML forms and how the
//! server-rendered hint state is read back.

pub mod digit;
pub mod hint;
pub mod messages;

pub use digit::*;
pub use hint::*;
pub use messages::*;

/// Errors raised when building protocol values from raw input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("digit {0} is outside 0..=9")]
    DigitOutOfRange(u8),
    #[error("cell id must not be empty")]
    EmptyCellId,
}
