use serde::{Deserialize, Serialize};

use crate::{Digit, ProtocolError};

/// Form field receiving the selected cell id
pub const CELL_FIELD: &str = "cell";
/// Form field receiving the entered digit
pub const VALUE_FIELD: &str = "value";
/// Name of the hint control and of its form field
pub const HINT_FIELD: &str = "hint";

/// Identifier of a grid cell, equal to the id of its DOM element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    pub fn new(id: impl Into<String>) -> Result<Self, ProtocolError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProtocolError::EmptyCellId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A value entry posted to the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub cell: CellId,
    pub value: Digit,
}

impl Submission {
    pub const fn new(cell: CellId, value: Digit) -> Self {
        Self { cell, value }
    }

    /// Form fields in the order they are written
    pub fn fields(&self) -> [(&'static str, String); 2] {
        [
            (CELL_FIELD, self.cell.to_string()),
            (VALUE_FIELD, self.value.to_string()),
        ]
    }
}
