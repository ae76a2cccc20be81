//! Keyboard routing while the numpad is open

use sudoku_numpad_protocol::Digit;

/// What a keypress means to an open numpad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Dismiss,
    Enter(Digit),
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value. `None` for keys the numpad ignores.
    ///
    /// A missing or empty key dismisses, as does Escape.
    pub fn from_key(key: Option<&str>) -> Option<Self> {
        let key = match key {
            None | Some("") => return Some(Self::Dismiss),
            Some(k) => k,
        };
        match key {
            "Escape" | "Esc" => Some(Self::Dismiss),
            " " | "Spacebar" => Some(Self::Enter(Digit::CLEAR)),
            k => {
                let mut chars = k.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::from_key_char(c).map(Self::Enter),
                    _ => None,
                }
            }
        }
    }
}
