//! Numpad state machine
//!
//! `Idle` -> cell click -> `Open { selection }` -> digit -> `Submitted`.
//! Dismiss returns `Open` to `Idle`. `Submitted` is terminal: the form post
//! navigates the page away and every later input is ignored.

use sudoku_numpad_protocol::{CellId, Digit, Submission};
use tracing::{debug, warn};

use crate::keys::KeyAction;
use crate::page::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumpadState {
    Idle,
    Open { selection: CellId },
    Submitted(Submission),
}

/// How the DOM event that triggered a transition must be finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventOutcome {
    pub stop_propagation: bool,
    pub prevent_default: bool,
}

impl EventOutcome {
    /// Leave the event alone
    pub const PASS: Self = Self { stop_propagation: false, prevent_default: false };
    /// Keep the event from reaching ancestor handlers
    pub const STOP: Self = Self { stop_propagation: true, prevent_default: false };
    /// Stop propagation and suppress the browser default
    pub const CONSUME: Self = Self { stop_propagation: true, prevent_default: true };
}

pub struct NumpadController<P> {
    page: P,
    state: NumpadState,
}

impl<P: Page> NumpadController<P> {
    pub const fn new(page: P) -> Self {
        Self { page, state: NumpadState::Idle }
    }

    pub const fn state(&self) -> &NumpadState {
        &self.state
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.state, NumpadState::Open { .. })
    }

    pub const fn selection(&self) -> Option<&CellId> {
        match &self.state {
            NumpadState::Open { selection } => Some(selection),
            _ => None,
        }
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    /// Select `cell` and open the popup on it
    pub fn activate(&mut self, cell: CellId) -> EventOutcome {
        if let NumpadState::Submitted(_) = self.state {
            return EventOutcome::PASS;
        }
        self.page.clear_selection_markers();
        self.page.mark_selected(&cell);
        self.page.anchor_popup(&cell);
        self.page.set_popup_visible(true);
        self.page.show_coords(&cell);
        debug!(cell = %cell, "numpad open");
        self.state = NumpadState::Open { selection: cell };
        EventOutcome::PASS
    }

    /// Hide the popup without submitting
    pub fn dismiss(&mut self) -> EventOutcome {
        if let NumpadState::Submitted(_) = self.state {
            return EventOutcome::CONSUME;
        }
        self.page.set_popup_visible(false);
        if self.is_open() {
            debug!("numpad dismissed");
        }
        self.state = NumpadState::Idle;
        EventOutcome::CONSUME
    }

    /// A digit button was clicked; `text` is its label
    pub fn digit_pressed(&mut self, text: &str) -> EventOutcome {
        if self.is_open() {
            self.submit(Digit::parse_or_clear(text));
        }
        EventOutcome::STOP
    }

    /// Post the current selection with `value`
    pub fn submit(&mut self, value: Digit) -> EventOutcome {
        let Some(cell) = self.selection().cloned() else {
            debug!(%value, "submit without selection ignored");
            return EventOutcome::PASS;
        };
        let submission = Submission::new(cell, value);
        match self.page.submit(&submission) {
            Ok(()) => {
                debug!(
                    cell = %submission.cell,
                    value = %submission.value,
                    clear = submission.value.is_clear(),
                    "numpad submitted"
                );
                self.state = NumpadState::Submitted(submission);
            }
            Err(e) => warn!("numpad submit failed: {e}"),
        }
        EventOutcome::CONSUME
    }

    /// Document-wide keydown; only acts while the popup is open
    pub fn route_key(&mut self, key: Option<&str>) -> EventOutcome {
        if !self.is_open() {
            return EventOutcome::PASS;
        }
        match KeyAction::from_key(key) {
            Some(KeyAction::Dismiss) => self.dismiss(),
            Some(KeyAction::Enter(digit)) => self.submit(digit),
            None => EventOutcome::PASS,
        }
    }

    /// Click that landed outside both the popup and the grid cells
    pub fn outside_click(&mut self) -> EventOutcome {
        if self.is_open() {
            self.dismiss()
        } else {
            EventOutcome::PASS
        }
    }
}
