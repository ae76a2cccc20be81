use sudoku_numpad_protocol::{CellId, Submission};

use crate::error::Result;

/// What the numpad needs from the host page
///
/// `DomPage` is the browser implementation; tests use a recording fake.
pub trait Page {
    /// Remove the selection marker from every cell
    fn clear_selection_markers(&mut self);

    fn mark_selected(&mut self, cell: &CellId);

    /// Move the popup so it is anchored at `cell`
    fn anchor_popup(&mut self, cell: &CellId);

    fn set_popup_visible(&mut self, visible: bool);

    /// Coordinate readout; pages without one ignore it
    fn show_coords(&mut self, cell: &CellId);

    /// Fill the entry form and start its submission
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}
