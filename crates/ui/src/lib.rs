//! Numeric-entry popup for the Sudoku grid page
//!
//! Clicking a grid cell opens the numpad on it; a digit button or digit key
//! fills the page's entry form and posts it. Space clears the cell, Escape
//! or a click elsewhere closes the popup.

mod config;
mod controller;
mod dom;
mod error;
mod hint;
mod input;
mod keys;
mod page;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;
use wasm_bindgen::prelude::*;

pub use crate::config::{NumpadConfig, POPUP_SELECTOR};
pub use crate::controller::{EventOutcome, NumpadController, NumpadState};
pub use crate::dom::DomPage;
pub use crate::error::{NumpadError, Result};
pub use crate::hint::{control_to_check, HintControl, HintControlKind};
pub use crate::input::SharedNumpad;
pub use crate::keys::KeyAction;
pub use crate::page::Page;

#[wasm_bindgen(start)]
pub fn main_js() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let document = dom::get_document()?;
    let Some(popup) = document.query_selector(POPUP_SELECTOR)? else {
        // Pages without a numpad (e.g. error pages) load the same bundle
        info!("no {POPUP_SELECTOR} on page, numpad disabled");
        return Ok(());
    };
    start(NumpadConfig::from_element(&popup))?;
    Ok(())
}

/// Bind the numpad and hint control to the current document
pub fn start(config: NumpadConfig) -> Result<SharedNumpad> {
    let document = dom::get_document()?;
    let hint_marker = config.hint_marker.clone();

    let page = DomPage::new(document.clone(), config)?;
    let numpad: SharedNumpad = Rc::new(RefCell::new(NumpadController::new(page)));

    let cells = input::setup_numpad_listeners(&numpad)?;
    let hints = hint::setup_hint_listener(&document)?;
    hint::sync_hint_control(&document, &hint_marker)?;

    info!(cells, hints, "numpad ready");
    Ok(numpad)
}
