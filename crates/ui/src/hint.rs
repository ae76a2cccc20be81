//! Hint control: initial sync from server markup and submit-on-change

use sudoku_numpad_protocol::{HintMode, HINT_FIELD};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use crate::dom::select_all;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintControlKind {
    Checkbox,
    Radio,
}

/// Snapshot of one `input[name="hint"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintControl {
    pub kind: HintControlKind,
    pub value: String,
    pub checked: bool,
}

/// Which control to check when the page was rendered with hints active
///
/// A checkbox is checked directly. In a radio group the `ON` radio is
/// picked, unless the server already checked one.
pub fn control_to_check(marker_present: bool, controls: &[HintControl]) -> Option<usize> {
    if !marker_present {
        return None;
    }
    if let Some(i) = controls.iter().position(|c| c.kind == HintControlKind::Checkbox) {
        return (!controls[i].checked).then_some(i);
    }
    if controls.iter().any(|c| c.checked) {
        return None;
    }
    controls
        .iter()
        .position(|c| HintMode::parse(&c.value) == HintMode::On)
}

fn hint_inputs(document: &Document) -> Result<Vec<HtmlInputElement>> {
    Ok(select_all(document, &format!("input[name=\"{HINT_FIELD}\"]"))?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .collect())
}

fn snapshot(input: &HtmlInputElement) -> HintControl {
    let kind = if input.type_().eq_ignore_ascii_case("radio") {
        HintControlKind::Radio
    } else {
        HintControlKind::Checkbox
    };
    HintControl { kind, value: input.value(), checked: input.checked() }
}

/// Check the hint control if the page carries the hint marker
pub fn sync_hint_control(document: &Document, marker: &str) -> Result<()> {
    let marker_present = document.query_selector(marker)?.is_some();
    let inputs = hint_inputs(document)?;
    let controls: Vec<HintControl> = inputs.iter().map(snapshot).collect();
    if let Some(i) = control_to_check(marker_present, &controls) {
        inputs[i].set_checked(true);
        info!("hint mode active, control checked");
    }
    Ok(())
}

/// Submit the hint form whenever a hint control changes
pub fn setup_hint_listener(document: &Document) -> Result<usize> {
    let inputs = hint_inputs(document)?;
    for input in &inputs {
        let onchange = Closure::wrap(Box::new(move |e: Event| {
            let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
                return;
            };
            let Some(form) = input.form() else {
                warn!("hint control outside a form");
                return;
            };
            let mode = HintMode::parse(&input.value());
            debug!(%mode, active = mode.is_active() && input.checked(), "hint changed");
            if let Err(e) = form.request_submit() {
                warn!("hint submit failed: {:?}", e);
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }
    Ok(inputs.len())
}
