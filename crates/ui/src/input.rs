//! Event listener setup (cell clicks, popup buttons, outside clicks, keyboard)
//!
//! Listeners share one controller through `Rc<RefCell<..>>` and are leaked
//! for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use sudoku_numpad_protocol::CellId;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

use crate::controller::{EventOutcome, NumpadController};
use crate::dom::{select_all, DomPage};
use crate::error::Result;

pub type SharedNumpad = Rc<RefCell<NumpadController<DomPage>>>;

/// Finish `event` the way the controller asked
pub fn apply_outcome(event: &Event, outcome: EventOutcome) {
    if outcome.stop_propagation {
        event.stop_propagation();
    }
    if outcome.prevent_default {
        event.prevent_default();
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// `el` itself or its nearest ancestor matching `selector`
fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Register every numpad listener; returns how many cells were bound
pub fn setup_numpad_listeners(numpad: &SharedNumpad) -> Result<usize> {
    let cells = setup_cell_listeners(numpad)?;
    setup_popup_listener(numpad)?;
    setup_outside_click_listener(numpad)?;
    setup_keyboard_listener(numpad)?;
    Ok(cells)
}

fn setup_cell_listeners(numpad: &SharedNumpad) -> Result<usize> {
    let cells: Vec<Element> = {
        let ctl = numpad.borrow();
        let page = ctl.page();
        let popup: &web_sys::Node = page.popup();
        // The popup's own buttons may carry an inline onclick too
        select_all(page.document(), &page.config().cells)?
            .into_iter()
            .filter(|el| {
                let node: &web_sys::Node = el;
                !popup.contains(Some(node))
            })
            .collect()
    };

    for cell in &cells {
        let numpad_click = numpad.clone();
        let onclick = Closure::wrap(Box::new(move |e: MouseEvent| {
            let Some(target) = e.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            match CellId::new(target.id()) {
                Ok(id) => {
                    let outcome = numpad_click.borrow_mut().activate(id);
                    apply_outcome(&e, outcome);
                }
                Err(err) => warn!("cell click: {err}"),
            }
        }) as Box<dyn FnMut(_)>);
        cell.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }
    Ok(cells.len())
}

fn setup_popup_listener(numpad: &SharedNumpad) -> Result<()> {
    let (popup, digit_keys, dismiss) = {
        let ctl = numpad.borrow();
        let page = ctl.page();
        (
            page.popup().clone(),
            page.config().digit_keys.clone(),
            page.config().dismiss.clone(),
        )
    };

    let numpad_popup = numpad.clone();
    let onclick = Closure::wrap(Box::new(move |e: MouseEvent| {
        let outcome = match event_element(&e) {
            Some(el) if closest(&el, &dismiss).is_some() => numpad_popup.borrow_mut().dismiss(),
            Some(el) => match closest(&el, &digit_keys) {
                Some(key) => {
                    let text = key.text_content().unwrap_or_default();
                    numpad_popup.borrow_mut().digit_pressed(&text)
                }
                // Clicks on the popup body must not reach the cell it sits in
                None => EventOutcome::STOP,
            },
            None => EventOutcome::STOP,
        };
        apply_outcome(&e, outcome);
    }) as Box<dyn FnMut(_)>);
    popup.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

fn setup_outside_click_listener(numpad: &SharedNumpad) -> Result<()> {
    let (document, popup, cells) = {
        let ctl = numpad.borrow();
        let page = ctl.page();
        (page.document().clone(), page.popup().clone(), page.config().cells.clone())
    };

    let numpad_outside = numpad.clone();
    let onclick = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(el) = event_element(&e) else { return };
        let node: &web_sys::Node = &el;
        if popup.contains(Some(node)) || closest(&el, &cells).is_some() {
            return;
        }
        let outcome = numpad_outside.borrow_mut().outside_click();
        apply_outcome(&e, outcome);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}

/// `KeyboardEvent.key`, or `None` when the browser supplied none
fn event_key(e: &KeyboardEvent) -> Option<String> {
    js_sys::Reflect::get(e, &"key".into())
        .ok()
        .and_then(|v| v.as_string())
}

fn setup_keyboard_listener(numpad: &SharedNumpad) -> Result<()> {
    let document = numpad.borrow().page().document().clone();

    let numpad_key = numpad.clone();
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.ctrl_key() || e.meta_key() || e.alt_key() {
            return;
        }
        let key = event_key(&e);
        let outcome = numpad_key.borrow_mut().route_key(key.as_deref());
        if outcome != EventOutcome::PASS {
            debug!(key = ?key, "numpad key");
        }
        apply_outcome(&e, outcome);
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();
    Ok(())
}
