#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use sudoku_numpad_ui::{start, NumpadConfig, NumpadState, SharedNumpad};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Render a grid page into the body the way the server does: editable cells
/// carry an inline `onclick`, given cells do not. Popup and form ids carry
/// `tag` so listeners left over from earlier tests never match this page.
fn render_page(tag: &str, hint_marker: bool) -> NumpadConfig {
    let noop = js_sys::Function::new_no_args("");
    js_sys::Reflect::set(&web_sys::window().unwrap(), &"cellClick".into(), &noop).unwrap();

    let marker = if hint_marker { r#"<td id="r9c9" class="hint">123</td>"# } else { "" };
    let html = format!(
        r#"<table><tbody><tr>
             <td id="r1c1" onclick="cellClick(this)"></td>
             <td id="r2c2">5</td>
             <td id="r3c5" onclick="cellClick(this)"></td>
             {marker}
           </tr></tbody></table>
           <span id="coords-{tag}"></span>
           <span id="legend-{tag}" class="selected">legend</span>
           <div id="numpad-{tag}">
             <span class="numkey">4</span><span class="numkey">7</span>
             <span class="numkey">C</span><span class="numclose">x</span>
           </div>
           <form id="numform-{tag}" method="post" action="/">
             <input type="hidden" name="cell"><input type="hidden" name="value">
           </form>
           <form id="hintform-{tag}" method="post" action="/hint">
             <input type="checkbox" name="hint" value="on">
           </form>"#
    );
    document().body().unwrap().set_inner_html(&html);

    NumpadConfig {
        popup: format!("#numpad-{tag}"),
        coords: format!("#coords-{tag}"),
        form: format!("#numform-{tag}"),
        ..NumpadConfig::default()
    }
}

fn by_id(id: &str) -> Element {
    document().get_element_by_id(id).unwrap()
}

fn click(el: &Element) {
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn mouse_click(el: &Element) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    el.dispatch_event(&event).unwrap();
    event
}

fn press(key: &str) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document().dispatch_event(&event).unwrap();
    event
}

/// Record submissions of the form matching `selector` and cancel navigation
fn intercept_submit(selector: &str) -> Rc<RefCell<Vec<(String, String)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let form = document().query_selector(selector).unwrap().unwrap();
    let log_submit = log.clone();
    let form_fields = form.clone();
    let onsubmit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        let field = |name: &str| {
            form_fields
                .query_selector(&format!("input[name=\"{name}\"]"))
                .unwrap()
                .unwrap()
                .dyn_into::<HtmlInputElement>()
                .unwrap()
                .value()
        };
        log_submit.borrow_mut().push((field("cell"), field("value")));
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())
        .unwrap();
    onsubmit.forget();
    log
}

fn popup_open(config: &NumpadConfig) -> bool {
    document()
        .query_selector(&config.popup)
        .unwrap()
        .unwrap()
        .class_list()
        .contains(&config.open_class)
}

fn finish(numpad: &SharedNumpad) {
    if numpad.borrow().is_open() {
        numpad.borrow_mut().dismiss();
    }
}

#[wasm_bindgen_test]
fn click_then_digit_key_submits_form() {
    let config = render_page("e2e", false);
    let numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    click(&by_id("r3c5"));
    assert!(popup_open(&config));
    let popup = by_id("numpad-e2e");
    assert_eq!(popup.parent_element().unwrap().id(), "r3c5");
    assert_eq!(by_id("coords-e2e").text_content().unwrap(), "r3c5");

    let event = press("4");
    assert!(event.default_prevented());
    assert_eq!(*submits.borrow(), vec![("r3c5".to_string(), "4".to_string())]);
    assert!(matches!(numpad.borrow().state(), NumpadState::Submitted(_)));
}

#[wasm_bindgen_test]
fn unrelated_key_keeps_popup_open() {
    let config = render_page("other-key", false);
    let numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    click(&by_id("r1c1"));
    let event = press("q");
    assert!(!event.default_prevented());
    assert!(submits.borrow().is_empty());
    assert!(popup_open(&config));
    finish(&numpad);
}

#[wasm_bindgen_test]
fn only_one_cell_selected() {
    let config = render_page("select", false);
    let numpad = start(config.clone()).unwrap();

    click(&by_id("r1c1"));
    click(&by_id("r3c5"));
    let selected = document().query_selector_all("td.selected").unwrap();
    assert_eq!(selected.length(), 1);
    assert!(by_id("r3c5").class_list().contains("selected"));
    assert!(by_id("legend-select").class_list().contains("selected"));
    assert_eq!(by_id("numpad-select").parent_element().unwrap().id(), "r3c5");
    finish(&numpad);
}

#[wasm_bindgen_test]
fn digit_button_submits_and_does_not_reactivate_cell() {
    let config = render_page("button", false);
    let numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    click(&by_id("r1c1"));
    let seven = document().query_selector("#numpad-button .numkey:nth-child(2)").unwrap().unwrap();
    click(&seven);
    assert_eq!(*submits.borrow(), vec![("r1c1".to_string(), "7".to_string())]);
    assert!(matches!(numpad.borrow().state(), NumpadState::Submitted(_)));
}

#[wasm_bindgen_test]
fn non_numeric_button_clears_cell() {
    let config = render_page("clear", false);
    let _numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    click(&by_id("r3c5"));
    let clear = document().query_selector("#numpad-clear .numkey:nth-child(3)").unwrap().unwrap();
    click(&clear);
    assert_eq!(*submits.borrow(), vec![("r3c5".to_string(), "0".to_string())]);
}

#[wasm_bindgen_test]
fn dismiss_button_and_escape_close_popup() {
    let config = render_page("dismiss", false);
    let numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    click(&by_id("r1c1"));
    click(&document().query_selector("#numpad-dismiss .numclose").unwrap().unwrap());
    assert!(!popup_open(&config));
    assert_eq!(numpad.borrow().state(), &NumpadState::Idle);

    click(&by_id("r3c5"));
    let event = press("Escape");
    assert!(event.default_prevented());
    assert!(!popup_open(&config));
    assert!(submits.borrow().is_empty());
}

#[wasm_bindgen_test]
fn outside_click_dismisses() {
    let config = render_page("outside", false);
    let numpad = start(config.clone()).unwrap();

    click(&by_id("r1c1"));
    click(&by_id("coords-outside"));
    assert!(!popup_open(&config));
    assert!(!numpad.borrow().is_open());
}

#[wasm_bindgen_test]
fn outside_click_dismisses_without_page_action() {
    let config = render_page("outside-action", false);
    let numpad = start(config.clone()).unwrap();
    let hint = document()
        .query_selector("#hintform-outside-action input[name=\"hint\"]")
        .unwrap()
        .unwrap();

    click(&by_id("r3c5"));
    let event = mouse_click(&hint);
    assert!(event.default_prevented());
    assert!(!hint.dyn_into::<HtmlInputElement>().unwrap().checked());
    assert!(!popup_open(&config));
    assert!(!numpad.borrow().is_open());
}

#[wasm_bindgen_test]
fn outside_click_while_closed_keeps_default() {
    let config = render_page("outside-closed", false);
    let _numpad = start(config).unwrap();

    let event = mouse_click(&by_id("coords-outside-closed"));
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn given_cell_does_not_open_popup() {
    let config = render_page("given", false);
    let numpad = start(config.clone()).unwrap();

    click(&by_id("r2c2"));
    assert!(!popup_open(&config));
    assert!(!numpad.borrow().is_open());
}

#[wasm_bindgen_test]
fn keys_do_nothing_while_closed() {
    let config = render_page("closed", false);
    let _numpad = start(config.clone()).unwrap();
    let submits = intercept_submit(&config.form);

    let event = press("5");
    assert!(!event.default_prevented());
    assert!(submits.borrow().is_empty());
}

#[wasm_bindgen_test]
fn hint_marker_checks_control_on_load() {
    let config = render_page("hint-on", true);
    let _numpad = start(config).unwrap();
    let hint = document()
        .query_selector("#hintform-hint-on input[name=\"hint\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert!(hint.checked());
}

#[wasm_bindgen_test]
fn hint_change_submits_hint_form() {
    let config = render_page("hint-change", false);
    let _numpad = start(config).unwrap();
    let submitted = Rc::new(RefCell::new(0));

    let form = document().query_selector("#hintform-hint-change").unwrap().unwrap();
    let count = submitted.clone();
    let onsubmit = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        *count.borrow_mut() += 1;
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", onsubmit.as_ref().unchecked_ref())
        .unwrap();
    onsubmit.forget();

    let hint = form
        .query_selector("input[name=\"hint\"]")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap();
    assert!(!hint.checked());
    let init = EventInit::new();
    init.set_bubbles(true);
    hint.set_checked(true);
    hint.dispatch_event(&Event::new_with_event_init_dict("change", &init).unwrap())
        .unwrap();
    assert_eq!(*submitted.borrow(), 1);
}
