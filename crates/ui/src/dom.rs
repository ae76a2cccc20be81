use sudoku_numpad_protocol::{CellId, Submission};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlFormElement, HtmlInputElement};

use crate::config::NumpadConfig;
use crate::error::{NumpadError, Result};
use crate::page::Page;

/// Get document helper
pub fn get_document() -> Result<Document> {
    window()
        .ok_or(NumpadError::Unavailable("window"))?
        .document()
        .ok_or(NumpadError::Unavailable("document"))
}

/// First element matching `selector`, or an error naming it
pub fn require(root: &Document, selector: &str) -> Result<Element> {
    root.query_selector(selector)?
        .ok_or_else(|| NumpadError::MissingElement(selector.to_string()))
}

/// All elements matching `selector` under `root`
pub fn select_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// Named input inside `form`
fn form_input(form: &HtmlFormElement, name: &str) -> Result<HtmlInputElement> {
    let selector = format!("input[name=\"{name}\"]");
    form.query_selector(&selector)?
        .ok_or(NumpadError::MissingElement(selector))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| NumpadError::Js(format!("`{name}` field is not an input")))
}

/// Browser implementation of [`Page`]
pub struct DomPage {
    document: Document,
    popup: Element,
    config: NumpadConfig,
}

impl DomPage {
    pub fn new(document: Document, config: NumpadConfig) -> Result<Self> {
        let popup = require(&document, &config.popup)?;
        Ok(Self { document, popup, config })
    }

    pub const fn popup(&self) -> &Element {
        &self.popup
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    pub const fn config(&self) -> &NumpadConfig {
        &self.config
    }

    fn cell_element(&self, cell: &CellId) -> Option<Element> {
        self.document.get_element_by_id(cell.as_str())
    }
}

impl Page for DomPage {
    fn clear_selection_markers(&mut self) {
        match select_all(&self.document, &self.config.cells) {
            Ok(cells) => {
                for el in cells {
                    let _ = el.class_list().remove_1(&self.config.selected_class);
                }
            }
            Err(e) => warn!("clear selection: {e}"),
        }
    }

    fn mark_selected(&mut self, cell: &CellId) {
        if let Some(el) = self.cell_element(cell) {
            let _ = el.class_list().add_1(&self.config.selected_class);
        } else {
            warn!(cell = %cell, "selected cell not in document");
        }
    }

    fn anchor_popup(&mut self, cell: &CellId) {
        if let Some(el) = self.cell_element(cell) {
            if let Err(e) = el.append_child(&self.popup) {
                warn!("anchor popup: {:?}", e);
            }
        }
    }

    fn set_popup_visible(&mut self, visible: bool) {
        let classes = self.popup.class_list();
        let result = if visible {
            classes.add_1(&self.config.open_class)
        } else {
            classes.remove_1(&self.config.open_class)
        };
        if let Err(e) = result {
            warn!("popup visibility: {:?}", e);
        }
    }

    fn show_coords(&mut self, cell: &CellId) {
        if let Ok(Some(el)) = self.document.query_selector(&self.config.coords) {
            el.set_text_content(Some(cell.as_str()));
        }
    }

    fn submit(&mut self, submission: &Submission) -> Result<()> {
        let form = require(&self.document, &self.config.form)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| NumpadError::Js(format!("`{}` is not a form", self.config.form)))?;
        for (name, value) in submission.fields() {
            form_input(&form, name)?.set_value(&value);
        }
        form.request_submit()?;
        Ok(())
    }
}
