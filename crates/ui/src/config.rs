//! Selectors and class names the numpad binds to
//!
//! Defaults match the server-rendered grid page. Any of them can be
//! overridden with a `data-*` attribute on the popup element, e.g.
//! `<div id="numpad" data-form="#entry">`.

use web_sys::Element;

/// Selector of the popup element itself (not overridable, it carries the overrides)
pub const POPUP_SELECTOR: &str = "#numpad";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumpadConfig {
    pub popup: String,
    pub cells: String,
    pub digit_keys: String,
    pub dismiss: String,
    pub coords: String,
    pub form: String,
    pub hint_marker: String,
    pub selected_class: String,
    pub open_class: String,
}

impl Default for NumpadConfig {
    fn default() -> Self {
        Self {
            popup: POPUP_SELECTOR.to_string(),
            cells: "td[id][onclick]".to_string(),
            digit_keys: ".numkey".to_string(),
            dismiss: ".numclose".to_string(),
            coords: "#coords".to_string(),
            form: "#numform".to_string(),
            hint_marker: ".hint".to_string(),
            selected_class: "selected".to_string(),
            open_class: "popup".to_string(),
        }
    }
}

impl NumpadConfig {
    /// Apply overrides from an attribute lookup (`data-*` name -> value)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let slots: [(&str, &mut String); 8] = [
            ("data-cells", &mut self.cells),
            ("data-digit-keys", &mut self.digit_keys),
            ("data-dismiss", &mut self.dismiss),
            ("data-coords", &mut self.coords),
            ("data-form", &mut self.form),
            ("data-hint-marker", &mut self.hint_marker),
            ("data-selected-class", &mut self.selected_class),
            ("data-open-class", &mut self.open_class),
        ];
        for (attr, slot) in slots {
            if let Some(value) = lookup(attr) {
                let value = value.trim();
                if !value.is_empty() {
                    *slot = value.to_string();
                }
            }
        }
        self
    }

    /// Load config from the popup element's data attributes
    pub fn from_element(popup: &Element) -> Self {
        Self::default().with_overrides(|attr| popup.get_attribute(attr))
    }
}
