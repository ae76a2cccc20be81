use wasm_bindgen::JsValue;

/// Failures while binding the numpad to the page
#[derive(Debug, thiserror::Error)]
pub enum NumpadError {
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("JS error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, NumpadError>;

impl From<JsValue> for NumpadError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<NumpadError> for JsValue {
    fn from(err: NumpadError) -> Self {
        Self::from_str(&err.to_string())
    }
}
