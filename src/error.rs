//! Crate error type.
//!
//! Page units never surface these to the visitor. DOM hosts log them and stop
//! setting up the affected unit; pure parsers return them to the caller.

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("browser window unavailable")]
    NoBrowser,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("invalid time: {0:?}")]
    InvalidTime(String),
    #[error("date format error: {0}")]
    DateFormat(#[from] time::error::Format),
    #[error("site config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    InvalidConfig(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for ScriptError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
