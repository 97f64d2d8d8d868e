//! Errors raised while talking to the browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure reaching or querying the document.
#[derive(Debug, Error)]
pub enum DomError {
    /// No `window` global (e.g. running inside a worker).
    #[error("browser window is unavailable")]
    NoWindow,
    /// The window has no document.
    #[error("document is unavailable")]
    NoDocument,
    /// A DOM call threw.
    #[error("{operation} failed: {message}")]
    Js {
        /// DOM operation that failed.
        operation: &'static str,
        /// Rendered JavaScript exception.
        message: String,
    },
}

impl DomError {
    /// Wrap a thrown JavaScript value.
    #[must_use]
    pub fn js(operation: &'static str, value: &JsValue) -> Self {
        Self::Js {
            operation,
            message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        Self::from_str(&err.to_string())
    }
}
