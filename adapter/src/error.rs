use clay_shared::PropsError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors surfaced by the render entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Props(#[from] PropsError),

    /// No element with this id exists in the current document.
    #[error("mount point not found: {0}")]
    MountPointNotFound(String),

    /// The browser rejected a DOM operation, e.g. an invalid attribute name.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl AdapterError {
    pub(crate) fn dom(err: JsValue) -> Self {
        let message = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        AdapterError::Dom(message)
    }
}
