use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PortalError {
    /// The browser refused to register the ramp interval.
    #[error("could not schedule ramp timer: {0}")]
    Schedule(String),
}

impl PortalError {
    pub fn schedule(cause: JsValue) -> Self {
        PortalError::Schedule(cause.as_string().unwrap_or_else(|| format!("{:?}", cause)))
    }
}
