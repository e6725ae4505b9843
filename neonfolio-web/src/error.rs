use wasm_bindgen::JsValue;

/// Error categories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to retrieve browser globals, DOM elements or a rendering context.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Animation, scene or form errors raised by the core crate.
    #[error(transparent)]
    Core(#[from] neonfolio_core::Error),

    /// Request or response handling errors.
    #[error("Data error: {0}")]
    Data(String),

    /// Event listener, timer or animation frame registration errors.
    #[error("Event listener error: {0}")]
    Callback(String),
}

impl Error {
    // Initialization errors
    pub(crate) fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub(crate) fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub(crate) fn mount_point_not_found(selector: &str) -> Self {
        Self::Initialization(format!("Unable to find mount point {selector}"))
    }

    pub(crate) fn element_creation_failed(tag: &str) -> Self {
        Self::Initialization(format!("Failed to create <{tag}> element"))
    }

    pub(crate) fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL2 rendering context".to_string())
    }

    pub(crate) fn canvas_context_failed() -> Self {
        Self::Initialization("Failed to retrieve canvas rendering context".to_string())
    }

    pub(crate) fn debug_api_failed() -> Self {
        Self::Initialization("Failed to expose debugging API on window".to_string())
    }

    // Data errors
    pub(crate) fn request_failed(detail: impl std::fmt::Debug) -> Self {
        Self::Data(format!("Request failed: {detail:?}"))
    }

    pub(crate) fn unexpected_status(status: u16) -> Self {
        Self::Data(format!("Endpoint answered with status {status}"))
    }

    // Callback errors
    pub(crate) fn listener_failed(event: &str) -> Self {
        Self::Callback(format!("Failed to add {event} listener"))
    }

    pub(crate) fn timer_failed(kind: &str) -> Self {
        Self::Callback(format!("Failed to schedule {kind}"))
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
