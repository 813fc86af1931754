use thiserror::Error;

/// Failures that can occur while talking to the browser environment.
///
/// None of these reach page scripts: the public entry points log them and
/// carry on, so every user-facing operation stays total.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("No global window available")]
    NoWindow,

    #[error("No document attached to the window")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("Failed to create element <{0}>")]
    CreateElement(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl UiError {
    /// Wraps a stringified JS exception.
    pub fn js(message: impl Into<String>) -> Self {
        UiError::Js(message.into())
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
