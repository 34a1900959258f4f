//! Error types shared by the settings loader and the browser glue.
//!
//! None of these reach the user. Callers log them and switch the affected
//! subsystem off.

use thiserror::Error;

/// Errors produced while wiring the page or loading settings.
#[derive(Debug, Error)]
pub enum StarfieldError {
    /// A required DOM element was not found.
    #[error("required element not found: {0}")]
    MissingElement(String),

    /// An element exists but is not of the expected kind.
    #[error("element '{id}' is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// The host refused to hand out a rendering context.
    #[error("{0} context unavailable")]
    ContextUnavailable(&'static str),

    /// There is no drawing surface at all.
    #[error("no drawing surface")]
    NoSurface,

    /// The drawing surface was removed from the document.
    #[error("drawing surface is detached")]
    SurfaceDetached,

    /// Settings parsed but describe an unusable configuration.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON failed to parse.
    #[error("settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A host API call threw.
    #[error("host call failed: {0}")]
    Js(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_element() {
        let err = StarfieldError::MissingElement("#particles-canvas".into());
        assert!(err.to_string().contains("#particles-canvas"));
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StarfieldError = parse.into();
        assert!(matches!(err, StarfieldError::Json(_)));
    }
}
