//! Error types for the Bliss Catering behavior layer.
//!
//! This module defines the centralized error type [`BlissError`] and a type alias
//! [`Result`] used throughout the crate. None of these errors are ever shown to a
//! visitor: initializers log them and leave the page in its server-rendered state.

use thiserror::Error;

/// The main error type for the behavior layer.
///
/// Most failures originate at the browser boundary (a DOM call throwing a
/// JavaScript exception) or while reading page configuration.
///
/// # Examples
///
/// ```
/// use bliss_catering::BlissError;
///
/// let err = BlissError::Config("search_debounce_ms must be a number".to_string());
/// assert_eq!(
///     err.to_string(),
///     "Configuration error: search_debounce_ms must be a number"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BlissError {
    /// A DOM or JavaScript call failed.
    ///
    /// Carries the stringified JavaScript exception. Converted automatically from
    /// `wasm_bindgen::JsValue`.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The page location could not be parsed or rebuilt.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration is invalid.
    ///
    /// Occurs when the inline TOML configuration block cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A timer could not be scheduled.
    #[error("Timer error: {0}")]
    Timer(String),
}

impl From<wasm_bindgen::JsValue> for BlissError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Dom(format!("{value:?}")), Self::Dom)
    }
}

impl From<toml::de::Error> for BlissError {
    fn from(value: toml::de::Error) -> Self {
        Self::Config(value.to_string())
    }
}

/// A specialized `Result` type for behavior-layer operations.
pub type Result<T> = std::result::Result<T, BlissError>;
