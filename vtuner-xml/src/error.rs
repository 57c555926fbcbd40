//! Error types for menu document rendering

use thiserror::Error;

/// Errors that can occur while rendering items and pages
#[derive(Debug, Error)]
pub enum RenderError {
    /// A station was rendered before the client MAC address was assigned
    #[error("Incomplete station for rendering: station '{id}' has no client MAC address")]
    IncompleteStation { id: String },

    /// A text value contains a character XML 1.0 cannot carry
    #[error("Invalid character {character:?} in <{tag}>")]
    InvalidCharacter { tag: String, character: char },

    /// The XML writer failed
    #[error("XML serialization failed: {0}")]
    Serialization(String),

    /// The serialized document is not valid UTF-8
    #[error("Document encoding failed: {0}")]
    Encoding(String),
}

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
