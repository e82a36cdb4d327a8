use thiserror::Error;

/// Errors raised by the projection engine at its configuration boundary.
///
/// Absence is never an error: an unresolved path, an unset input, or an
/// empty projection all surface as `None` from the projection functions.
/// Per-path malformed selection entries are skipped, not raised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The configured output mode is not one of `object`, `flattened`, `array`.
    #[error("Invalid mode: {0}")]
    InvalidMode(String),

    /// The selection decoded to a JSON value that is not an array.
    #[error("Selected paths must be an array")]
    SelectionNotArray,

    /// The selection string is not valid JSON.
    #[error("Error parsing selected paths: {0}")]
    SelectionParse(String),
}
