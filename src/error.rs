//! Error types for seqweave

use thiserror::Error;

/// Result type alias for seqweave operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when applying transforms to JSON values.
///
/// The typed functions in [`crate::numbers`] and [`crate::strings`] are
/// total and never produce these; only the dynamic layer errors, when the
/// input value has the wrong shape for the requested transform.
#[derive(Error, Debug)]
pub enum Error {
    /// Transform applied to a value of the wrong shape
    #[error("transform error in '{transform}': {message}")]
    Transform {
        /// Name of the transform
        transform: String,
        /// Description of the error
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
