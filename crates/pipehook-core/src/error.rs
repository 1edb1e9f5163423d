//! Error types for pipehook-core.

use thiserror::Error;

/// Result type alias using pipehook-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for plugin operations
#[derive(Error, Debug)]
pub enum Error {
    /// Build was invoked with a hook name the catalog does not contain.
    /// A caller configuration error; never retried internally.
    #[error("unknown hook name {0}")]
    UnknownHook(String),

    /// The synthesized task document could not be encoded. Indicates a
    /// defect in the hook's template, not in the caller's input.
    #[error("task serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog construction was handed malformed hook metadata. Surfaces at
    /// process startup; a constructed catalog cannot fail discovery.
    #[error("catalog unavailable: {0}")]
    Catalog(String),
}
