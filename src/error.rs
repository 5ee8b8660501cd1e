//! Error types for the kargo-wire codec
//!
//! The converters themselves are infallible. Errors only arise at the byte
//! and manifest boundary handled by [`crate::codec`].

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading manifests or wire bytes
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest is not valid YAML, or does not match its kind
    #[error("Failed to parse manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Bytes are not a valid wire message
    #[error("Failed to decode wire message: {0}")]
    Decode(#[from] prost::DecodeError),

    /// Manifest has no `kind`
    #[error("Manifest has no kind")]
    MissingKind,

    /// Manifest `kind` is not a Kargo resource
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),
}
