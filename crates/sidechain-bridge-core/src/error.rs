//! Error types for the sidechain bridge core.

use thiserror::Error;

/// Core errors raised while decoding mainchain data or deriving key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Buffer is too short, too long, or otherwise not the expected layout.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A crosschain output payload could not be parsed.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// Key generation rejected its seed.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
