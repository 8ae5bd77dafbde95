//! Error types for the bridge.

use sidechain_bridge_core::{CoreError, SidechainId};
use thiserror::Error;

/// Errors that can occur while turning mainchain outputs into boxes.
///
/// None of these are transient: each is a deterministic consequence of the
/// input bytes, so the caller rejects the offending mainchain reference
/// rather than retrying.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Buffer length or framing is wrong.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The embedded crosschain output payload failed to parse.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// Genesis key material could not be derived. Fatal at startup.
    #[error("genesis initialization failed: {0}")]
    GenesisInitFailure(String),

    /// Settings could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Output addressed to a sidechain other than the one this node follows.
    #[error("output for sidechain {found} but node follows {expected}")]
    SidechainMismatch {
        expected: SidechainId,
        found: SidechainId,
    },
}

impl From<CoreError> for BridgeError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::MalformedInput(msg) => BridgeError::MalformedInput(msg),
            CoreError::DecodeFailure(msg) => BridgeError::DecodeFailure(msg),
            CoreError::InvalidSeed(msg) => BridgeError::GenesisInitFailure(msg),
        }
    }
}

/// Result type for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
