//! Sidechain-related mainchain outputs: crosschain outputs pinned to the
//! mainchain transaction that carried them.
//!
//! A record is `(output, containing_tx_hash, index)`. Its identity hash is a
//! pure function of those three values and matches the commitment the
//! mainchain computes over the same output, so both chains agree on it
//! byte for byte.
//!
//! Record encoding:
//!
//! ```text
//! [ output payload: O::SIZE bytes ][ containing tx hash: 32 ][ index: u32 BE ]
//! ```

use std::fmt;

use sidechain_bridge_core::codec::{reverse_bytes, Reader};
use sidechain_bridge_core::crypto::double_sha256;
use sidechain_bridge_core::{CrosschainOutput, SidechainBox, SidechainId, TxHash};

use crate::error::{BridgeError, Result};
use crate::forward_transfer::ForwardTransfer;
use crate::genesis::GenesisContext;
use crate::sidechain_creation::SidechainCreation;

/// Bytes appended after the output payload: tx hash plus index.
pub const RECORD_SUFFIX_LEN: usize = 32 + 4;

/// A crosschain output together with where on the mainchain it was seen.
pub trait SidechainRelatedMainchainOutput: Sized {
    /// The decoded mainchain payload.
    type Output: CrosschainOutput;

    /// The box this record converts into.
    type Target: Into<SidechainBox>;

    /// Build a record from its parts.
    fn from_parts(output: Self::Output, containing_tx_hash: TxHash, index: u32) -> Self;

    fn output(&self) -> &Self::Output;

    /// Hash of the mainchain transaction containing the output.
    fn transaction_hash(&self) -> &TxHash;

    /// Position of the output within its transaction.
    fn transaction_index(&self) -> u32;

    /// Globally unique, mainchain-verifiable identity of this record.
    fn identity_hash(&self) -> [u8; 32];

    /// Convert into the sidechain box this output creates.
    fn to_box(&self, genesis: &GenesisContext) -> Self::Target;

    fn sidechain_id(&self) -> SidechainId {
        self.output().sidechain_id()
    }

    /// Encode as `payload || tx_hash || index_be`.
    fn bytes(&self) -> Vec<u8> {
        let mut buf = self.output().bytes();
        buf.reserve(RECORD_SUFFIX_LEN);
        buf.extend_from_slice(&self.transaction_hash().0);
        buf.extend_from_slice(&self.transaction_index().to_be_bytes());
        buf
    }

    /// Decode a record produced by [`bytes`](Self::bytes).
    ///
    /// The buffer must be exactly `Output::SIZE + 36` bytes.
    fn parse_bytes(bytes: &[u8]) -> Result<Self> {
        let expected = Self::Output::SIZE + RECORD_SUFFIX_LEN;
        if bytes.len() < expected {
            return Err(BridgeError::MalformedInput(format!(
                "input data corrupted: expected {} bytes, got {}",
                expected,
                bytes.len()
            )));
        }

        let (output, consumed) = Self::Output::decode(bytes, 0)?;
        let mut reader = Reader::new(bytes, consumed);
        let containing_tx_hash = TxHash(reader.read_array32()?);
        let index = reader.read_u32_be()?;
        reader.finish()?;

        Ok(Self::from_parts(output, containing_tx_hash, index))
    }
}

/// Double SHA-256 over `output_hash || tx_hash || index`, reversed into
/// mainchain display order.
///
/// The index is the big-endian index byte-reversed, i.e. little-endian,
/// which is how the mainchain serializes it.
pub(crate) fn chained_identity_hash(
    output_hash: &[u8; 32],
    tx_hash: &[u8; 32],
    index: u32,
) -> [u8; 32] {
    let mut buf = Vec::with_capacity(32 + 32 + 4);
    buf.extend_from_slice(output_hash);
    buf.extend_from_slice(tx_hash);
    buf.extend_from_slice(&reverse_bytes(&index.to_be_bytes()));
    reverse_bytes(&double_sha256(&buf))
}

/// Type tag used when records of both kinds are stored together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MainchainOutputKind {
    ForwardTransfer = 1,
    SidechainCreation = 2,
}

impl MainchainOutputKind {
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::ForwardTransfer),
            2 => Some(Self::SidechainCreation),
            _ => None,
        }
    }
}

/// Either kind of sidechain-related mainchain output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainchainOutput {
    ForwardTransfer(ForwardTransfer),
    SidechainCreation(SidechainCreation),
}

impl MainchainOutput {
    pub fn kind(&self) -> MainchainOutputKind {
        match self {
            Self::ForwardTransfer(_) => MainchainOutputKind::ForwardTransfer,
            Self::SidechainCreation(_) => MainchainOutputKind::SidechainCreation,
        }
    }

    pub fn identity_hash(&self) -> [u8; 32] {
        match self {
            Self::ForwardTransfer(ft) => ft.identity_hash(),
            Self::SidechainCreation(sc) => sc.identity_hash(),
        }
    }

    pub fn to_box(&self, genesis: &GenesisContext) -> SidechainBox {
        match self {
            Self::ForwardTransfer(ft) => ft.to_box(genesis).into(),
            Self::SidechainCreation(sc) => sc.to_box(genesis).into(),
        }
    }

    pub fn transaction_hash(&self) -> &TxHash {
        match self {
            Self::ForwardTransfer(ft) => ft.transaction_hash(),
            Self::SidechainCreation(sc) => sc.transaction_hash(),
        }
    }

    pub fn transaction_index(&self) -> u32 {
        match self {
            Self::ForwardTransfer(ft) => ft.transaction_index(),
            Self::SidechainCreation(sc) => sc.transaction_index(),
        }
    }

    pub fn sidechain_id(&self) -> SidechainId {
        match self {
            Self::ForwardTransfer(ft) => ft.sidechain_id(),
            Self::SidechainCreation(sc) => sc.sidechain_id(),
        }
    }

    /// Untagged record encoding.
    pub fn bytes(&self) -> Vec<u8> {
        match self {
            Self::ForwardTransfer(ft) => ft.bytes(),
            Self::SidechainCreation(sc) => sc.bytes(),
        }
    }

    /// Record encoding prefixed with its one-byte kind tag.
    pub fn tagged_bytes(&self) -> Vec<u8> {
        let body = self.bytes();
        let mut buf = Vec::with_capacity(1 + body.len());
        buf.push(self.kind().to_u8());
        buf.extend_from_slice(&body);
        buf
    }

    /// Decode a buffer produced by [`tagged_bytes`](Self::tagged_bytes).
    pub fn parse_tagged(bytes: &[u8]) -> Result<Self> {
        let (&tag, body) = bytes
            .split_first()
            .ok_or_else(|| BridgeError::MalformedInput("empty buffer".into()))?;

        match MainchainOutputKind::from_u8(tag) {
            Some(MainchainOutputKind::ForwardTransfer) => {
                ForwardTransfer::parse_bytes(body).map(Self::ForwardTransfer)
            }
            Some(MainchainOutputKind::SidechainCreation) => {
                SidechainCreation::parse_bytes(body).map(Self::SidechainCreation)
            }
            None => Err(BridgeError::MalformedInput(format!(
                "unknown output kind tag: {}",
                tag
            ))),
        }
    }
}

impl From<ForwardTransfer> for MainchainOutput {
    fn from(ft: ForwardTransfer) -> Self {
        Self::ForwardTransfer(ft)
    }
}

impl From<SidechainCreation> for MainchainOutput {
    fn from(sc: SidechainCreation) -> Self {
        Self::SidechainCreation(sc)
    }
}

impl fmt::Display for MainchainOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForwardTransfer(ft) => fmt::Display::fmt(ft, f),
            Self::SidechainCreation(sc) => fmt::Display::fmt(sc, f),
        }
    }
}
