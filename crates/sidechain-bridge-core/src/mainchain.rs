//! Crosschain outputs as they appear inside mainchain transactions.
//!
//! Both layouts are fixed-size. Field bytes are kept exactly as read, so
//! re-encoding a decoded output reproduces the original bytes and thus the
//! original content hash.
//!
//! ```text
//! forward transfer   (72): amount u64 LE | proposition [32] | sidechain_id [32]
//! sidechain creation (76): sidechain_id [32] | withdrawal_epoch_length u32 LE
//!                          | amount u64 LE | address [32]
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::{reverse_bytes, Reader};
use crate::crypto::double_sha256;
use crate::error::{CoreError, Result};
use crate::types::{Proposition, SidechainId};

/// A decoded mainchain crosschain output.
pub trait CrosschainOutput: Sized {
    /// Exact encoded length in bytes.
    const SIZE: usize;

    /// Decode from `bytes` starting at `offset`, returning the output and
    /// the number of bytes consumed.
    fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)>;

    /// The exact mainchain encoding.
    fn bytes(&self) -> Vec<u8>;

    /// Sidechain this output is addressed to.
    fn sidechain_id(&self) -> SidechainId;

    /// Content hash: double SHA-256 of the encoding, byte-reversed into the
    /// order the mainchain displays hashes in.
    fn hash(&self) -> [u8; 32] {
        reverse_bytes(&double_sha256(&self.bytes()))
    }
}

fn decode_failure(kind: &'static str) -> impl FnOnce(CoreError) -> CoreError {
    move |e| CoreError::DecodeFailure(format!("{}: {}", kind, e))
}

/// A transfer of coins from the mainchain to a sidechain address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardTransferOutput {
    /// Amount in the mainchain's smallest unit.
    pub amount: u64,
    /// Destination public key, in mainchain (little-endian) order.
    pub proposition: [u8; 32],
    pub sidechain_id: SidechainId,
}

impl ForwardTransferOutput {
    pub fn new(amount: u64, proposition: [u8; 32], sidechain_id: SidechainId) -> Self {
        Self {
            amount,
            proposition,
            sidechain_id,
        }
    }

    /// Raw destination bytes as stored on the mainchain.
    pub fn proposition_bytes(&self) -> &[u8; 32] {
        &self.proposition
    }

    /// Destination as a sidechain credential (bytes reversed into
    /// big-endian order).
    pub fn destination(&self) -> Proposition {
        Proposition(reverse_bytes(&self.proposition))
    }
}

impl CrosschainOutput for ForwardTransferOutput {
    const SIZE: usize = 8 + 32 + 32;

    fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut reader = Reader::new(bytes, offset);
        let err = || decode_failure("forward transfer");

        let amount = reader.read_u64_le().map_err(err())?;
        let proposition = reader.read_array32().map_err(err())?;
        let sidechain_id = SidechainId(reader.read_array32().map_err(err())?);

        Ok((Self::new(amount, proposition, sidechain_id), Self::SIZE))
    }

    fn bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        buf.extend_from_slice(&self.amount.to_le_bytes());
        buf.extend_from_slice(&self.proposition);
        buf.extend_from_slice(&self.sidechain_id.0);
        buf
    }

    fn sidechain_id(&self) -> SidechainId {
        self.sidechain_id
    }
}

/// The output that registers a new sidechain on the mainchain.
///
/// Fields are private so every value goes through [`Self::new`], which
/// rejects a zero withdrawal epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSidechainCreationOutput")]
pub struct SidechainCreationOutput {
    sidechain_id: SidechainId,
    withdrawal_epoch_length: u32,
    amount: u64,
    address: [u8; 32],
}

#[derive(Deserialize)]
struct RawSidechainCreationOutput {
    sidechain_id: SidechainId,
    withdrawal_epoch_length: u32,
    amount: u64,
    address: [u8; 32],
}

impl TryFrom<RawSidechainCreationOutput> for SidechainCreationOutput {
    type Error = CoreError;

    fn try_from(raw: RawSidechainCreationOutput) -> Result<Self> {
        Self::new(
            raw.sidechain_id,
            raw.withdrawal_epoch_length,
            raw.amount,
            raw.address,
        )
    }
}

impl SidechainCreationOutput {
    pub fn new(
        sidechain_id: SidechainId,
        withdrawal_epoch_length: u32,
        amount: u64,
        address: [u8; 32],
    ) -> Result<Self> {
        if withdrawal_epoch_length == 0 {
            return Err(CoreError::DecodeFailure(
                "sidechain creation: withdrawal epoch length must be positive".into(),
            ));
        }
        Ok(Self {
            sidechain_id,
            withdrawal_epoch_length,
            amount,
            address,
        })
    }

    /// Mainchain blocks per withdrawal epoch. Always positive.
    pub fn withdrawal_epoch_length(&self) -> u32 {
        self.withdrawal_epoch_length
    }

    /// Creation deposit. Recorded on the mainchain only; the sidechain
    /// mints nothing from it.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn address(&self) -> &[u8; 32] {
        &self.address
    }
}

impl CrosschainOutput for SidechainCreationOutput {
    const SIZE: usize = 32 + 4 + 8 + 32;

    fn decode(bytes: &[u8], offset: usize) -> Result<(Self, usize)> {
        let mut reader = Reader::new(bytes, offset);
        let err = || decode_failure("sidechain creation");

        let sidechain_id = SidechainId(reader.read_array32().map_err(err())?);
        let withdrawal_epoch_length = reader.read_u32_le().map_err(err())?;
        let amount = reader.read_u64_le().map_err(err())?;
        let address = reader.read_array32().map_err(err())?;

        let output = Self::new(sidechain_id, withdrawal_epoch_length, amount, address)?;
        Ok((output, Self::SIZE))
    }

    fn bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        buf.extend_from_slice(&self.sidechain_id.0);
        buf.extend_from_slice(&self.withdrawal_epoch_length.to_le_bytes());
        buf.extend_from_slice(&self.amount.to_le_bytes());
        buf.extend_from_slice(&self.address);
        buf
    }

    fn sidechain_id(&self) -> SidechainId {
        self.sidechain_id
    }
}
