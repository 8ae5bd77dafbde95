//! Sidechain creation: the mainchain output that registers the sidechain.

use std::fmt;

use sidechain_bridge_core::codec::reverse_bytes;
use sidechain_bridge_core::{CrosschainOutput, ForgerBox, SidechainCreationOutput, TxHash};

use crate::genesis::GenesisContext;
use crate::output::{chained_identity_hash, SidechainRelatedMainchainOutput};

/// A sidechain creation output and its position on the mainchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidechainCreation {
    output: SidechainCreationOutput,
    containing_tx_hash: TxHash,
    index: u32,
}

impl SidechainCreation {
    pub fn new(output: SidechainCreationOutput, containing_tx_hash: TxHash, index: u32) -> Self {
        Self {
            output,
            containing_tx_hash,
            index,
        }
    }

    pub fn sidechain_creation_output(&self) -> &SidechainCreationOutput {
        &self.output
    }

    /// Mainchain blocks per withdrawal epoch.
    pub fn withdrawal_epoch_length(&self) -> u32 {
        self.output.withdrawal_epoch_length()
    }
}

impl SidechainRelatedMainchainOutput for SidechainCreation {
    type Output = SidechainCreationOutput;
    type Target = ForgerBox;

    fn from_parts(output: SidechainCreationOutput, containing_tx_hash: TxHash, index: u32) -> Self {
        Self::new(output, containing_tx_hash, index)
    }

    fn output(&self) -> &SidechainCreationOutput {
        &self.output
    }

    fn transaction_hash(&self) -> &TxHash {
        &self.containing_tx_hash
    }

    fn transaction_index(&self) -> u32 {
        self.index
    }

    /// Unlike forward transfers, the mainchain commits to the output hash
    /// and the tx hash in reversed order here. Both must be flipped.
    fn identity_hash(&self) -> [u8; 32] {
        chained_identity_hash(
            &reverse_bytes(&self.output.hash()),
            &self.containing_tx_hash.reversed().0,
            self.index,
        )
    }

    /// Always the genesis forger box: sidechain creation mints no coins.
    fn to_box(&self, genesis: &GenesisContext) -> ForgerBox {
        *genesis.forger_box()
    }
}

impl fmt::Display for SidechainCreation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SidechainCreation {{ tx_hash: {}, index: {}, sidechain_id: {}, \
             withdrawal_epoch_length: {} }}",
            self.containing_tx_hash,
            self.index,
            self.output.sidechain_id(),
            self.output.withdrawal_epoch_length()
        )
    }
}
