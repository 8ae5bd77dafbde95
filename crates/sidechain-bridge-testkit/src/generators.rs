//! Proptest generators for property-based testing.

use proptest::prelude::*;

use sidechain_bridge::{ForwardTransfer, MainchainOutput, SidechainCreation};
use sidechain_bridge_core::{
    ForwardTransferOutput, SidechainCreationOutput, SidechainId, TxHash,
};

/// Generate a random TxHash.
pub fn tx_hash() -> impl Strategy<Value = TxHash> {
    any::<[u8; 32]>().prop_map(TxHash::from_bytes)
}

/// Generate a random SidechainId.
pub fn sidechain_id() -> impl Strategy<Value = SidechainId> {
    any::<[u8; 32]>().prop_map(SidechainId::from_bytes)
}

/// Generate a forward transfer output.
pub fn forward_transfer_output() -> impl Strategy<Value = ForwardTransferOutput> {
    (any::<u64>(), any::<[u8; 32]>(), sidechain_id())
        .prop_map(|(amount, proposition, id)| ForwardTransferOutput::new(amount, proposition, id))
}

/// Generate a sidechain creation output with a positive epoch length.
pub fn sidechain_creation_output() -> impl Strategy<Value = SidechainCreationOutput> {
    (sidechain_id(), 1u32..=u32::MAX, any::<u64>(), any::<[u8; 32]>()).prop_filter_map(
        "withdrawal epoch length must be positive",
        |(id, epoch, amount, address)| {
            SidechainCreationOutput::new(id, epoch, amount, address).ok()
        },
    )
}

/// Generate a forward transfer record.
pub fn forward_transfer() -> impl Strategy<Value = ForwardTransfer> {
    (forward_transfer_output(), tx_hash(), any::<u32>())
        .prop_map(|(output, tx, index)| ForwardTransfer::new(output, tx, index))
}

/// Generate a sidechain creation record.
pub fn sidechain_creation() -> impl Strategy<Value = SidechainCreation> {
    (sidechain_creation_output(), tx_hash(), any::<u32>())
        .prop_map(|(output, tx, index)| SidechainCreation::new(output, tx, index))
}

/// Generate either kind of record.
pub fn mainchain_output() -> impl Strategy<Value = MainchainOutput> {
    prop_oneof![
        forward_transfer().prop_map(MainchainOutput::from),
        sidechain_creation().prop_map(MainchainOutput::from),
    ]
}
