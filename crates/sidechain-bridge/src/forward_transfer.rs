//! Forward transfers: coins sent from the mainchain to a sidechain address.

use std::fmt;

use sidechain_bridge_core::crypto::blake2b256_concat;
use sidechain_bridge_core::{CrosschainOutput, ForwardTransferOutput, TxHash, ZenBox};

use crate::genesis::GenesisContext;
use crate::output::{chained_identity_hash, SidechainRelatedMainchainOutput};

/// A forward transfer output and its position on the mainchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardTransfer {
    output: ForwardTransferOutput,
    containing_tx_hash: TxHash,
    index: u32,
}

impl ForwardTransfer {
    pub fn new(output: ForwardTransferOutput, containing_tx_hash: TxHash, index: u32) -> Self {
        Self {
            output,
            containing_tx_hash,
            index,
        }
    }

    pub fn forward_transfer_output(&self) -> &ForwardTransferOutput {
        &self.output
    }

    /// Nonce of the derived box: the first 8 bytes, big-endian, of
    /// Blake2b-256(tx_hash || index_be).
    pub fn box_nonce(&self) -> u64 {
        let hash = blake2b256_concat(&[
            &self.containing_tx_hash.0[..],
            &self.index.to_be_bytes()[..],
        ]);
        let mut head = [0u8; 8];
        head.copy_from_slice(&hash[..8]);
        u64::from_be_bytes(head)
    }

    /// Derive the box without a genesis context; forward transfers never
    /// need one.
    pub fn derive_box(&self) -> ZenBox {
        // The output stores the destination in mainchain LE order; sidechain
        // credentials are BE. Skipping the reversal pays the wrong owner.
        ZenBox::new(self.output.destination(), self.output.amount, self.box_nonce())
    }
}

impl SidechainRelatedMainchainOutput for ForwardTransfer {
    type Output = ForwardTransferOutput;
    type Target = ZenBox;

    fn from_parts(output: ForwardTransferOutput, containing_tx_hash: TxHash, index: u32) -> Self {
        Self::new(output, containing_tx_hash, index)
    }

    fn output(&self) -> &ForwardTransferOutput {
        &self.output
    }

    fn transaction_hash(&self) -> &TxHash {
        &self.containing_tx_hash
    }

    fn transaction_index(&self) -> u32 {
        self.index
    }

    fn identity_hash(&self) -> [u8; 32] {
        chained_identity_hash(&self.output.hash(), &self.containing_tx_hash.0, self.index)
    }

    fn to_box(&self, _genesis: &GenesisContext) -> ZenBox {
        self.derive_box()
    }
}

impl fmt::Display for ForwardTransfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForwardTransfer {{ tx_hash: {}, index: {}, amount: {}, sidechain_id: {} }}",
            self.containing_tx_hash,
            self.index,
            self.output.amount,
            self.output.sidechain_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use crate::output::RECORD_SUFFIX_LEN;
    use sidechain_bridge_core::crypto::double_sha256;
    use sidechain_bridge_core::{CoinBox, SidechainId};

    fn output(amount: u64) -> ForwardTransferOutput {
        let mut proposition = [0u8; 32];
        for (i, b) in proposition.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(7);
        }
        ForwardTransferOutput::new(amount, proposition, SidechainId([0x5c; 32]))
    }

    #[test]
    fn test_bytes_layout() {
        let ft = ForwardTransfer::new(output(1), TxHash([0xab; 32]), 0x0000_0102);
        let bytes = ft.bytes();

        assert_eq!(bytes.len(), ForwardTransferOutput::SIZE + RECORD_SUFFIX_LEN);
        assert_eq!(&bytes[..72], ft.output().bytes().as_slice());
        assert_eq!(&bytes[72..104], &[0xab; 32]);
        assert_eq!(&bytes[104..], &[0x00, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_parse_roundtrip() {
        let ft = ForwardTransfer::new(output(99), TxHash([0x01; 32]), 17);
        let parsed = ForwardTransfer::parse_bytes(&ft.bytes()).unwrap();
        assert_eq!(parsed, ft);
    }

    #[test]
    fn test_parse_rejects_short_buffer() {
        let bytes = ForwardTransfer::new(output(99), TxHash([0x01; 32]), 17).bytes();
        let err = ForwardTransfer::parse_bytes(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));
    }

    #[test]
    fn test_parse_rejects_trailing_bytes() {
        let mut bytes = ForwardTransfer::new(output(99), TxHash([0x01; 32]), 17).bytes();
        bytes.push(0);
        let err = ForwardTransfer::parse_bytes(&bytes).unwrap_err();
        assert!(matches!(err, BridgeError::MalformedInput(_)));
    }

    #[test]
    fn test_identity_hash_scheme() {
        let ft = ForwardTransfer::new(output(5), TxHash([0x10; 32]), 3);

        let mut preimage = Vec::new();
        preimage.extend_from_slice(&ft.output().hash());
        preimage.extend_from_slice(&[0x10; 32]);
        preimage.extend_from_slice(&[3, 0, 0, 0]);
        let mut expected = double_sha256(&preimage);
        expected.reverse();

        assert_eq!(ft.identity_hash(), expected);
    }

    #[test]
    fn test_identity_hash_depends_on_every_part() {
        let base = ForwardTransfer::new(output(5), TxHash([0x10; 32]), 3);
        let other_output = ForwardTransfer::new(output(6), TxHash([0x10; 32]), 3);
        let other_tx = ForwardTransfer::new(output(5), TxHash([0x11; 32]), 3);
        let other_index = ForwardTransfer::new(output(5), TxHash([0x10; 32]), 4);

        assert_ne!(base.identity_hash(), other_output.identity_hash());
        assert_ne!(base.identity_hash(), other_tx.identity_hash());
        assert_ne!(base.identity_hash(), other_index.identity_hash());
    }

    #[test]
    fn test_box_owner_is_reversed_destination() {
        let out = output(1_234);
        let ft = ForwardTransfer::new(out, TxHash::ZERO, 0);
        let zen = ft.derive_box();

        let mut expected = *out.proposition_bytes();
        expected.reverse();
        assert_eq!(zen.proposition().0, expected);
        assert_eq!(zen.value(), 1_234);
    }

    #[test]
    fn test_box_nonce_derivation() {
        let ft = ForwardTransfer::new(output(1), TxHash([0x77; 32]), 9);

        let mut preimage = vec![0x77; 32];
        preimage.extend_from_slice(&9u32.to_be_bytes());
        let hash = sidechain_bridge_core::blake2b256(&preimage);
        let expected = u64::from_be_bytes(hash[..8].try_into().unwrap());

        assert_eq!(ft.box_nonce(), expected);
        assert_eq!(ft.derive_box().nonce, expected);
    }

    #[test]
    fn test_to_box_ignores_genesis() {
        let genesis = GenesisContext::derive().unwrap();
        let ft = ForwardTransfer::new(output(3), TxHash([0x01; 32]), 1);
        assert_eq!(ft.to_box(&genesis), ft.derive_box());
    }

    #[test]
    fn test_display() {
        let ft = ForwardTransfer::new(output(3), TxHash([0x01; 32]), 1);
        let text = ft.to_string();
        assert!(text.starts_with("ForwardTransfer {"));
        assert!(text.contains("amount: 3"));
    }
}
