//! Golden test vectors for cross-implementation verification.
//!
//! The expected values were computed independently from the byte layouts
//! (double SHA-256 and Blake2b-256 over hand-built buffers), so a change to
//! any byte order in the bridge shows up here. The VRF vector was computed
//! with an independent Ristretto255 and merlin transcript implementation.

use sidechain_bridge::{ForwardTransfer, SidechainCreation, SidechainRelatedMainchainOutput};
use sidechain_bridge_core::{
    CrosschainOutput, ForwardTransferOutput, Result, SidechainCreationOutput, SidechainId, TxHash,
};

use crate::fixtures::generate_vrf_fixture;

/// A golden vector for a forward transfer.
#[derive(Debug, Clone)]
pub struct ForwardTransferVector {
    pub name: &'static str,
    pub amount: u64,
    /// Destination in mainchain order.
    pub proposition: [u8; 32],
    pub sidechain_id: [u8; 32],
    pub tx_hash: [u8; 32],
    pub index: u32,
    /// Expected content hash of the output (hex).
    pub expected_output_hash: &'static str,
    /// Expected record identity hash (hex).
    pub expected_identity_hash: &'static str,
    pub expected_nonce: u64,
    /// Expected box owner (hex, sidechain order).
    pub expected_owner: &'static str,
    /// Expected record encoding (hex).
    pub expected_bytes: &'static str,
}

/// A golden vector for a sidechain creation.
#[derive(Debug, Clone)]
pub struct SidechainCreationVector {
    pub name: &'static str,
    pub sidechain_id: [u8; 32],
    pub withdrawal_epoch_length: u32,
    pub amount: u64,
    pub address: [u8; 32],
    pub tx_hash: [u8; 32],
    pub index: u32,
    pub expected_output_hash: &'static str,
    pub expected_identity_hash: &'static str,
}

/// A golden vector for [`generate_vrf_fixture`].
#[derive(Debug, Clone)]
pub struct VrfVector {
    pub name: &'static str,
    pub seed: u64,
    pub expected_public_key: &'static str,
    pub expected_message: &'static str,
    /// Expected proof: pre-output, then the DLEQ `c` and `s` scalars.
    pub expected_proof: &'static str,
}

const fn counting(start: u8) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        out[i] = start + i as u8;
        i += 1;
    }
    out
}

/// All forward transfer vectors.
pub fn forward_transfer_vectors() -> Vec<ForwardTransferVector> {
    vec![
        ForwardTransferVector {
            name: "100 coins, zero tx hash, index 0",
            amount: 100,
            proposition: counting(1),
            sidechain_id: [0x02; 32],
            tx_hash: [0x00; 32],
            index: 0,
            expected_output_hash: "dd74c97267cb230cc2a34929c6b2cf21c8e394c79921247d0a155222566d255c",
            expected_identity_hash: "840ab64af39a17c23a95c784616312425ab0132ed697d6eb893eb7079b5660f6",
            expected_nonce: 11461173196690520649,
            expected_owner: "201f1e1d1c1b1a191817161514131211100f0e0d0c0b0a090807060504030201",
            expected_bytes: concat!(
                "64000000000000000102030405060708090a0b0c0d0e0f101112131415161718",
                "191a1b1c1d1e1f20020202020202020202020202020202020202020202020202",
                "0202020202020202000000000000000000000000000000000000000000000000",
                "000000000000000000000000",
            ),
        },
        ForwardTransferVector {
            name: "10 coins in satoshis, counting tx hash, index 7",
            amount: 1_000_000_000,
            proposition: [0xab; 32],
            sidechain_id: [0x02; 32],
            tx_hash: counting(0),
            index: 7,
            expected_output_hash: "fa024f9970120c791728dfff440dc5dd3b56a744040822ef9fdc0e63531923d1",
            expected_identity_hash: "a0981f8964494c16a8a65497601ecaac43ad9163319d84674f83183ed3d6c3dc",
            expected_nonce: 569442657378390827,
            expected_owner: "abababababababababababababababababababababababababababababababab",
            expected_bytes: concat!(
                "00ca9a3b00000000abababababababababababababababababababababababab",
                "abababababababab020202020202020202020202020202020202020202020202",
                "0202020202020202000102030405060708090a0b0c0d0e0f1011121314151617",
                "18191a1b1c1d1e1f00000007",
            ),
        },
    ]
}

/// All sidechain creation vectors.
pub fn sidechain_creation_vectors() -> Vec<SidechainCreationVector> {
    vec![SidechainCreationVector {
        name: "epoch length 1000",
        sidechain_id: [0x02; 32],
        withdrawal_epoch_length: 1000,
        amount: 0,
        address: [0x00; 32],
        tx_hash: [0x11; 32],
        index: 0,
        expected_output_hash: "0df4b0845dcc141452402a3d137d6452abec6226f2069b20f701e0b964d3311e",
        expected_identity_hash: "eb479f466e52cfa6c0a1840a88e6368791ff37085a8634425574f4cd390ea254",
    }]
}

/// All VRF fixture vectors.
pub fn vrf_vectors() -> Vec<VrfVector> {
    vec![VrfVector {
        name: "fixture seed 42",
        seed: 42,
        expected_public_key: "5c21132549fe8b1603c68ca615fe79263014f3b53002fc9491dc05032765624e",
        expected_message: "ea9f11f8dfb0ca08a8810f9ea39c3a6afb780859e8d8c7bc37b78e2f9b8d68d9",
        expected_proof: concat!(
            "0a9dd34f3c2ad12155774b4cf08b87bee9a3284026403490bdbb9d059dedcb79",
            "6021a56e46af4393e010947f45259fd24deaecd87da3af7fa3d644246f107d08",
            "4a3704862e945f4adf8d47c8d100e27300d606e891b51fede3687349f9dc9a02",
        ),
    }]
}

/// Build the record a forward transfer vector describes.
pub fn forward_transfer_from_vector(v: &ForwardTransferVector) -> ForwardTransfer {
    let output = ForwardTransferOutput::new(v.amount, v.proposition, SidechainId(v.sidechain_id));
    ForwardTransfer::new(output, TxHash(v.tx_hash), v.index)
}

/// Build the record a sidechain creation vector describes.
pub fn sidechain_creation_from_vector(v: &SidechainCreationVector) -> Result<SidechainCreation> {
    let output = SidechainCreationOutput::new(
        SidechainId(v.sidechain_id),
        v.withdrawal_epoch_length,
        v.amount,
        v.address,
    )?;
    Ok(SidechainCreation::new(output, TxHash(v.tx_hash), v.index))
}

/// Check every vector, returning `(name, matches, actual identity hash)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let mut results = Vec::new();

    for v in forward_transfer_vectors() {
        let ft = forward_transfer_from_vector(&v);
        let zen = ft.derive_box();
        let identity = hex::encode(ft.identity_hash());
        let matches = hex::encode(ft.output().hash()) == v.expected_output_hash
            && identity == v.expected_identity_hash
            && zen.nonce == v.expected_nonce
            && zen.proposition.to_hex() == v.expected_owner
            && hex::encode(ft.bytes()) == v.expected_bytes;
        results.push((v.name.to_string(), matches, identity));
    }

    for v in sidechain_creation_vectors() {
        let sc = match sidechain_creation_from_vector(&v) {
            Ok(sc) => sc,
            Err(e) => {
                results.push((v.name.to_string(), false, e.to_string()));
                continue;
            }
        };
        let identity = hex::encode(sc.identity_hash());
        let matches = hex::encode(sc.output().hash()) == v.expected_output_hash
            && identity == v.expected_identity_hash;
        results.push((v.name.to_string(), matches, identity));
    }

    for v in vrf_vectors() {
        let fixture = generate_vrf_fixture(v.seed);
        let proof = hex::encode(fixture.proof.to_bytes());
        let matches = fixture.public_key.to_hex() == v.expected_public_key
            && hex::encode(fixture.message) == v.expected_message
            && proof == v.expected_proof;
        results.push((v.name.to_string(), matches, proof));
    }

    results
}
