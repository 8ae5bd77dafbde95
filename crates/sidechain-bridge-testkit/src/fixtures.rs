//! Test fixtures and helpers.
//!
//! Deterministic builders for records and VRF material, so tests in any
//! crate can reproduce the same values from a single number.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use sidechain_bridge::{ForwardTransfer, SidechainCreation};
use sidechain_bridge_core::vrf::{SchnorrkelVrf, VrfKeyGenerator};
use sidechain_bridge_core::{
    ForwardTransferOutput, Result, SidechainCreationOutput, SidechainId, TxHash, VrfProof,
    VrfPublicKey,
};

/// Sidechain id used by fixtures unless a test picks its own.
pub const FIXTURE_SIDECHAIN_ID: SidechainId = SidechainId([0x5c; 32]);

/// A reproducible VRF proof with everything needed to verify it.
#[derive(Debug, Clone)]
pub struct VrfFixture {
    pub public_key: VrfPublicKey,
    pub message: [u8; 32],
    pub proof: VrfProof,
}

/// Generate a VRF proof from a numeric seed.
///
/// The seeded RNG yields a 32-byte key seed, then a 32-byte message; the
/// derived key proves the message.
pub fn generate_vrf_fixture(seed: u64) -> VrfFixture {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut vrf_seed = [0u8; 32];
    rng.fill_bytes(&mut vrf_seed);
    let (secret, public_key) = SchnorrkelVrf
        .generate(&vrf_seed)
        .expect("32-byte seed is always accepted");

    let mut message = [0u8; 32];
    rng.fill_bytes(&mut message);

    VrfFixture {
        public_key,
        message,
        proof: secret.prove(&message),
    }
}

/// Just the proof from [`generate_vrf_fixture`].
pub fn generate_proof(seed: u64) -> VrfProof {
    generate_vrf_fixture(seed).proof
}

/// A forward transfer to `destination` (given in mainchain order).
pub fn forward_transfer(
    destination: [u8; 32],
    amount: u64,
    tx_hash: TxHash,
    index: u32,
) -> ForwardTransfer {
    let output = ForwardTransferOutput::new(amount, destination, FIXTURE_SIDECHAIN_ID);
    ForwardTransfer::new(output, tx_hash, index)
}

/// A sidechain creation with the given epoch length.
///
/// A zero epoch length is rejected just as the mainchain decoder would.
pub fn sidechain_creation(
    withdrawal_epoch_length: u32,
    tx_hash: TxHash,
    index: u32,
) -> Result<SidechainCreation> {
    let output = SidechainCreationOutput::new(
        FIXTURE_SIDECHAIN_ID,
        withdrawal_epoch_length,
        0,
        [0u8; 32],
    )?;
    Ok(SidechainCreation::new(output, tx_hash, index))
}

/// A 32-byte mainchain-order destination whose first 20 bytes are `key`
/// and whose remainder is zero.
pub fn padded_destination(key: &[u8; 20]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[..20].copy_from_slice(key);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidechain_bridge::SidechainRelatedMainchainOutput;
    use sidechain_bridge_core::CoreError;

    #[test]
    fn test_vrf_fixture_verifies() {
        let fixture = generate_vrf_fixture(7);
        assert!(fixture.public_key.verify(&fixture.proof, &fixture.message));
    }

    #[test]
    fn test_vrf_fixture_reproducible() {
        assert_eq!(generate_proof(1).to_bytes(), generate_proof(1).to_bytes());
        assert_ne!(generate_proof(1).to_bytes(), generate_proof(2).to_bytes());
    }

    #[test]
    fn test_fixture_records() {
        let ft = forward_transfer([0x01; 32], 5, TxHash::ZERO, 0);
        assert_eq!(ft.sidechain_id(), FIXTURE_SIDECHAIN_ID);

        let sc = sidechain_creation(720, TxHash::ZERO, 0).unwrap();
        assert_eq!(sc.withdrawal_epoch_length(), 720);
        assert_eq!(SidechainCreation::parse_bytes(&sc.bytes()).unwrap(), sc);

        let err = sidechain_creation(0, TxHash::ZERO, 0).unwrap_err();
        assert!(matches!(err, CoreError::DecodeFailure(_)));
    }

    #[test]
    fn test_padded_destination() {
        let dest = padded_destination(&[0xee; 20]);
        assert_eq!(&dest[..20], &[0xee; 20]);
        assert_eq!(&dest[20..], &[0u8; 12]);
    }
}
