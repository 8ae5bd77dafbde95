//! Golden values for the genesis bootstrap.
//!
//! Every node must derive exactly these keys from the genesis passphrases.
//! The expected values were computed with an independent Ed25519, Blake2b
//! and Ristretto255 implementation. The VRF values change if the key
//! expansion, the transcript labels or the proving nonce derivation change,
//! any of which would fork genesis.

use sidechain_bridge::core::{blake2b256, SchnorrkelVrf, VrfKeyGenerator, VrfProof};
use sidechain_bridge::genesis::{
    GENESIS_FORGER_BOX_NONCE, GENESIS_INITIAL_VALUE, GENESIS_REWARD_SEED, GENESIS_STAKE_SEED,
};
use sidechain_bridge::GenesisContext;

const STAKE_SECRET: &str = "bc498f7a153985552d8cb9bb438fffdce706f6d8082cd1cffec2ec8627cd06d3";
const STAKE_PUBLIC: &str = "adf90fc71e3d974929a7f85bb2b06aa8e2973585bb715bb6c91113c91075ff4c";
const REWARD_SECRET: &str = "f402bafd8acf2d76d073fbe6b06d7729edb943e46c26bc70069ba9fe47d096d8";
const REWARD_PUBLIC: &str = "ab4302b8ff6fbd147262841c0a231965ab192c9912e20d45dfe8967453694cfc";
const VRF_PUBLIC: &str = "1c322ec4e32d9522e94e0fc6f03b7e0ff75d34cef6c6d9aa1e6135c1b12e6308";
/// Genesis VRF proof over `b"genesis"`: pre-output, then `c`, then `s`.
const VRF_PROOF_OVER_GENESIS: &str = concat!(
    "6a69548146e011f5024318d6a7c6c2489856e3c59d3c203315ac3b5a90bb7250",
    "e7d58cf494aadf0f5b95f9ad273746690530dd0b0463a9c993f7994708724b0c",
    "7bce21c3b6faa26258887233e43fc4dd4613788cde5920589afd82a34faf6105",
);

#[test]
fn genesis_seeds_stretch_to_known_secrets() {
    assert_eq!(hex::encode(blake2b256(GENESIS_STAKE_SEED)), STAKE_SECRET);
    assert_eq!(hex::encode(blake2b256(GENESIS_REWARD_SEED)), REWARD_SECRET);
}

#[test]
fn genesis_keys_match_golden_values() {
    let genesis = GenesisContext::derive().unwrap();

    assert_eq!(hex::encode(genesis.stake_keys().secret_bytes()), STAKE_SECRET);
    assert_eq!(genesis.stake_keys().proposition().to_hex(), STAKE_PUBLIC);
    assert_eq!(hex::encode(genesis.reward_keys().secret_bytes()), REWARD_SECRET);
    assert_eq!(genesis.reward_keys().proposition().to_hex(), REWARD_PUBLIC);
}

#[test]
fn genesis_forger_box_matches_golden_values() {
    let forger_box = *GenesisContext::derive().unwrap().forger_box();

    assert_eq!(forger_box.proposition.to_hex(), STAKE_PUBLIC);
    assert_eq!(forger_box.reward_proposition.to_hex(), REWARD_PUBLIC);
    assert_eq!(forger_box.nonce, GENESIS_FORGER_BOX_NONCE);
    assert_eq!(forger_box.value, GENESIS_INITIAL_VALUE);
}

#[test]
fn genesis_vrf_key_matches_golden_value() {
    let genesis = GenesisContext::derive().unwrap();

    assert_eq!(genesis.vrf_public().to_hex(), VRF_PUBLIC);
    assert_eq!(genesis.forger_box().vrf_public_key.to_hex(), VRF_PUBLIC);
}

#[test]
fn genesis_vrf_key_is_seeded_by_reward_secret() {
    let reward_secret = hex::decode(REWARD_SECRET).unwrap();
    let (_, public) = SchnorrkelVrf.generate(&reward_secret).unwrap();

    assert_eq!(public.to_hex(), VRF_PUBLIC);
}

#[test]
fn genesis_vrf_proof_matches_golden_value() {
    let genesis = GenesisContext::derive().unwrap();
    let proof = genesis.vrf_secret().prove(b"genesis");

    assert_eq!(hex::encode(proof.to_bytes()), VRF_PROOF_OVER_GENESIS);

    let pinned = VrfProof::from_bytes(&hex::decode(VRF_PROOF_OVER_GENESIS).unwrap()).unwrap();
    assert!(genesis.vrf_public().verify(&pinned, b"genesis"));
    assert!(!genesis.vrf_public().verify(&pinned, b"genesis!"));
}
