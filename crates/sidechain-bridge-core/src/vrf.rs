//! Verifiable random function keys and proofs.
//!
//! The bridge only needs three things from a VRF: a keypair derived
//! deterministically from a seed, a proof over a message, and verification
//! of that proof. [`VrfKeyGenerator`] is that seam; [`SchnorrkelVrf`] backs
//! it with schnorrkel's Ristretto255 VRF.
//!
//! Proving draws its witness nonce from an RNG seeded by
//! Blake2b-256(secret || message), so the same key over the same message
//! always yields the same proof bytes.

use rand::rngs::StdRng;
use rand::SeedableRng;
use schnorrkel::context::attach_rng;
use schnorrkel::vrf::{VRFPreOut, VRFProof};
use schnorrkel::{signing_context, ExpansionMode, MiniSecretKey, PublicKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::blake2b256_concat;
use crate::error::{CoreError, Result};

/// Signing context bound into every VRF transcript.
pub const VRF_CONTEXT: &[u8] = b"sidechain-bridge-vrf-v0";

/// Label of the transcript used for the DLEQ proof.
const DLEQ_LABEL: &[u8] = b"VRF";

/// Domain tag for the proving nonce.
const NONCE_DOMAIN: &[u8] = b"sidechain-bridge-vrf-nonce";

/// Required seed length for key generation.
pub const VRF_SEED_LENGTH: usize = 32;

/// Serialized proof length: 32-byte pre-output followed by a 64-byte proof.
pub const VRF_PROOF_LENGTH: usize = 96;

/// Source of VRF keypairs.
pub trait VrfKeyGenerator {
    /// Derive a keypair from `seed`. The same seed always yields the same keys.
    fn generate(&self, seed: &[u8]) -> Result<(VrfSecretKey, VrfPublicKey)>;
}

/// The schnorrkel-backed VRF.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchnorrkelVrf;

impl VrfKeyGenerator for SchnorrkelVrf {
    fn generate(&self, seed: &[u8]) -> Result<(VrfSecretKey, VrfPublicKey)> {
        if seed.len() != VRF_SEED_LENGTH {
            return Err(CoreError::InvalidSeed(format!(
                "vrf seed must be {} bytes, got {}",
                VRF_SEED_LENGTH,
                seed.len()
            )));
        }
        let mini =
            MiniSecretKey::from_bytes(seed).map_err(|e| CoreError::InvalidSeed(e.to_string()))?;
        let keypair = mini.expand_to_keypair(ExpansionMode::Ed25519);
        let public = VrfPublicKey(keypair.public.to_bytes());
        Ok((VrfSecretKey { keypair }, public))
    }
}

/// A VRF secret key (with its public half, which proving needs).
#[derive(Clone)]
pub struct VrfSecretKey {
    keypair: schnorrkel::Keypair,
}

impl VrfSecretKey {
    /// The matching public key.
    pub fn public_key(&self) -> VrfPublicKey {
        VrfPublicKey(self.keypair.public.to_bytes())
    }

    /// Produce a proof over `message`.
    pub fn prove(&self, message: &[u8]) -> VrfProof {
        let secret = self.keypair.secret.to_bytes();
        let nonce_seed = blake2b256_concat(&[NONCE_DOMAIN, &secret[..], message]);
        let rng = StdRng::from_seed(nonce_seed);

        let transcript = signing_context(VRF_CONTEXT).bytes(message);
        let extra = attach_rng(merlin::Transcript::new(DLEQ_LABEL), rng);
        let (inout, proof, _) = self.keypair.vrf_sign_extra(transcript, extra);

        VrfProof {
            pre_output: inout.to_preout().to_bytes(),
            proof: proof.to_bytes(),
        }
    }
}

impl fmt::Debug for VrfSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VrfSecretKey({:?})", self.public_key())
    }
}

/// A 32-byte VRF public key (compressed Ristretto point).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VrfPublicKey(pub [u8; 32]);

impl VrfPublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Check `proof` over `message`. Malformed keys or proofs verify as false.
    pub fn verify(&self, proof: &VrfProof, message: &[u8]) -> bool {
        let Ok(public) = PublicKey::from_bytes(&self.0) else {
            return false;
        };
        let Ok(pre_output) = VRFPreOut::from_bytes(&proof.pre_output) else {
            return false;
        };
        let Ok(dleq) = VRFProof::from_bytes(&proof.proof) else {
            return false;
        };

        let transcript = signing_context(VRF_CONTEXT).bytes(message);
        public.vrf_verify(transcript, &pre_output, &dleq).is_ok()
    }
}

impl fmt::Debug for VrfPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VrfPub({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for VrfPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A VRF proof: the pre-output point and the DLEQ proof binding it to the key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct VrfProof {
    pre_output: [u8; 32],
    proof: [u8; 64],
}

impl VrfProof {
    /// Serialize as `pre_output || proof`.
    pub fn to_bytes(&self) -> [u8; VRF_PROOF_LENGTH] {
        let mut out = [0u8; VRF_PROOF_LENGTH];
        out[..32].copy_from_slice(&self.pre_output);
        out[32..].copy_from_slice(&self.proof);
        out
    }

    /// Parse a serialized proof. Only the length is checked here; point
    /// validity is checked by [`VrfPublicKey::verify`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != VRF_PROOF_LENGTH {
            return Err(CoreError::MalformedInput(format!(
                "vrf proof must be {} bytes, got {}",
                VRF_PROOF_LENGTH,
                bytes.len()
            )));
        }
        let mut pre_output = [0u8; 32];
        let mut proof = [0u8; 64];
        pre_output.copy_from_slice(&bytes[..32]);
        proof.copy_from_slice(&bytes[32..]);
        Ok(Self { pre_output, proof })
    }

    /// The VRF pre-output, from which randomness is derived.
    pub fn pre_output(&self) -> &[u8; 32] {
        &self.pre_output
    }
}

impl fmt::Debug for VrfProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VrfProof({}...)", &hex::encode(self.pre_output)[..16])
    }
}
