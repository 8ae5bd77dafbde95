//! Cryptographic primitives: double SHA-256, Blake2b-256 and Ed25519 keys.
//!
//! Double SHA-256 is the mainchain's hash, so anything the mainchain commits
//! to goes through [`double_sha256`]. Blake2b-256 is the sidechain's hash and
//! is used for nonces and seed stretching.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::SigningKey;
use sha2::Sha256;
use std::fmt;

use crate::types::Proposition;

type Blake2b256 = Blake2b<U32>;

/// SHA-256 applied twice, as the mainchain hashes transactions and blocks.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Single-pass Blake2b with a 256-bit digest.
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

/// Blake2b-256 over the concatenation of several parts.
pub fn blake2b256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// An Ed25519 keypair owning sidechain boxes.
///
/// This wraps ed25519-dalek's SigningKey.
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Create from a 32-byte secret seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Derive a keypair from an arbitrary-length passphrase.
    ///
    /// The secret seed is Blake2b-256(passphrase). Deterministic and not a
    /// security primitive: anyone knowing the passphrase knows the key.
    pub fn from_passphrase(passphrase: &[u8]) -> Self {
        Self::from_seed(&blake2b256(passphrase))
    }

    /// The public key as an owner credential.
    pub fn proposition(&self) -> Proposition {
        Proposition(self.signing_key.verifying_key().to_bytes())
    }

    /// Get the raw seed bytes (secret key material).
    pub fn secret_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair({:?})", self.proposition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_sha256_empty() {
        // Well-known: SHA256(SHA256(""))
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_blake2b256_empty() {
        assert_eq!(
            hex::encode(blake2b256(b"")),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
    }

    #[test]
    fn test_blake2b256_concat_matches_single_buffer() {
        let joined = blake2b256(b"helloworld");
        let parts = blake2b256_concat(&[&b"hello"[..], &b"world"[..]]);
        assert_eq!(joined, parts);
    }

    #[test]
    fn test_keypair_deterministic_from_passphrase() {
        let kp1 = Keypair::from_passphrase(b"RewardKeyPair");
        let kp2 = Keypair::from_passphrase(b"RewardKeyPair");
        assert_eq!(kp1.proposition(), kp2.proposition());
        assert_eq!(kp1.secret_bytes(), blake2b256(b"RewardKeyPair"));

        let other = Keypair::from_passphrase(b"OtherKeyPair");
        assert_ne!(kp1.proposition(), other.proposition());
    }

    #[test]
    fn test_keypair_from_seed_roundtrips_secret() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        assert_eq!(keypair.secret_bytes(), [0x42; 32]);
        assert_eq!(Keypair::from_seed(&[0x42; 32]).proposition(), keypair.proposition());
    }
}
