//! # Sidechain Bridge Testkit
//!
//! Testing utilities for the sidechain bridge.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: fixed inputs with independently computed hashes,
//!   nonces and encodings
//! - **Generators**: proptest strategies for records and outputs
//! - **Fixtures**: deterministic record builders and reproducible VRF proofs
//!
//! ## Golden Vectors
//!
//! ```rust
//! use sidechain_bridge_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, actual) in verify_all_vectors() {
//!     assert!(matches, "{}: {}", name, actual);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sidechain_bridge::SidechainRelatedMainchainOutput;
//! use sidechain_bridge_testkit::generators::forward_transfer;
//!
//! proptest! {
//!     #[test]
//!     fn identity_hash_is_deterministic(ft in forward_transfer()) {
//!         prop_assert_eq!(ft.identity_hash(), ft.identity_hash());
//!     }
//! }
//! ```
//!
//! ## VRF Fixtures
//!
//! ```rust
//! use sidechain_bridge_testkit::fixtures::generate_vrf_fixture;
//!
//! let fixture = generate_vrf_fixture(42);
//! assert!(fixture.public_key.verify(&fixture.proof, &fixture.message));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{generate_proof, generate_vrf_fixture, VrfFixture};
pub use vectors::{
    forward_transfer_vectors, sidechain_creation_vectors, verify_all_vectors, vrf_vectors,
};
