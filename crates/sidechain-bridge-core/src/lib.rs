//! # Sidechain Bridge Core
//!
//! Pure primitives for turning mainchain crosschain outputs into sidechain
//! boxes: identifiers, hashes, keys, VRF, box types and the fixed-layout
//! mainchain output decoders.
//!
//! This crate contains no I/O and no logging. Everything is deterministic:
//! the same bytes in always produce the same bytes out, on every node.
//!
//! ## Key Types
//!
//! - [`TxHash`], [`SidechainId`], [`Proposition`] - 32-byte identifiers
//! - [`ForwardTransferOutput`], [`SidechainCreationOutput`] - decoded mainchain outputs
//! - [`ZenBox`], [`ForgerBox`] - sidechain ownership records
//! - [`VrfKeyGenerator`] - seed-to-keypair VRF capability

pub mod boxes;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod mainchain;
pub mod types;
pub mod vrf;

pub use boxes::{CoinBox, ForgerBox, SidechainBox, ZenBox};
pub use crypto::{blake2b256, double_sha256, Keypair};
pub use error::{CoreError, Result};
pub use mainchain::{CrosschainOutput, ForwardTransferOutput, SidechainCreationOutput};
pub use types::{Proposition, SidechainId, TxHash};
pub use vrf::{SchnorrkelVrf, VrfKeyGenerator, VrfProof, VrfPublicKey, VrfSecretKey};
