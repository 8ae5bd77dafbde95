//! # Sidechain Bridge
//!
//! Turns economic events observed on the mainchain into sidechain boxes.
//!
//! ## Overview
//!
//! Data flows one way:
//!
//! ```text
//! mainchain bytes -> crosschain output -> record (output, tx hash, index) -> box
//! ```
//!
//! - **Forward transfers** become [`ZenBox`]es owned by the (byte-reversed)
//!   destination key, holding the transferred amount, with a nonce derived
//!   from the containing transaction and index.
//! - **Sidechain creation** becomes the hardcoded genesis [`ForgerBox`],
//!   which is what lets the very first block be forged.
//!
//! Every record has an identity hash that the mainchain can compute
//! independently from its own data.
//!
//! ## Usage
//!
//! ```rust
//! use sidechain_bridge::{
//!     BridgeConfig, ForwardTransfer, GenesisContext, MainchainOutput, MainchainOutputProcessor,
//! };
//! use sidechain_bridge::core::{ForwardTransferOutput, SidechainId, TxHash};
//!
//! // Derive the genesis context once at startup; failure is fatal.
//! let genesis = GenesisContext::global().unwrap();
//! let processor = MainchainOutputProcessor::new(BridgeConfig::default(), genesis);
//!
//! let output = ForwardTransferOutput::new(100, [0x01; 32], SidechainId([0x02; 32]));
//! let ft = ForwardTransfer::new(output, TxHash::ZERO, 0);
//!
//! let outputs: Vec<MainchainOutput> = vec![ft.into()];
//! let derived = processor.process(&outputs).unwrap();
//! assert_eq!(derived.len(), 1);
//! ```
//!
//! ## Re-exports
//!
//! `sidechain_bridge::core` is the primitives crate.

pub mod config;
pub mod error;
pub mod forward_transfer;
pub mod genesis;
pub mod output;
pub mod processor;
pub mod sidechain_creation;

pub use sidechain_bridge_core as core;

pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use forward_transfer::ForwardTransfer;
pub use genesis::GenesisContext;
pub use output::{MainchainOutput, MainchainOutputKind, SidechainRelatedMainchainOutput};
pub use processor::{DerivedBox, MainchainOutputProcessor};
pub use sidechain_creation::SidechainCreation;

pub use sidechain_bridge_core::{
    CoinBox, ForgerBox, Proposition, SidechainBox, SidechainId, TxHash, VrfPublicKey, ZenBox,
};
