//! Genesis bootstrap: the hardcoded forger box that lets the first block be
//! forged.
//!
//! Before any stake has been delegated there is no forger box, so none could
//! produce a VRF proof for the first slot. The sidechain creation output
//! therefore resolves to a single forger box whose keys come from fixed
//! passphrases. Every node derives the same keys from the same strings; that
//! reproducibility is the point, so the seeds must never be replaced with
//! real randomness.

use std::sync::OnceLock;

use sidechain_bridge_core::vrf::{SchnorrkelVrf, VrfKeyGenerator, VrfPublicKey, VrfSecretKey};
use sidechain_bridge_core::{ForgerBox, Keypair};

use crate::error::{BridgeError, Result};

/// Passphrase for the genesis stake key.
pub const GENESIS_STAKE_SEED: &[u8] = b"ThatForgerBoxShallBeGetFromGenesisBoxNotHardcoded";

/// Passphrase for the genesis reward key.
pub const GENESIS_REWARD_SEED: &[u8] = b"RewardKeyPair";

/// Fixed nonce of the genesis forger box.
pub const GENESIS_FORGER_BOX_NONCE: u64 = 42;

/// Value held by the genesis forger box.
pub const GENESIS_INITIAL_VALUE: u64 = 1_000_000;

static GLOBAL: OnceLock<GenesisContext> = OnceLock::new();

/// Keys and forger box used at chain genesis.
///
/// Read-only once derived. Pass it to whatever converts sidechain creation
/// outputs, or use [`GenesisContext::global`] for the process-wide copy.
#[derive(Debug, Clone)]
pub struct GenesisContext {
    stake_keys: Keypair,
    reward_keys: Keypair,
    vrf_secret: VrfSecretKey,
    vrf_public: VrfPublicKey,
    forger_box: ForgerBox,
}

impl GenesisContext {
    /// Derive the genesis context with the default VRF.
    pub fn derive() -> Result<Self> {
        Self::derive_with(&SchnorrkelVrf)
    }

    /// Derive the genesis context with a specific VRF implementation.
    ///
    /// The VRF seed is the reward key's secret. Failure here means the node
    /// cannot start.
    pub fn derive_with<V: VrfKeyGenerator>(vrf: &V) -> Result<Self> {
        let stake_keys = Keypair::from_passphrase(GENESIS_STAKE_SEED);
        let reward_keys = Keypair::from_passphrase(GENESIS_REWARD_SEED);

        let (vrf_secret, vrf_public) = vrf
            .generate(&reward_keys.secret_bytes())
            .map_err(|e| BridgeError::GenesisInitFailure(e.to_string()))?;

        let forger_box = ForgerBox::new(
            stake_keys.proposition(),
            GENESIS_FORGER_BOX_NONCE,
            GENESIS_INITIAL_VALUE,
            reward_keys.proposition(),
            vrf_public,
        );

        tracing::info!(
            stake = %stake_keys.proposition(),
            reward = %reward_keys.proposition(),
            vrf = ?vrf_public,
            "derived genesis forger box"
        );

        Ok(Self {
            stake_keys,
            reward_keys,
            vrf_secret,
            vrf_public,
            forger_box,
        })
    }

    /// The process-wide genesis context, derived on first call.
    ///
    /// Call this once during startup, before the first block is processed,
    /// and abort on error.
    pub fn global() -> Result<&'static Self> {
        if let Some(ctx) = GLOBAL.get() {
            return Ok(ctx);
        }
        let ctx = Self::derive()?;
        // A racing thread may have won; both derived identical values.
        Ok(GLOBAL.get_or_init(|| ctx))
    }

    /// The genesis forger box.
    pub fn forger_box(&self) -> &ForgerBox {
        &self.forger_box
    }

    pub fn stake_keys(&self) -> &Keypair {
        &self.stake_keys
    }

    pub fn reward_keys(&self) -> &Keypair {
        &self.reward_keys
    }

    /// VRF secret for forging the first block.
    pub fn vrf_secret(&self) -> &VrfSecretKey {
        &self.vrf_secret
    }

    pub fn vrf_public(&self) -> &VrfPublicKey {
        &self.vrf_public
    }
}
