//! Bridge settings.
//!
//! Only what the bridge itself consults. Genesis seeds are deliberately
//! absent: they are consensus constants, not settings.

use serde::{Deserialize, Deserializer};

use sidechain_bridge_core::SidechainId;

use crate::error::{BridgeError, Result};

/// Configuration for mainchain output ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Sidechain this node follows, as hex. Outputs for other sidechains
    /// are filtered out when set.
    #[serde(deserialize_with = "sidechain_id_from_hex")]
    pub sidechain_id: Option<SidechainId>,

    /// Treat outputs for other sidechains as errors instead of skipping them.
    pub strict_sidechain_filter: bool,
}

fn sidechain_id_from_hex<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<SidechainId>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex: Option<String> = Option::deserialize(deserializer)?;
    hex.map(|s| SidechainId::from_hex(&s).map_err(serde::de::Error::custom))
        .transpose()
}

impl BridgeConfig {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Follow a specific sidechain.
    pub fn with_sidechain_id(mut self, sidechain_id: SidechainId) -> Self {
        self.sidechain_id = Some(sidechain_id);
        self
    }

    /// Reject rather than skip foreign outputs.
    pub fn strict(mut self) -> Self {
        self.strict_sidechain_filter = true;
        self
    }
}
