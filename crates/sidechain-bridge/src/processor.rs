//! Block-level ingestion: turn the sidechain-related outputs of one
//! mainchain block reference into boxes.

use sidechain_bridge_core::{CoinBox, SidechainBox};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::genesis::GenesisContext;
use crate::output::MainchainOutput;

/// A box together with the identity of the output that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedBox {
    pub output_id: [u8; 32],
    pub sidechain_box: SidechainBox,
}

/// Converts mainchain outputs into sidechain boxes.
///
/// Holds no mutable state, so one processor can be shared across
/// validation workers.
#[derive(Debug, Clone)]
pub struct MainchainOutputProcessor<'g> {
    config: BridgeConfig,
    genesis: &'g GenesisContext,
}

impl<'g> MainchainOutputProcessor<'g> {
    pub fn new(config: BridgeConfig, genesis: &'g GenesisContext) -> Self {
        Self { config, genesis }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Whether `output` is addressed to the sidechain this node follows.
    ///
    /// Errors instead of returning `false` when the filter is strict.
    pub fn accepts(&self, output: &MainchainOutput) -> Result<bool> {
        let Some(expected) = self.config.sidechain_id else {
            return Ok(true);
        };
        let found = output.sidechain_id();
        if found == expected {
            return Ok(true);
        }
        if self.config.strict_sidechain_filter {
            return Err(BridgeError::SidechainMismatch { expected, found });
        }
        tracing::warn!(
            expected = %expected,
            found = %found,
            tx_hash = %output.transaction_hash(),
            index = output.transaction_index(),
            "skipping output for foreign sidechain"
        );
        Ok(false)
    }

    /// Derive boxes for `outputs`, preserving their order.
    pub fn process(&self, outputs: &[MainchainOutput]) -> Result<Vec<DerivedBox>> {
        let mut derived = Vec::with_capacity(outputs.len());
        for output in outputs {
            if !self.accepts(output)? {
                continue;
            }
            let sidechain_box = output.to_box(self.genesis);
            let output_id = output.identity_hash();
            tracing::debug!(
                output_id = %hex::encode(output_id),
                kind = ?output.kind(),
                value = sidechain_box.value(),
                nonce = sidechain_box.nonce(),
                "derived box"
            );
            derived.push(DerivedBox {
                output_id,
                sidechain_box,
            });
        }
        Ok(derived)
    }

    /// Decode tagged record encodings, then derive their boxes.
    ///
    /// Any malformed record fails the whole batch.
    pub fn process_tagged<B: AsRef<[u8]>>(&self, records: &[B]) -> Result<Vec<DerivedBox>> {
        let outputs = records
            .iter()
            .map(|r| MainchainOutput::parse_tagged(r.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.process(&outputs)
    }
}
