//! Boxes: immutable sidechain ownership records.
//!
//! A box is created once and never edited. Spending it (elsewhere) removes
//! it; nothing here mutates one.

use serde::{Deserialize, Serialize};

use crate::types::Proposition;
use crate::vrf::VrfPublicKey;

/// Common view over every box kind.
pub trait CoinBox {
    /// The credential allowed to spend the box.
    fn proposition(&self) -> &Proposition;

    /// Value held, in the same units the mainchain uses.
    fn value(&self) -> u64;

    /// Makes (proposition, nonce) unique across boxes.
    fn nonce(&self) -> u64;
}

/// A plain value-holding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZenBox {
    pub proposition: Proposition,
    pub value: u64,
    pub nonce: u64,
}

impl ZenBox {
    pub fn new(proposition: Proposition, value: u64, nonce: u64) -> Self {
        Self {
            proposition,
            value,
            nonce,
        }
    }
}

impl CoinBox for ZenBox {
    fn proposition(&self) -> &Proposition {
        &self.proposition
    }

    fn value(&self) -> u64 {
        self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }
}

/// A box that is both stake and forging eligibility.
///
/// The VRF key is what the holder uses to prove slot leadership; forging
/// rewards go to `reward_proposition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForgerBox {
    pub proposition: Proposition,
    pub nonce: u64,
    pub value: u64,
    pub reward_proposition: Proposition,
    pub vrf_public_key: VrfPublicKey,
}

impl ForgerBox {
    pub fn new(
        proposition: Proposition,
        nonce: u64,
        value: u64,
        reward_proposition: Proposition,
        vrf_public_key: VrfPublicKey,
    ) -> Self {
        Self {
            proposition,
            nonce,
            value,
            reward_proposition,
            vrf_public_key,
        }
    }
}

impl CoinBox for ForgerBox {
    fn proposition(&self) -> &Proposition {
        &self.proposition
    }

    fn value(&self) -> u64 {
        self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }
}

/// Any box derived from a mainchain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidechainBox {
    Zen(ZenBox),
    Forger(ForgerBox),
}

impl SidechainBox {
    pub fn as_zen(&self) -> Option<&ZenBox> {
        match self {
            Self::Zen(b) => Some(b),
            Self::Forger(_) => None,
        }
    }

    pub fn as_forger(&self) -> Option<&ForgerBox> {
        match self {
            Self::Forger(b) => Some(b),
            Self::Zen(_) => None,
        }
    }
}

impl CoinBox for SidechainBox {
    fn proposition(&self) -> &Proposition {
        match self {
            Self::Zen(b) => b.proposition(),
            Self::Forger(b) => b.proposition(),
        }
    }

    fn value(&self) -> u64 {
        match self {
            Self::Zen(b) => b.value(),
            Self::Forger(b) => b.value(),
        }
    }

    fn nonce(&self) -> u64 {
        match self {
            Self::Zen(b) => b.nonce(),
            Self::Forger(b) => b.nonce(),
        }
    }
}

impl From<ZenBox> for SidechainBox {
    fn from(b: ZenBox) -> Self {
        Self::Zen(b)
    }
}

impl From<ForgerBox> for SidechainBox {
    fn from(b: ForgerBox) -> Self {
        Self::Forger(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidechain_box_dispatch() {
        let zen: SidechainBox = ZenBox::new(Proposition([1; 32]), 10, 7).into();
        assert_eq!(zen.value(), 10);
        assert_eq!(zen.nonce(), 7);
        assert!(zen.as_forger().is_none());

        let forger: SidechainBox = ForgerBox::new(
            Proposition([2; 32]),
            42,
            1_000,
            Proposition([3; 32]),
            VrfPublicKey([4; 32]),
        )
        .into();
        assert_eq!(forger.proposition(), &Proposition([2; 32]));
        assert_eq!(forger.as_forger().map(|b| b.reward_proposition), Some(Proposition([3; 32])));
        assert!(forger.as_zen().is_none());
    }

    #[test]
    fn test_box_serde_json() {
        let zen = ZenBox::new(Proposition([9; 32]), 5, 1);
        let json = serde_json::to_string(&zen).unwrap();
        let back: ZenBox = serde_json::from_str(&json).unwrap();
        assert_eq!(zen, back);
    }
}
