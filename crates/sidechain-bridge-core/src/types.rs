//! Strong type definitions for mainchain and sidechain identifiers.
//!
//! All 32-byte identifiers are newtypes so a transaction hash can never be
//! passed where a sidechain id or an owner credential is expected.
//!
//! Byte order matters here: every type stores its bytes exactly as they
//! appear on the wire. Conversions between mainchain (little-endian) and
//! sidechain (big-endian) order are explicit calls to [`TxHash::reversed`]
//! and friends, never implicit.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! bytes32_newtype {
    ($(#[$meta:meta])* $name:ident, $debug:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub [u8; 32]);

        impl $name {
            /// Size of the identifier in bytes.
            pub const LENGTH: usize = 32;

            /// The all-zero value (sentinel).
            pub const ZERO: Self = Self([0u8; 32]);

            /// Create from raw bytes.
            pub const fn from_bytes(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Get the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            /// Same bytes in the opposite byte order.
            pub fn reversed(&self) -> Self {
                let mut bytes = self.0;
                bytes.reverse();
                Self(bytes)
            }

            /// Convert to hex string.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// Parse from hex string.
            pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
                let bytes = hex::decode(s)?;
                if bytes.len() != 32 {
                    return Err(hex::FromHexError::InvalidStringLength);
                }
                let mut arr = [0u8; 32];
                arr.copy_from_slice(&bytes);
                Ok(Self(arr))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $debug, &self.to_hex()[..16])
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = std::array::TryFromSliceError;

            fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
                let arr: [u8; 32] = slice.try_into()?;
                Ok(Self(arr))
            }
        }
    };
}

bytes32_newtype!(
    /// Hash of a mainchain transaction, in mainchain-native byte order.
    TxHash,
    "TxHash"
);

bytes32_newtype!(
    /// Identifier of a sidechain as registered on the mainchain.
    SidechainId,
    "SidechainId"
);

bytes32_newtype!(
    /// A 32-byte Ed25519 public key used as a sidechain owner credential.
    ///
    /// Always held in sidechain (big-endian) order.
    Proposition,
    "Proposition"
);
