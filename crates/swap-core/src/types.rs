//! Core type definitions for the swap router

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// 20-byte EVM account identifier used for tokens and contracts.
///
/// Parsing accepts any hex casing; the EIP-55 checksum is not enforced.
pub use alloy_primitives::Address;

/// Stable numeric identifier of a liquidity pool (encoded as `uint32`).
pub type PoolIndex = u32;

/// Raw width of an encoded address in a packed route.
pub const ADDRESS_BYTES: usize = 20;

/// Raw width of an encoded pool index in a packed route.
pub const POOL_INDEX_BYTES: usize = 4;

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainName {
    KlaytnMainnet,
    KlaytnTestnet,
}

impl ChainName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KlaytnMainnet => "klaytn_mainnet",
            Self::KlaytnTestnet => "klaytn_testnet",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Self::KlaytnTestnet)
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChainName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "klaytn_mainnet" | "mainnet" => Ok(Self::KlaytnMainnet),
            "klaytn_testnet" | "testnet" => Ok(Self::KlaytnTestnet),
            other => Err(ConfigError::UnknownChain(other.to_string())),
        }
    }
}

/// Constants
pub mod constants {
    /// Gas price for router transactions (25 gwei)
    pub const GAS_PRICE_WEI: u64 = 25_000_000_000;

    /// Gas limit for router transactions
    pub const GAS_LIMIT: u64 = 3_000_000;
}
