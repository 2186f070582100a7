//! Configuration types for the swap router

use alloy_primitives::address;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;
use crate::types::{Address, ChainName};

/// Contract deployments and endpoints for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub http_rpc_url: String,
    pub websocket_rpc_url: String,

    /// Pool factory contract (not yet deployed on mainnet)
    #[serde(default)]
    pub factory_address: Option<Address>,

    /// NFT minting contract (not yet deployed on mainnet)
    #[serde(default)]
    pub nft_address: Option<Address>,

    /// Token used as the default swap input
    pub exchange_token_address: Address,

    #[serde(default)]
    pub stable_token_addresses: Vec<Address>,

    #[serde(default)]
    pub explorer_url: String,
}

impl ChainInfo {
    /// Built-in deployment info for a chain
    pub fn for_chain(chain: ChainName) -> Self {
        match chain {
            ChainName::KlaytnMainnet => Self {
                chain_id: 8217,
                http_rpc_url: "https://public-en-cypress.klaytn.net".to_string(),
                websocket_rpc_url: "wss://public-en-cypress.klaytn.net/ws".to_string(),
                factory_address: None,
                nft_address: None,
                exchange_token_address: address!("a6e709154cfc6fbee95c8f2e57a5091c26312753"),
                stable_token_addresses: Vec::new(),
                explorer_url: String::new(),
            },
            ChainName::KlaytnTestnet => Self {
                chain_id: 1001,
                http_rpc_url: "https://api.baobab.klaytn.net:8651".to_string(),
                websocket_rpc_url: "wss://public-en-baobab.klaytn.net/ws".to_string(),
                factory_address: Some(address!("1a124eea08029a0648effdb57f3b7ada266559e6")),
                nft_address: Some(address!("ea10de4fb8f0f4d067992633ba09011c06af5f61")),
                exchange_token_address: address!("a6e709154cfc6fbee95c8f2e57a5091c26312753"),
                stable_token_addresses: vec![address!("edeb5f63537ebae7e6dd79d95cd2ef20c75cd732")],
                explorer_url: "https://baobab.klaytnscope.com/".to_string(),
            },
        }
    }
}

/// Path search and quoting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Maximum number of hops in a candidate route
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    /// Upper bound on in-progress paths kept per search depth
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,

    /// Slippage tolerance as a fraction (0.005 = 0.5%)
    #[serde(default = "default_slippage")]
    pub slippage: f64,

    /// Decimal digits of slippage precision
    #[serde(default = "default_slippage_round")]
    pub slippage_round: u32,
}

/// Default maximum number of hops in a route.
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Default number of in-progress paths kept per search depth.
pub const DEFAULT_MAX_PATHS: usize = 256;

fn default_max_hops() -> usize {
    DEFAULT_MAX_HOPS
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}

fn default_slippage() -> f64 {
    0.005
}

fn default_slippage_round() -> u32 {
    4
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_hops: default_max_hops(),
            max_paths: default_max_paths(),
            slippage: default_slippage(),
            slippage_round: default_slippage_round(),
        }
    }
}

impl RouterConfig {
    /// Reject settings the search cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_hops == 0 {
            return Err(ConfigError::InvalidSetting(
                "max_hops must be at least 1".to_string(),
            ));
        }
        if self.max_paths == 0 {
            return Err(ConfigError::InvalidSetting(
                "max_paths must be at least 1".to_string(),
            ));
        }
        if !self.slippage.is_finite() || self.slippage < 0.0 || self.slippage >= 1.0 {
            return Err(ConfigError::InvalidSetting(format!(
                "slippage must be in [0, 1), got {}",
                self.slippage
            )));
        }
        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chain to route on
    #[serde(default = "default_chain")]
    pub chain: ChainName,

    /// Path search settings
    #[serde(default)]
    pub router: RouterConfig,
}

fn default_chain() -> ChainName {
    ChainName::KlaytnTestnet
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chain: default_chain(),
            router: RouterConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.router.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn chain_info(&self) -> ChainInfo {
        ChainInfo::for_chain(self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.chain, ChainName::KlaytnTestnet);
        assert_eq!(config.router.max_hops, DEFAULT_MAX_HOPS);
        assert_eq!(config.router.max_paths, DEFAULT_MAX_PATHS);
        assert_eq!(config.router.slippage_round, 4);
        assert!(config.router.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_json_str(r#"{"router": {"max_hops": 2}}"#).unwrap();
        assert_eq!(config.router.max_hops, 2);
        assert_eq!(config.router.max_paths, 256);
        assert_eq!(config.chain, ChainName::KlaytnTestnet);
    }

    #[test]
    fn test_invalid_router_settings_rejected() {
        let err = AppConfig::from_json_str(r#"{"router": {"max_hops": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));

        let err = AppConfig::from_json_str(r#"{"router": {"max_paths": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));

        let err = AppConfig::from_json_str(r#"{"router": {"slippage": 1.5}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting(_)));

        let err = AppConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_testnet_chain_info() {
        let info = ChainInfo::for_chain(ChainName::KlaytnTestnet);
        assert_eq!(info.chain_id, 1001);
        assert!(info.factory_address.is_some());
        assert_eq!(info.stable_token_addresses.len(), 1);

        let mainnet = ChainInfo::for_chain(ChainName::KlaytnMainnet);
        assert_eq!(mainnet.exchange_token_address, info.exchange_token_address);
        assert!(mainnet.factory_address.is_none());
    }
}
