use serde::Serialize;
use swap_core::constants::{GAS_LIMIT, GAS_PRICE_WEI};
use swap_core::{ChainInfo, ChainName};

#[derive(Debug, Serialize)]
pub struct ChainInfoResponse {
    pub chain: ChainName,
    #[serde(flatten)]
    pub info: ChainInfo,
    pub gas_price_wei: u64,
    pub gas_limit: u64,
}

/// Deployment info for a chain
pub fn chain_info(chain: ChainName) -> ChainInfoResponse {
    ChainInfoResponse {
        chain,
        info: ChainInfo::for_chain(chain),
        gas_price_wei: GAS_PRICE_WEI,
        gas_limit: GAS_LIMIT,
    }
}
