use std::path::Path as FsPath;

use anyhow::Context;
use serde::Serialize;
use smart_router::{search_routes, Path, Pool, RouteRequest};
use swap_core::{Address, PoolIndex, RouterConfig};

#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub hops: usize,
    pub route: String,
    pub tokens: Vec<Address>,
    pub pool_indices: Vec<PoolIndex>,
    /// Packed route for the router contract
    pub encoded: String,
}

impl From<&Path> for RouteDto {
    fn from(path: &Path) -> Self {
        Self {
            hops: path.hop_count(),
            route: path.to_string(),
            tokens: path.tokens().to_vec(),
            pool_indices: path.pool_indices().to_vec(),
            encoded: path.encode_hex(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PathsResponse {
    pub token_in: Address,
    pub token_out: Address,
    pub routes: Vec<RouteDto>,
    pub count: usize,
    pub explored: usize,
    pub truncated: bool,
}

/// Parse a JSON array of pools
pub fn parse_pools(json: &str) -> anyhow::Result<Vec<Pool>> {
    serde_json::from_str(json).context("Failed to parse pool list")
}

/// Read a JSON array of pools from disk
pub fn load_pools(path: &FsPath) -> anyhow::Result<Vec<Pool>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pools from {}", path.display()))?;
    let pools = parse_pools(&json)?;
    tracing::info!("Loaded {} pools from {}", pools.len(), path.display());
    Ok(pools)
}

/// Search routes between two tokens
pub fn find_routes(
    pools: &[Pool],
    token_in: Address,
    token_out: Address,
    config: &RouterConfig,
) -> swap_core::Result<PathsResponse> {
    config.validate()?;
    let request = RouteRequest {
        token_in,
        token_out,
    };
    let search = search_routes(pools, &request, config)?;
    let routes: Vec<RouteDto> = search.routes.iter().map(RouteDto::from).collect();

    Ok(PathsResponse {
        token_in,
        token_out,
        count: routes.len(),
        routes,
        explored: search.explored,
        truncated: search.truncated,
    })
}
