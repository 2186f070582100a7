//! Smart Router: Multi-Hop Route Search & Ranking
//!
//! Drives `Path::expand_one_hop` breadth-first over a fetched pool set until
//! the hop ceiling is reached, then ranks the completed routes with a
//! caller-supplied `Quoter` and attaches slippage bounds.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use swap_core::{Address, PathError, RouterConfig};

use crate::fixed_point::apply_slippage;
use crate::path::Path;
use crate::pool::Pool;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which side of the swap is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    /// Input amount is fixed; the bound is a minimum output.
    ExactInput,
    /// Output amount is fixed; the bound is a maximum input.
    ExactOutput,
}

impl TradeType {
    pub fn is_exact_input(&self) -> bool {
        matches!(self, Self::ExactInput)
    }
}

/// Tokens to route between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub token_in: Address,
    pub token_out: Address,
}

/// Outcome of a bounded route search.
#[derive(Debug, Clone, Default)]
pub struct RouteSearch {
    /// Completed routes, shortest first
    pub routes: Vec<Path>,
    /// Number of paths created during the search
    pub explored: usize,
    /// Deepest hop count that was generated
    pub depth_reached: usize,
    /// Whether the frontier was cut to honor `max_paths`
    pub truncated: bool,
}

/// Amount estimate for a candidate route. Implemented by the reserve-query
/// layer; the search itself never touches the chain.
pub trait Quoter {
    /// Output amount for `ExactInput`, required input for `ExactOutput`.
    /// `None` when the route cannot fill the trade.
    fn quote(&self, path: &Path, amount: &BigInt, trade: TradeType) -> Option<BigInt>;
}

/// A ranked route with its slippage bound.
#[derive(Debug, Clone)]
pub struct RouteQuote {
    pub path: Path,
    /// Packed route for the router contract, hex-encoded
    pub encoded: String,
    pub trade: TradeType,
    /// Fixed side of the trade
    pub amount: BigInt,
    /// Estimated other side of the trade
    pub quoted: BigInt,
    /// Minimum output (exact input) or maximum input (exact output)
    pub bound: BigInt,
}

// ---------------------------------------------------------------------------
// Path Search
// ---------------------------------------------------------------------------

/// Find every route from `source` to `target` using at most `max_hops` hops.
pub fn find_paths(
    pools: &[Pool],
    source: Address,
    target: Address,
    max_hops: usize,
) -> Result<Vec<Path>, PathError> {
    search_paths(pools, source, target, max_hops, usize::MAX).map(|search| search.routes)
}

/// Breadth-first search with a hop ceiling and a per-depth frontier ceiling.
///
/// Completed routes are collected across all depths; in-progress paths are
/// expanded again until `max_hops` is reached or nothing is left to expand.
pub fn search_paths(
    pools: &[Pool],
    source: Address,
    target: Address,
    max_hops: usize,
    max_paths: usize,
) -> Result<RouteSearch, PathError> {
    let mut search = RouteSearch::default();
    if source == target || max_hops == 0 {
        return Ok(search);
    }

    let mut frontier: Vec<Path> = Vec::new();
    for pool in pools {
        let Some(path) = Path::from_pool(pool, source) else {
            continue;
        };
        search.explored += 1;
        search.depth_reached = 1;
        if path.last_token() == Some(target) {
            search.routes.push(path);
        } else {
            frontier.push(path);
        }
    }

    let mut depth = 1;
    while depth < max_hops && !frontier.is_empty() {
        if frontier.len() > max_paths {
            frontier.truncate(max_paths);
            search.truncated = true;
        }

        let mut next_frontier = Vec::new();
        for path in &frontier {
            let expansion = path.expand_one_hop(pools, target)?;
            search.explored += expansion.exact_end_paths.len() + expansion.rest_paths.len();
            search.routes.extend(expansion.exact_end_paths);
            next_frontier.extend(expansion.rest_paths);
        }

        depth += 1;
        if !next_frontier.is_empty() || search.routes.iter().any(|r| r.hop_count() == depth) {
            search.depth_reached = depth;
        }
        frontier = next_frontier;
    }

    Ok(search)
}

/// Search using the hop and frontier ceilings from `config`.
pub fn search_routes(
    pools: &[Pool],
    request: &RouteRequest,
    config: &RouterConfig,
) -> Result<RouteSearch, PathError> {
    let search = search_paths(
        pools,
        request.token_in,
        request.token_out,
        config.max_hops,
        config.max_paths,
    )?;

    tracing::debug!(
        routes = search.routes.len(),
        explored = search.explored,
        depth = search.depth_reached,
        truncated = search.truncated,
        "Route search {} -> {} over {} pools",
        request.token_in,
        request.token_out,
        pools.len()
    );
    if search.truncated {
        tracing::warn!(
            "Route frontier exceeded {} paths; some routes were not explored",
            config.max_paths
        );
    }

    Ok(search)
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Quote every route and rank them: highest output first for exact input,
/// lowest input first for exact output. Routes that cannot fill the trade
/// are dropped. Ties keep discovery order, so shorter routes win.
pub fn quote_routes<Q: Quoter + ?Sized>(
    paths: Vec<Path>,
    quoter: &Q,
    amount: &BigInt,
    trade: TradeType,
    slippage: f64,
    round: u32,
) -> Vec<RouteQuote> {
    let mut quotes: Vec<RouteQuote> = paths
        .into_iter()
        .filter_map(|path| {
            let quoted = quoter.quote(&path, amount, trade)?;
            if quoted <= BigInt::zero() {
                return None;
            }
            let bound = apply_slippage(&quoted, slippage, round, trade.is_exact_input());
            Some(RouteQuote {
                encoded: path.encode_hex(),
                path,
                trade,
                amount: amount.clone(),
                quoted,
                bound,
            })
        })
        .collect();

    match trade {
        TradeType::ExactInput => quotes.sort_by(|a, b| b.quoted.cmp(&a.quoted)),
        TradeType::ExactOutput => quotes.sort_by(|a, b| a.quoted.cmp(&b.quoted)),
    }
    quotes
}

/// Search, quote, and return the best route for the request.
pub fn best_route<Q: Quoter + ?Sized>(
    pools: &[Pool],
    request: &RouteRequest,
    quoter: &Q,
    amount: &BigInt,
    trade: TradeType,
    config: &RouterConfig,
) -> Result<Option<RouteQuote>, PathError> {
    let search = search_routes(pools, request, config)?;
    let quotes = quote_routes(
        search.routes,
        quoter,
        amount,
        trade,
        config.slippage,
        config.slippage_round,
    );
    Ok(quotes.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use std::collections::HashSet;

    const A: Address = address!("00000000000000000000000000000000000000aa");
    const B: Address = address!("00000000000000000000000000000000000000bb");
    const C: Address = address!("00000000000000000000000000000000000000cc");
    const D: Address = address!("00000000000000000000000000000000000000dd");
    const E: Address = address!("00000000000000000000000000000000000000ee");

    /// Takes a 1% fee per hop, plus a pool-specific haircut from `penalties`.
    struct FeeQuoter {
        penalties: Vec<(u32, u64)>,
    }

    impl FeeQuoter {
        fn flat() -> Self {
            Self {
                penalties: Vec::new(),
            }
        }

        fn penalty(&self, index: u32) -> u64 {
            self.penalties
                .iter()
                .find(|(i, _)| *i == index)
                .map(|(_, p)| *p)
                .unwrap_or(0)
        }
    }

    impl Quoter for FeeQuoter {
        fn quote(&self, path: &Path, amount: &BigInt, trade: TradeType) -> Option<BigInt> {
            let mut current = amount.clone();
            for index in path.pool_indices() {
                let haircut = 99 - self.penalty(*index);
                current = match trade {
                    TradeType::ExactInput => current * haircut / 100,
                    TradeType::ExactOutput => current * 100 / haircut,
                };
            }
            Some(current)
        }
    }

    fn line_pools() -> Vec<Pool> {
        // A - B - C - D - E
        vec![
            Pool::new(A, B, 0),
            Pool::new(B, C, 1),
            Pool::new(C, D, 2),
            Pool::new(D, E, 3),
        ]
    }

    #[test]
    fn test_find_direct_path() {
        let pools = vec![Pool::new(A, B, 0)];
        let paths = find_paths(&pools, A, B, 3).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].tokens(), &[A, B]);
    }

    #[test]
    fn test_find_multihop_path() {
        let paths = find_paths(&line_pools(), A, C, 3).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].tokens(), &[A, B, C]);
        assert_eq!(paths[0].pool_indices(), &[0, 1]);
    }

    #[test]
    fn test_max_hops_limit() {
        let pools = line_pools();
        assert!(find_paths(&pools, A, E, 3).unwrap().is_empty());
        let paths = find_paths(&pools, A, E, 4).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].hop_count(), 4);
    }

    #[test]
    fn test_parallel_pools_give_distinct_routes() {
        // Two fee tiers over A/B
        let pools = vec![Pool::new(A, B, 0), Pool::new(B, A, 1)];
        let paths = find_paths(&pools, A, B, 3).unwrap();
        assert_eq!(paths.len(), 2);
        let indices: HashSet<u32> = paths.iter().map(|p| p.pool_indices()[0]).collect();
        assert_eq!(indices, HashSet::from([0, 1]));
    }

    #[test]
    fn test_routes_shortest_first() {
        // A-B direct, and A-C-B
        let pools = vec![Pool::new(A, C, 0), Pool::new(C, B, 1), Pool::new(A, B, 2)];
        let paths = find_paths(&pools, A, B, 3).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].hop_count(), 1);
        assert_eq!(paths[1].hop_count(), 2);
    }

    #[test]
    fn test_no_pair_reused() {
        // Triangle plus tail: A-B, B-C, C-A, C-D
        let pools = vec![
            Pool::new(A, B, 0),
            Pool::new(B, C, 1),
            Pool::new(C, A, 2),
            Pool::new(C, D, 3),
        ];
        let paths = find_paths(&pools, A, D, 4).unwrap();
        assert!(!paths.is_empty());
        for path in &paths {
            let pairs: Vec<_> = path
                .tokens()
                .windows(2)
                .map(|w| crate::pair::Pair::new(w[0], w[1]))
                .collect();
            let unique: HashSet<_> = pairs.iter().collect();
            assert_eq!(unique.len(), pairs.len(), "pair reused in {}", path);
            assert_eq!(path.last_token(), Some(D));
        }
    }

    #[test]
    fn test_same_token_or_zero_hops() {
        let pools = line_pools();
        assert!(find_paths(&pools, A, A, 3).unwrap().is_empty());
        assert!(find_paths(&pools, A, B, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_target() {
        let pools = vec![Pool::new(A, B, 0), Pool::new(C, D, 1)];
        let search = search_paths(&pools, A, D, 4, 100).unwrap();
        assert!(search.routes.is_empty());
        assert_eq!(search.explored, 1);
        assert_eq!(search.depth_reached, 1);
    }

    #[test]
    fn test_frontier_truncation() {
        // A fans out to many tokens, each reaching E
        let mids = [B, C, D];
        let mut pools = Vec::new();
        for (i, mid) in mids.iter().enumerate() {
            pools.push(Pool::new(A, *mid, i as u32));
            pools.push(Pool::new(*mid, E, 10 + i as u32));
        }

        let full = search_paths(&pools, A, E, 2, 100).unwrap();
        assert_eq!(full.routes.len(), 3);
        assert!(!full.truncated);

        let cut = search_paths(&pools, A, E, 2, 1).unwrap();
        assert_eq!(cut.routes.len(), 1);
        assert!(cut.truncated);
    }

    #[test]
    fn test_search_routes_uses_config() {
        let config = RouterConfig {
            max_hops: 2,
            ..RouterConfig::default()
        };
        let request = RouteRequest {
            token_in: A,
            token_out: D,
        };
        let search = search_routes(&line_pools(), &request, &config).unwrap();
        assert!(search.routes.is_empty());
        assert_eq!(search.depth_reached, 2);
    }

    #[test]
    fn test_quote_routes_exact_input_ranked() {
        let pools = vec![Pool::new(A, B, 0), Pool::new(A, B, 1), Pool::new(A, C, 2), Pool::new(C, B, 3)];
        let paths = find_paths(&pools, A, B, 3).unwrap();
        let quoter = FeeQuoter {
            penalties: vec![(0, 5)],
        };

        let quotes = quote_routes(paths, &quoter, &BigInt::from(10_000), TradeType::ExactInput, 0.01, 2);
        assert_eq!(quotes.len(), 3);
        // Pool 1: 9900; route via C: 9801; pool 0: 9400
        assert_eq!(quotes[0].path.pool_indices(), &[1]);
        assert_eq!(quotes[0].quoted, BigInt::from(9_900));
        assert_eq!(quotes[0].bound, BigInt::from(9_801));
        assert_eq!(quotes[1].path.pool_indices(), &[2, 3]);
        assert_eq!(quotes[2].quoted, BigInt::from(9_400));
        assert_eq!(quotes[0].encoded, quotes[0].path.encode_hex());
    }

    #[test]
    fn test_quote_routes_exact_output_ranked() {
        let pools = vec![Pool::new(A, B, 0), Pool::new(A, C, 1), Pool::new(C, B, 2)];
        let paths = find_paths(&pools, A, B, 3).unwrap();

        let quotes = quote_routes(
            paths,
            &FeeQuoter::flat(),
            &BigInt::from(9_900),
            TradeType::ExactOutput,
            0.01,
            2,
        );
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].quoted, BigInt::from(10_000));
        assert_eq!(quotes[0].bound, BigInt::from(10_100));
        assert!(quotes[1].quoted > quotes[0].quoted);
    }

    #[test]
    fn test_unfillable_routes_dropped() {
        struct Empty;
        impl Quoter for Empty {
            fn quote(&self, _: &Path, _: &BigInt, _: TradeType) -> Option<BigInt> {
                None
            }
        }

        let paths = find_paths(&line_pools(), A, B, 3).unwrap();
        let quotes = quote_routes(paths, &Empty, &BigInt::from(1), TradeType::ExactInput, 0.0, 2);
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_best_route() {
        let pools = vec![Pool::new(A, C, 0), Pool::new(C, B, 1), Pool::new(A, B, 2)];
        let request = RouteRequest {
            token_in: A,
            token_out: B,
        };
        let best = best_route(
            &pools,
            &request,
            &FeeQuoter::flat(),
            &BigInt::from(1_000_000),
            TradeType::ExactInput,
            &RouterConfig::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(best.path.pool_indices(), &[2]);
        assert_eq!(best.quoted, BigInt::from(990_000));
        // Default slippage 0.5% at 4 digits
        assert_eq!(best.bound, BigInt::from(985_050));
    }
}
