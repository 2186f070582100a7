//! Liquidity pool records
//!
//! Pools are fetched upstream and treated as read-only during a search.

use serde::{Deserialize, Serialize};
use std::fmt;
use swap_core::{Address, PoolIndex};

use crate::pair::Pair;

/// One on-chain liquidity pool. Several pools may share a token pair
/// (e.g. different fee tiers); `index_pool` tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pool {
    #[serde(alias = "tokenA")]
    pub token_a: Address,
    #[serde(alias = "tokenB")]
    pub token_b: Address,
    #[serde(alias = "indexPool")]
    pub index_pool: PoolIndex,
}

impl Pool {
    pub fn new(token_a: Address, token_b: Address, index_pool: PoolIndex) -> Self {
        Self {
            token_a,
            token_b,
            index_pool,
        }
    }

    /// Pair oriented from `token_start`, or `None` if the pool cannot be
    /// entered from that token.
    pub fn pair_from(&self, token_start: Address) -> Option<Pair> {
        if token_start == self.token_a {
            Some(Pair::new(self.token_a, self.token_b))
        } else if token_start == self.token_b {
            Some(Pair::new(self.token_b, self.token_a))
        } else {
            None
        }
    }

    pub fn contains(&self, token: Address) -> bool {
        self.token_a == token || self.token_b == token
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool #{} | {} <-> {}",
            self.index_pool, self.token_a, self.token_b
        )
    }
}
