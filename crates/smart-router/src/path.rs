//! Swap Path: the route search primitive
//!
//! A path alternates tokens and pool indices, starting and ending on a token:
//! `[token0, pool0, token1, pool1, token2, ...]`. Tokens and pool indices are
//! stored in two vectors; `steps()` yields the flat alternating view.
//!
//! Expansion never mutates the path it is called on. Every branch is a clone,
//! so sibling branches never share hop lists.

use serde::Serialize;
use std::fmt;
use swap_core::{Address, PathError, PoolIndex, ADDRESS_BYTES, POOL_INDEX_BYTES};

use crate::pair::Pair;
use crate::pool::Pool;

/// Minimum number of steps in a path that has completed one hop.
pub const MIN_HOP_STEPS: usize = 3;

/// One entry of the flat alternating view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Token(Address),
    Pool(PoolIndex),
}

/// First hop of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FirstPool {
    pub token_start: Address,
    pub token_end: Address,
    pub index_pool: PoolIndex,
}

/// Result of expanding a path by one hop.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Extensions whose frontier is the destination token
    pub exact_end_paths: Vec<Path>,
    /// Extensions that can be expanded further
    pub rest_paths: Vec<Path>,
}

/// Candidate swap route.
///
/// Invariant: `tokens.len() == pools.len() + 1`, or both are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Path {
    tokens: Vec<Address>,
    pools: Vec<PoolIndex>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a new path from `pool`, entered at `token_start`.
    pub fn from_pool(pool: &Pool, token_start: Address) -> Option<Self> {
        let mut path = Self::new();
        path.seed_from_pool(pool, token_start).then_some(path)
    }

    /// Number of entries in the flat view (`2k + 1` for `k` hops).
    pub fn len(&self) -> usize {
        self.tokens.len() + self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn hop_count(&self) -> usize {
        self.pools.len()
    }

    pub fn tokens(&self) -> &[Address] {
        &self.tokens
    }

    pub fn pool_indices(&self) -> &[PoolIndex] {
        &self.pools
    }

    pub fn first_token(&self) -> Option<Address> {
        self.tokens.first().copied()
    }

    /// The frontier token.
    pub fn last_token(&self) -> Option<Address> {
        self.tokens.last().copied()
    }

    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.tokens.iter().enumerate().flat_map(move |(i, token)| {
            std::iter::once(Step::Token(*token)).chain(self.pools.get(i).copied().map(Step::Pool))
        })
    }

    /// Packed route encoding consumed by the router contract: each token as
    /// 20 raw bytes, each pool index as a 4-byte big-endian `uint32`, in step
    /// order with no padding.
    pub fn encode(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(self.tokens.len() * ADDRESS_BYTES + self.pools.len() * POOL_INDEX_BYTES);
        for step in self.steps() {
            match step {
                Step::Token(token) => out.extend_from_slice(token.as_slice()),
                Step::Pool(index) => out.extend_from_slice(&index.to_be_bytes()),
            }
        }
        out
    }

    /// `0x`-prefixed hex of [`Path::encode`].
    pub fn encode_hex(&self) -> String {
        format!("0x{}", hex::encode(self.encode()))
    }

    fn ensure_hop(&self) -> Result<(), PathError> {
        if self.len() < MIN_HOP_STEPS {
            return Err(PathError::TooShort { len: self.len() });
        }
        Ok(())
    }

    /// Frontier token of a path with at least one hop.
    fn frontier(&self) -> Result<Address, PathError> {
        self.ensure_hop()?;
        Ok(self.tokens[self.tokens.len() - 1])
    }

    pub fn first_pool(&self) -> Result<FirstPool, PathError> {
        self.ensure_hop()?;
        Ok(FirstPool {
            token_start: self.tokens[0],
            token_end: self.tokens[1],
            index_pool: self.pools[0],
        })
    }

    /// Whether the pair `(frontier, candidate)` has already been traversed.
    pub fn has_visited_pair(&self, candidate: Address) -> Result<bool, PathError> {
        let frontier = self.frontier()?;

        let next = Pair::new(frontier, candidate);
        Ok(self
            .tokens
            .windows(2)
            .any(|hop| Pair::new(hop[0], hop[1]) == next))
    }

    /// Append the first hop through `pool`, entered at `token_start`.
    ///
    /// Returns false and leaves the path untouched when the pool does not
    /// touch `token_start`, or when the path is already seeded.
    pub fn seed_from_pool(&mut self, pool: &Pool, token_start: Address) -> bool {
        if !self.is_empty() {
            return false;
        }
        let Some(pair) = pool.pair_from(token_start) else {
            return false;
        };

        self.tokens.push(pair.token_start);
        self.pools.push(pool.index_pool);
        self.tokens.push(pair.token_end);
        true
    }

    /// Append `[index_pool, token]` unless that hop revisits a pair.
    pub fn push_next_hop(&mut self, index_pool: PoolIndex, token: Address) -> Result<bool, PathError> {
        if self.has_visited_pair(token)? {
            return Ok(false);
        }
        self.pools.push(index_pool);
        self.tokens.push(token);
        Ok(true)
    }

    /// One breadth-first expansion step against `pools`.
    pub fn expand_one_hop(&self, pools: &[Pool], destination: Address) -> Result<Expansion, PathError> {
        let frontier = self.frontier()?;

        let mut expansion = Expansion::default();
        for pool in pools {
            let Some(pair) = pool.pair_from(frontier) else {
                continue;
            };

            let mut branch = self.clone();
            if !branch.push_next_hop(pool.index_pool, pair.token_end)? {
                continue;
            }

            if pair.token_end == destination {
                expansion.exact_end_paths.push(branch);
            } else {
                expansion.rest_paths.push(branch);
            }
        }

        Ok(expansion)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.steps() {
            match step {
                Step::Token(token) => write!(f, "{}", token)?,
                Step::Pool(index) => write!(f, " -[{}]-> ", index)?,
            }
        }
        Ok(())
    }
}
