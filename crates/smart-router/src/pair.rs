//! Token pair key
//!
//! A `Pair` remembers the orientation it was built with, but equality and
//! hashing ignore it: `(a, b) == (b, a)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use swap_core::Address;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pair {
    pub token_start: Address,
    pub token_end: Address,
}

impl Pair {
    pub fn new(token_start: Address, token_end: Address) -> Self {
        Self {
            token_start,
            token_end,
        }
    }

    pub fn contains(&self, token: Address) -> bool {
        self.token_start == token || self.token_end == token
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.token_end, self.token_start)
    }

    /// Tokens in ascending byte order.
    fn sorted(&self) -> (Address, Address) {
        if self.token_start <= self.token_end {
            (self.token_start, self.token_end)
        } else {
            (self.token_end, self.token_start)
        }
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Pair {}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.token_start, self.token_end)
    }
}
