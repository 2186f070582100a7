//! Smart Router
//!
//! Multi-hop swap route search over an already-fetched pool set, the packed
//! route encoding consumed by the on-chain router, and the fixed-point math
//! used to present amounts and bound them for slippage.

pub mod fixed_point;
pub mod pair;
pub mod path;
pub mod pool;
pub mod router;

// Re-exports
pub use fixed_point::{
    apply_slippage, de_redenominate, de_redenominate_str, divide_x96, exponent, multiply_x96,
    redenominate, Q96_RESOLUTION,
};
pub use pair::Pair;
pub use path::{Expansion, FirstPool, Path, Step};
pub use pool::Pool;
pub use router::{
    best_route, find_paths, quote_routes, search_paths, search_routes, Quoter, RouteQuote,
    RouteRequest, RouteSearch, TradeType,
};
pub use swap_core::{Address, PoolIndex};
