//! Command implementations
//!
//! Each command returns a serializable response; `run` prints it as JSON.

pub mod amounts;
pub mod chain;
pub mod paths;

pub use amounts::*;
pub use chain::*;
pub use paths::*;
