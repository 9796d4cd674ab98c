//! Volatility-scaled price targets for the underlying
//!
//! Targets are placed at multiples of the predicted move (`sigma × entry_price`)
//! away from the entry, on the favourable side of the position. Each target's
//! confidence is the probability, under a normal return model, that the
//! favourable return reaches it.

pub mod confidence;
pub mod types;
pub mod underlying;

pub use confidence::*;
pub use types::*;
pub use underlying::*;
