//! Option premium targets
//!
//! Reprices an option at each underlying target level, optionally after the
//! time it is expected to take to get there, and expresses the result as a
//! return on today's theoretical premium.

pub mod repricer;

pub use repricer::*;
