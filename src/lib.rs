//! # Reco-Targets: Volatility-Scaled Targets and Option Premium Targets
//!
//! `reco-targets` turns a trade idea (entry price, side, predicted volatility and
//! expected return) into take-profit levels, the probability of reaching each
//! level, and, when the idea is expressed through an option, the option's
//! theoretical premium at each level.
//!
//! ## Core Features
//!
//! - **Underlying Targets**: price levels at sigma multiples from entry, on the
//!   favourable side of the position
//! - **Target Confidence**: `P(return ≥ target)` under a normal return model
//! - **Option Pricing**: European Black-Scholes prices and Greeks
//! - **Option Target Repricing**: premium at each target, optionally after time decay
//! - **Ranking**: confidence × move × liquidity × freshness score for display ordering
//!
//! Every calculation is a pure function of its arguments. Nothing is cached and
//! nothing is shared, so all entry points can be called concurrently from any
//! number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use reco_targets::{calculate_full_targets, FullTargetsRequest, OptionType, Side, TargetConfig};
//!
//! let config = TargetConfig::default();
//! let request = FullTargetsRequest::new(100.0, 0.25, Side::Long, 0.10)
//!     .with_option(105.0, 60.0 / 365.0, OptionType::Call)
//!     .with_implied_volatility(0.32);
//!
//! let bundle = calculate_full_targets(&request, &config)?;
//!
//! println!("TP1 {:.2} ({:.1}%)", bundle.underlying_targets.tp1, bundle.confidences.tp1 * 100.0);
//! println!("TP2 {:.2} ({:.1}%)", bundle.underlying_targets.tp2, bundle.confidences.tp2 * 100.0);
//! for target in bundle.option_targets.unwrap_or_default() {
//!     println!("  premium {:.2} at {:.2}", target.option_premium, target.underlying_target);
//! }
//! # Ok::<(), reco_targets::TargetsError>(())
//! ```
//!
//! ## Errors
//!
//! Bad inputs fail with [`TargetsError::InvalidArgument`] and the failure
//! surfaces unchanged through the workflow. A zero current option premium is
//! not an error: the affected `return_pct` fields are `None`.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for workflow steps, `trace` per
//! repriced level, `warn` for undefined option returns) and never installs a
//! subscriber.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod ranking;
pub mod workflow;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{EngineConfig, RankingConfig, TargetConfig};
pub use error::{Result, TargetsError};

// Pricing primitives
pub use models::bs::{black_scholes_greeks, black_scholes_price, Greeks, OptionType};
pub use models::normal::{normal_cdf, normal_pdf};

// Underlying targets and confidence
pub use models::targets::{
    calculate_target_confidence, calculate_target_ladder, calculate_underlying_targets,
    target_return, Side, TargetLevels, TargetPair,
};

// Option premium targets
pub use models::options::{
    calculate_option_target_premiums, reprice_at_targets, OptionContract, OptionTarget,
    DAYS_PER_YEAR,
};

// Workflow and ranking
pub use ranking::{
    age_minutes, calculate_rank, freshness_factor, DataQuality, QualityMetrics, RankInputs,
};
pub use workflow::{
    calculate_full_targets, FullTargetsRequest, ImpliedVolSource, OptionLeg, TargetBundle,
};
