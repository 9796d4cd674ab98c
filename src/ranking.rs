//! Display ranking for recommendations
//!
//! `rank = confidence_overall × |expected_move_pct| × liquidity_score × freshness`
//!
//! Freshness stays at 1.0 for the first few minutes after a recommendation is
//! generated, then halves every `half_life_minutes`, never dropping below the
//! configured floor. The current time is an argument so ranking stays a pure
//! function of its inputs.

use chrono::{DateTime, Utc};

use crate::config::RankingConfig;
use crate::error::{ensure_finite, Result, TargetsError};

/// Coarse data-quality grade attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataQuality {
    High,
    Medium,
    Low,
}

/// Quality metrics stored alongside a recommendation.
///
/// Only `liquidity_score` feeds the rank; the other fields are carried for
/// display.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityMetrics {
    #[cfg_attr(feature = "serde", serde(default))]
    pub liquidity_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub data_quality: Option<DataQuality>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub model_version: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub signal_strength: Option<f64>,
}

/// The recommendation fields the rank is computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankInputs {
    /// Overall confidence in `[0, 1]`
    pub confidence_overall: f64,
    /// Expected move in percent; negative for short ideas
    pub expected_move_pct: Option<f64>,
    pub quality: Option<QualityMetrics>,
    /// When the recommendation was generated
    pub asof: DateTime<Utc>,
}

/// Freshness multiplier for a recommendation `age_minutes` old.
pub fn freshness_factor(age_minutes: f64, config: &RankingConfig) -> f64 {
    if age_minutes.is_nan() || age_minutes <= config.fresh_minutes {
        return 1.0;
    }
    let half_lives = (age_minutes - config.fresh_minutes) / config.half_life_minutes;
    0.5_f64.powf(half_lives).max(config.freshness_floor).min(1.0)
}

/// Minutes elapsed between `asof` and `now`, with sub-second precision.
pub fn age_minutes(asof: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let elapsed = now.signed_duration_since(asof);
    elapsed.num_milliseconds() as f64 / 60_000.0
}

/// Rank a recommendation as of `now`.
///
/// A missing expected move falls back to `config.default_expected_move_pct`
/// and a missing quality record or liquidity score to
/// `config.default_liquidity_score`. A recommendation stamped in the future
/// counts as fresh.
///
/// # Errors
///
/// `Config` if `config` fails [`RankingConfig::validate`]. `InvalidArgument`
/// if `confidence_overall` or a supplied liquidity score is outside `[0, 1]`,
/// or the expected move is not finite.
pub fn calculate_rank(
    inputs: &RankInputs,
    now: DateTime<Utc>,
    config: &RankingConfig,
) -> Result<f64> {
    config.validate()?;
    ensure_unit_interval("confidence_overall", inputs.confidence_overall)?;

    let move_pct = match inputs.expected_move_pct {
        Some(pct) => {
            ensure_finite("expected_move_pct", pct)?;
            pct.abs()
        }
        None => config.default_expected_move_pct.abs(),
    };

    let liquidity = match inputs.quality.as_ref().and_then(|q| q.liquidity_score) {
        Some(score) => {
            ensure_unit_interval("liquidity_score", score)?;
            score
        }
        None => config.default_liquidity_score,
    };

    let freshness = freshness_factor(age_minutes(inputs.asof, now), config);

    Ok(inputs.confidence_overall * move_pct * liquidity * freshness)
}

fn ensure_unit_interval(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TargetsError::invalid(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}
