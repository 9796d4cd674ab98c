use crate::error::{ensure_non_negative, ensure_positive, Result, TargetsError};

use super::types::*;

/// Price levels at arbitrary sigma multiples from entry.
///
/// For each multiplier `m`, the move is `m × predicted_sigma × entry_price`,
/// added to the entry for [`Side::Long`] and subtracted for [`Side::Short`].
/// Levels come back in the order of `multipliers`.
///
/// A `predicted_sigma` of zero is allowed and collapses every level onto the
/// entry price.
///
/// # Errors
///
/// `InvalidArgument` if `entry_price <= 0`, `predicted_sigma < 0`,
/// `multipliers` is empty, or any multiplier is `<= 0`. For [`Side::Short`]
/// every `multiplier × predicted_sigma` must stay below 1, otherwise the
/// target would sit at or below zero.
pub fn calculate_target_ladder(
    entry_price: f64,
    predicted_sigma: f64,
    side: Side,
    multipliers: &[f64],
) -> Result<Vec<f64>> {
    ensure_positive("entry_price", entry_price)?;
    ensure_non_negative("predicted_sigma", predicted_sigma)?;
    if multipliers.is_empty() {
        return Err(TargetsError::invalid("at least one sigma multiplier is required"));
    }
    for &m in multipliers {
        ensure_positive("sigma multiplier", m)?;
        if side == Side::Short && m * predicted_sigma >= 1.0 {
            return Err(TargetsError::invalid(format!(
                "short target at sigma multiplier {m} with predicted_sigma {predicted_sigma} \
                 is not positive (multiplier × sigma must be below 1)"
            )));
        }
    }

    let one_sigma_move = predicted_sigma * entry_price;
    Ok(multipliers
        .iter()
        .map(|m| entry_price + side.sign() * m * one_sigma_move)
        .collect())
}

/// TP1 and TP2 for a position, using the multipliers in `levels`.
///
/// # Example
///
/// ```rust
/// use reco_targets::{calculate_underlying_targets, Side, TargetLevels};
///
/// let targets = calculate_underlying_targets(100.0, 0.20, Side::Long, &TargetLevels::default())?;
/// assert!((targets.tp1 - 112.0).abs() < 1e-9);
/// assert!((targets.tp2 - 120.0).abs() < 1e-9);
/// # Ok::<(), reco_targets::TargetsError>(())
/// ```
pub fn calculate_underlying_targets(
    entry_price: f64,
    predicted_sigma: f64,
    side: Side,
    levels: &TargetLevels,
) -> Result<TargetPair> {
    let ladder =
        calculate_target_ladder(entry_price, predicted_sigma, side, &levels.multipliers())?;
    Ok(TargetPair::new(ladder[0], ladder[1]))
}

/// Return of moving from `entry_price` to `target`, signed so that a move in the
/// position's favour is positive.
pub fn target_return(entry_price: f64, target: f64, side: Side) -> Result<f64> {
    ensure_positive("entry_price", entry_price)?;
    ensure_positive("target", target)?;
    Ok(side.sign() * (target - entry_price) / entry_price)
}
