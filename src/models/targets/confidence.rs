use crate::error::{ensure_finite, ensure_positive, Result};
use crate::models::normal::normal_cdf;

/// Probability that a Normal(`mu`, `sigma`²) return meets or exceeds `target_return`.
///
/// `confidence = 1 − Φ((target_return − mu) / sigma)`, clamped to `[0, 1]`.
///
/// The function works on signed returns and knows nothing about position side;
/// for a short position pass the favourable (sign-flipped) return, see
/// [`super::target_return`].
///
/// # Errors
///
/// `InvalidArgument` if `sigma <= 0` or any input is not finite.
pub fn calculate_target_confidence(mu: f64, sigma: f64, target_return: f64) -> Result<f64> {
    ensure_finite("mu", mu)?;
    ensure_positive("sigma", sigma)?;
    ensure_finite("target_return", target_return)?;

    let z = (target_return - mu) / sigma;
    Ok((1.0 - normal_cdf(z)).clamp(0.0, 1.0))
}
