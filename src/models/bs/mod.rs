//! European Black-Scholes pricing (no dividends) with closed-form Greeks.
//!
//! Both entry points validate their inputs and fail with
//! [`TargetsError::InvalidArgument`] on a non-positive spot or strike, negative
//! time or volatility, or any non-finite value.

use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, Result, TargetsError};
use crate::models::normal::{normal_cdf, normal_pdf};

/// Option right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    #[cfg_attr(feature = "serde", serde(alias = "call"))]
    Call,
    #[cfg_attr(feature = "serde", serde(alias = "put"))]
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.pad("CALL"),
            OptionType::Put => f.pad("PUT"),
        }
    }
}

impl FromStr for OptionType {
    type Err = TargetsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(TargetsError::invalid(format!(
                "option_type must be CALL or PUT, got {s:?}"
            ))),
        }
    }
}

/// First-order and second-order price sensitivities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// Value change per calendar day
    pub theta: f64,
    /// Value change per one volatility point (0.01)
    pub vega: f64,
    /// Value change per one rate point (0.01)
    pub rho: f64,
}

#[allow(non_snake_case)]
fn validate(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> Result<()> {
    ensure_positive("S", S)?;
    ensure_positive("K", K)?;
    ensure_non_negative("T", T)?;
    ensure_finite("r", r)?;
    ensure_non_negative("sigma", sigma)
}

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Theoretical premium of a European option.
///
/// With `T > 0` and `sigma > 0` this is the standard closed form:
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 − σ·√T
/// CALL = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// PUT  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// With no time value left (`T == 0`) the premium is intrinsic value. With zero
/// volatility before expiry the underlying grows deterministically at `r`, so the
/// premium is the discounted intrinsic value against the forward `S·e^(rT)`;
/// this keeps put-call parity exact in the degenerate case. The result is never
/// negative.
///
/// # Example
///
/// ```rust
/// use reco_targets::{black_scholes_price, OptionType};
///
/// let call = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call)?;
/// assert!((call - 10.4506).abs() < 1e-3);
/// # Ok::<(), reco_targets::TargetsError>(())
/// ```
#[allow(non_snake_case)]
pub fn black_scholes_price(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    option_type: OptionType,
) -> Result<f64> {
    validate(S, K, T, r, sigma)?;

    let discount = (-r * T).exp();

    if T == 0.0 || sigma == 0.0 {
        let forward = S / discount;
        let intrinsic = match option_type {
            OptionType::Call => forward - K,
            OptionType::Put => K - forward,
        };
        return Ok(intrinsic.max(0.0) * discount);
    }

    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    let price = match option_type {
        OptionType::Call => S * normal_cdf(d1) - K * discount * normal_cdf(d2),
        OptionType::Put => K * discount * normal_cdf(-d2) - S * normal_cdf(-d1),
    };

    Ok(price.max(0.0))
}

/// Closed-form Greeks for the same contract [`black_scholes_price`] prices.
///
/// Theta is expressed per calendar day, vega and rho per one-point move
/// (0.01) in volatility and rate. When `T == 0` or `sigma == 0` the option
/// behaves like a forward payoff: delta is 0 or ±1 depending on which side of
/// the strike the forward sits, and every other Greek is 0.
#[allow(non_snake_case)]
pub fn black_scholes_greeks(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    option_type: OptionType,
) -> Result<Greeks> {
    validate(S, K, T, r, sigma)?;

    let discount = (-r * T).exp();

    if T == 0.0 || sigma == 0.0 {
        let forward = S / discount;
        let delta = match option_type {
            OptionType::Call if forward > K => 1.0,
            OptionType::Put if forward < K => -1.0,
            _ => 0.0,
        };
        return Ok(Greeks {
            delta,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
        });
    }

    let sqrt_t = T.sqrt();
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    let pdf_d1 = normal_pdf(d1);

    let gamma = pdf_d1 / (S * sigma * sqrt_t);
    let vega = S * pdf_d1 * sqrt_t / 100.0;
    let decay = -(S * pdf_d1 * sigma) / (2.0 * sqrt_t);

    let greeks = match option_type {
        OptionType::Call => Greeks {
            delta: normal_cdf(d1),
            gamma,
            theta: (decay - r * K * discount * normal_cdf(d2)) / 365.0,
            vega,
            rho: K * T * discount * normal_cdf(d2) / 100.0,
        },
        OptionType::Put => Greeks {
            delta: normal_cdf(d1) - 1.0,
            gamma,
            theta: (decay + r * K * discount * normal_cdf(-d2)) / 365.0,
            vega,
            rho: -K * T * discount * normal_cdf(-d2) / 100.0,
        },
    };

    Ok(greeks)
}
