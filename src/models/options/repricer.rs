use tracing::{trace, warn};

use crate::error::{ensure_non_negative, ensure_positive, Result, TargetsError};
use crate::models::bs::{black_scholes_price, OptionType};

/// Calendar days per year used to turn days-to-target into year fractions.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option premium at one underlying target level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionTarget {
    /// Underlying price the option was repriced at
    pub underlying_target: f64,
    /// Theoretical premium at that price
    pub option_premium: f64,
    /// Percent change from today's premium.
    ///
    /// `None` when today's premium is zero, in which case the return cannot be
    /// represented.
    pub return_pct: Option<f64>,
    /// Time left to expiry when the target is reached; only set when
    /// days-to-target were supplied.
    pub time_remaining_years: Option<f64>,
}

impl OptionTarget {
    pub fn has_defined_return(&self) -> bool {
        self.return_pct.is_some()
    }
}

/// Contract terms shared by every repricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    pub option_type: OptionType,
    pub strike: f64,
    pub time_to_expiry_years: f64,
    pub risk_free_rate: f64,
    pub implied_volatility: f64,
}

/// Reprice an option at each underlying target level.
///
/// Today's premium is priced once at `current_underlying_price` with the full
/// `time_to_expiry_years`. Each target is then priced at its own underlying
/// level. When `time_decay_days` is supplied, target `i` is priced with
/// `time_to_expiry_years − time_decay_days[i] / 365` years left, floored at
/// zero (a target reached after expiry is priced at intrinsic value).
///
/// `return_pct = (target_premium − current_premium) / current_premium × 100`,
/// or `None` when `current_premium` is zero.
///
/// # Errors
///
/// `InvalidArgument` if `underlying_targets` is empty, `time_decay_days` has a
/// different length or a negative entry, `implied_volatility <= 0`, or any
/// pricing call rejects its inputs.
///
/// # Example
///
/// ```rust
/// use reco_targets::{calculate_option_target_premiums, OptionType};
///
/// let targets = calculate_option_target_premiums(
///     100.0,
///     &[110.0, 120.0],
///     105.0,
///     0.25,
///     0.05,
///     0.30,
///     OptionType::Call,
///     None,
/// )?;
/// assert_eq!(targets.len(), 2);
/// assert!(targets[1].option_premium > targets[0].option_premium);
/// # Ok::<(), reco_targets::TargetsError>(())
/// ```
#[allow(clippy::too_many_arguments)]
pub fn calculate_option_target_premiums(
    current_underlying_price: f64,
    underlying_targets: &[f64],
    strike: f64,
    time_to_expiry_years: f64,
    risk_free_rate: f64,
    implied_volatility: f64,
    option_type: OptionType,
    time_decay_days: Option<&[f64]>,
) -> Result<Vec<OptionTarget>> {
    let contract = OptionContract {
        option_type,
        strike,
        time_to_expiry_years,
        risk_free_rate,
        implied_volatility,
    };
    reprice_at_targets(
        current_underlying_price,
        underlying_targets,
        &contract,
        time_decay_days,
    )
}

/// [`calculate_option_target_premiums`] with the contract terms bundled.
pub fn reprice_at_targets(
    current_underlying_price: f64,
    underlying_targets: &[f64],
    contract: &OptionContract,
    time_decay_days: Option<&[f64]>,
) -> Result<Vec<OptionTarget>> {
    if underlying_targets.is_empty() {
        return Err(TargetsError::invalid(
            "underlying_targets must contain at least one level",
        ));
    }
    ensure_positive("implied_volatility", contract.implied_volatility)?;

    if let Some(days) = time_decay_days {
        if days.len() != underlying_targets.len() {
            return Err(TargetsError::invalid(format!(
                "time_decay_days has {} entries for {} underlying targets",
                days.len(),
                underlying_targets.len()
            )));
        }
        for &d in days {
            ensure_non_negative("time_decay_days entry", d)?;
        }
    }

    let price_at = |spot: f64, years: f64| {
        black_scholes_price(
            spot,
            contract.strike,
            years,
            contract.risk_free_rate,
            contract.implied_volatility,
            contract.option_type,
        )
    };

    let current_premium = price_at(current_underlying_price, contract.time_to_expiry_years)?;
    if current_premium == 0.0 {
        warn!(
            spot = current_underlying_price,
            strike = contract.strike,
            option_type = %contract.option_type,
            "current premium is zero; option target returns are undefined"
        );
    }

    underlying_targets
        .iter()
        .enumerate()
        .map(|(i, &level)| {
            let time_remaining = time_decay_days.map(|days| {
                (contract.time_to_expiry_years - days[i] / DAYS_PER_YEAR).max(0.0)
            });
            let years = time_remaining.unwrap_or(contract.time_to_expiry_years);
            let option_premium = price_at(level, years)?;

            let return_pct = if current_premium > 0.0 {
                Some((option_premium - current_premium) / current_premium * 100.0)
            } else {
                None
            };

            trace!(level, years, option_premium, ?return_pct, "repriced option at target");

            Ok(OptionTarget {
                underlying_target: level,
                option_premium,
                return_pct,
                time_remaining_years: time_remaining,
            })
        })
        .collect()
}
