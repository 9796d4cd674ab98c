//! Full target workflow: underlying targets, their confidences and, when an
//! option leg is attached, option premium targets.
//!
//! # Implied volatility
//!
//! Option repricing needs an implied volatility. When the request does not
//! carry a quoted one, the workflow reprices with the *predicted* volatility
//! instead ([`ImpliedVolSource::PredictedSigmaProxy`]). That treats a forecast of
//! realized volatility as if it were the market's implied volatility. The two
//! share units but are different quantities, so prefer
//! [`FullTargetsRequest::with_implied_volatility`] whenever a market IV is
//! available. The bundle records which source was used.

use tracing::{debug, debug_span};

use crate::config::TargetConfig;
use crate::error::{ensure_positive, Result, TargetsError};
use crate::models::bs::OptionType;
use crate::models::options::{reprice_at_targets, OptionContract, OptionTarget};
use crate::models::targets::{
    calculate_target_confidence, calculate_underlying_targets, target_return, Side, TargetPair,
};

/// Where the volatility used for option repricing comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImpliedVolSource {
    /// An implied volatility quoted by the market for this contract.
    Quoted(f64),
    /// Reuse the predicted (realized) volatility as an IV proxy.
    #[default]
    PredictedSigmaProxy,
}

impl ImpliedVolSource {
    /// The volatility to price with, given the request's predicted sigma.
    pub fn resolve(self, predicted_sigma: f64) -> f64 {
        match self {
            ImpliedVolSource::Quoted(iv) => iv,
            ImpliedVolSource::PredictedSigmaProxy => predicted_sigma,
        }
    }
}

/// A fully specified option leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionLeg {
    pub strike: f64,
    pub time_to_expiry_years: f64,
    pub option_type: OptionType,
}

/// Inputs to [`calculate_full_targets`].
///
/// The option leg is all-or-nothing: `strike`, `time_to_expiry_years` and
/// `option_type` must be supplied together or not at all.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullTargetsRequest {
    pub entry_price: f64,
    /// Annualized standard deviation of return
    pub predicted_sigma: f64,
    pub side: Side,
    /// Expected return
    pub mu: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strike: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_to_expiry_years: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub option_type: Option<OptionType>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub implied_volatility: ImpliedVolSource,
    /// Expected days to reach each target, used for time decay
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_eta_days: Option<Vec<f64>>,
}

impl FullTargetsRequest {
    pub fn new(entry_price: f64, predicted_sigma: f64, side: Side, mu: f64) -> Self {
        Self {
            entry_price,
            predicted_sigma,
            side,
            mu,
            strike: None,
            time_to_expiry_years: None,
            option_type: None,
            implied_volatility: ImpliedVolSource::default(),
            target_eta_days: None,
        }
    }

    pub fn with_option(
        mut self,
        strike: f64,
        time_to_expiry_years: f64,
        option_type: OptionType,
    ) -> Self {
        self.strike = Some(strike);
        self.time_to_expiry_years = Some(time_to_expiry_years);
        self.option_type = Some(option_type);
        self
    }

    pub fn with_implied_volatility(mut self, implied_volatility: f64) -> Self {
        self.implied_volatility = ImpliedVolSource::Quoted(implied_volatility);
        self
    }

    pub fn with_target_eta_days(mut self, days: Vec<f64>) -> Self {
        self.target_eta_days = Some(days);
        self
    }

    /// The option leg, if one was requested.
    ///
    /// Fails with `InvalidArgument` when only part of the leg is present.
    pub fn option_leg(&self) -> Result<Option<OptionLeg>> {
        match (self.strike, self.time_to_expiry_years, self.option_type) {
            (Some(strike), Some(time_to_expiry_years), Some(option_type)) => Ok(Some(OptionLeg {
                strike,
                time_to_expiry_years,
                option_type,
            })),
            (None, None, None) => Ok(None),
            (strike, tte, option_type) => Err(TargetsError::invalid(format!(
                "option leg needs strike, time_to_expiry_years and option_type together \
                 (strike: {}, time_to_expiry_years: {}, option_type: {})",
                presence(strike.is_some()),
                presence(tte.is_some()),
                presence(option_type.is_some()),
            ))),
        }
    }
}

fn presence(present: bool) -> &'static str {
    if present {
        "set"
    } else {
        "missing"
    }
}

/// Everything the workflow produces for one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetBundle {
    pub underlying_targets: TargetPair,
    /// Probability of reaching each target, in `[0, 1]`
    pub confidences: TargetPair,
    /// One entry per underlying target; `None` when no option leg was requested
    pub option_targets: Option<Vec<OptionTarget>>,
    /// Volatility source used for `option_targets`
    pub iv_source: Option<ImpliedVolSource>,
}

/// Run the whole target workflow for one request.
///
/// 1. TP1/TP2 from [`calculate_underlying_targets`] with the multipliers in `config`.
/// 2. A confidence per target from [`calculate_target_confidence`], using the
///    favourable return (`(tp − entry)/entry` long, `(entry − tp)/entry` short)
///    against `mu` and `predicted_sigma`.
/// 3. If the request has an option leg, option premium targets at TP1/TP2 using
///    `config.risk_free_rate` and the request's IV source.
///
/// Errors from any step are returned unchanged. Note that confidence needs
/// `predicted_sigma > 0`, so a zero-sigma request fails at step 2.
///
/// # Example
///
/// ```rust
/// use reco_targets::{calculate_full_targets, FullTargetsRequest, OptionType, Side, TargetConfig};
///
/// let request = FullTargetsRequest::new(100.0, 0.25, Side::Long, 0.10)
///     .with_option(105.0, 60.0 / 365.0, OptionType::Call);
/// let bundle = calculate_full_targets(&request, &TargetConfig::default())?;
///
/// assert!(bundle.underlying_targets.tp1 > 100.0);
/// assert_eq!(bundle.option_targets.map(|t| t.len()), Some(2));
/// # Ok::<(), reco_targets::TargetsError>(())
/// ```
pub fn calculate_full_targets(
    request: &FullTargetsRequest,
    config: &TargetConfig,
) -> Result<TargetBundle> {
    let _span = debug_span!(
        "calculate_full_targets",
        side = %request.side,
        entry_price = request.entry_price
    )
    .entered();

    let leg = request.option_leg()?;

    let targets = calculate_underlying_targets(
        request.entry_price,
        request.predicted_sigma,
        request.side,
        &config.levels(),
    )?;

    let confidences = targets.try_map(|tp| {
        let favourable = target_return(request.entry_price, tp, request.side)?;
        calculate_target_confidence(request.mu, request.predicted_sigma, favourable)
    })?;

    debug!(
        tp1 = targets.tp1,
        tp2 = targets.tp2,
        conf1 = confidences.tp1,
        conf2 = confidences.tp2,
        "underlying targets computed"
    );

    let Some(leg) = leg else {
        if request.target_eta_days.is_some() {
            debug!("target_eta_days ignored without an option leg");
        }
        return Ok(TargetBundle {
            underlying_targets: targets,
            confidences,
            option_targets: None,
            iv_source: None,
        });
    };

    let implied_volatility = request.implied_volatility.resolve(request.predicted_sigma);
    ensure_positive("implied_volatility", implied_volatility)?;
    if request.implied_volatility == ImpliedVolSource::PredictedSigmaProxy {
        debug!(
            implied_volatility,
            "no quoted IV; repricing with predicted sigma as proxy"
        );
    }

    let contract = OptionContract {
        option_type: leg.option_type,
        strike: leg.strike,
        time_to_expiry_years: leg.time_to_expiry_years,
        risk_free_rate: config.risk_free_rate,
        implied_volatility,
    };

    let option_targets = reprice_at_targets(
        request.entry_price,
        &targets.to_vec(),
        &contract,
        request.target_eta_days.as_deref(),
    )?;

    let undefined_returns = option_targets
        .iter()
        .filter(|t| !t.has_defined_return())
        .count();
    debug!(
        option_type = %leg.option_type,
        strike = leg.strike,
        levels = option_targets.len(),
        undefined_returns,
        "option targets computed"
    );

    Ok(TargetBundle {
        underlying_targets: targets,
        confidences,
        option_targets: Some(option_targets),
        iv_source: Some(request.implied_volatility),
    })
}
