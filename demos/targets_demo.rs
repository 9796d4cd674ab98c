// demos/targets_demo.rs

//! Walk-through of the target workflow
//!
//! This example shows how to:
//! 1. Build volatility-scaled targets for long and short ideas
//! 2. Read the confidence attached to each target
//! 3. Price the option leg and its Greeks
//! 4. Reprice the option at each target, with and without time decay
//!
//! Run with `RUST_LOG=reco_targets=trace` to see the library's events.

use anyhow::Result;
use reco_targets::{
    black_scholes_greeks, black_scholes_price, calculate_full_targets,
    calculate_option_target_premiums, calculate_target_confidence, calculate_underlying_targets,
    FullTargetsRequest, OptionType, Side, TargetConfig,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TargetConfig::default();

    println!("Underlying Targets");
    println!("==================");
    for (side, entry, sigma) in [(Side::Long, 150.0, 0.30), (Side::Short, 200.0, 0.25)] {
        let targets = calculate_underlying_targets(entry, sigma, side, &config.levels())?;
        println!(
            "{:<5} entry ${:.2}, sigma {:.0}%: TP1 ${:.2} ({:+.1}%), TP2 ${:.2} ({:+.1}%)",
            side,
            entry,
            sigma * 100.0,
            targets.tp1,
            (targets.tp1 - entry) / entry * 100.0,
            targets.tp2,
            (targets.tp2 - entry) / entry * 100.0,
        );
    }

    println!("\nTarget Confidence (mu 8%, sigma 20%)");
    println!("{}", "-".repeat(36));
    for target in [0.05, 0.10, 0.15, 0.20] {
        let confidence = calculate_target_confidence(0.08, 0.20, target)?;
        println!("{:>7.1}%      | {:>5.1}%", target * 100.0, confidence * 100.0);
    }

    println!("\nOption Leg: 105 CALL, 60 DTE, IV 32%");
    println!("{}", "-".repeat(36));
    let (spot, strike, years, iv) = (100.0, 105.0, 60.0 / 365.0, 0.32);
    let premium = black_scholes_price(spot, strike, years, config.risk_free_rate, iv, OptionType::Call)?;
    let greeks = black_scholes_greeks(spot, strike, years, config.risk_free_rate, iv, OptionType::Call)?;
    println!("Premium ${:.2}", premium);
    println!(
        "Delta {:.3}  Gamma {:.4}  Theta {:.3}/day  Vega {:.3}  Rho {:.3}",
        greeks.delta, greeks.gamma, greeks.theta, greeks.vega, greeks.rho
    );

    println!("\nPremium at Targets");
    println!("{:<10} {:<12} {:<12} {:<10}", "Target", "No decay", "With decay", "Return");
    println!("{}", "-".repeat(46));
    let levels = [110.0, 120.0];
    let static_targets = calculate_option_target_premiums(
        spot,
        &levels,
        strike,
        years,
        config.risk_free_rate,
        iv,
        OptionType::Call,
        None,
    )?;
    let decayed_targets = calculate_option_target_premiums(
        spot,
        &levels,
        strike,
        years,
        config.risk_free_rate,
        iv,
        OptionType::Call,
        Some(&[15.0, 35.0]),
    )?;
    for (a, b) in static_targets.iter().zip(&decayed_targets) {
        let ret = b
            .return_pct
            .map(|r| format!("{:+.1}%", r))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "${:<9.2} ${:<11.2} ${:<11.2} {}",
            a.underlying_target, a.option_premium, b.option_premium, ret
        );
    }

    println!("\nFull Workflow");
    println!("=============");
    let request = FullTargetsRequest::new(100.0, 0.25, Side::Long, 0.10)
        .with_option(strike, years, OptionType::Call)
        .with_implied_volatility(iv)
        .with_target_eta_days(vec![10.0, 30.0]);
    let bundle = calculate_full_targets(&request, &config)?;
    println!(
        "TP1 ${:.2} @ {:.1}%   TP2 ${:.2} @ {:.1}%",
        bundle.underlying_targets.tp1,
        bundle.confidences.tp1 * 100.0,
        bundle.underlying_targets.tp2,
        bundle.confidences.tp2 * 100.0,
    );
    for target in bundle.option_targets.unwrap_or_default() {
        println!(
            "  option ${:.2} at ${:.2}, {:.0} days left",
            target.option_premium,
            target.underlying_target,
            target.time_remaining_years.unwrap_or(years) * 365.0
        );
    }

    Ok(())
}
