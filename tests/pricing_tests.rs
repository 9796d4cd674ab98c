
use reco_targets::{black_scholes_greeks, black_scholes_price, normal_cdf, OptionType};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{assert_close, load_reference_prices, random_pricing_cases, rng};

use rand::Rng;

/// Prices every row of the reference table and compares to 1e-6.
#[test]
fn test_reference_table() {
    let rows = load_reference_prices("tests/data/bs_reference.csv").expect("Failed to load reference data");
    assert!(rows.len() >= 20, "reference table looks truncated");

    for row in &rows {
        let price = black_scholes_price(
            row.spot,
            row.strike,
            row.years_to_exp,
            row.rate,
            row.volatility,
            row.option_type,
        )
        .expect("reference row should be valid");

        assert_close(
            price,
            row.price,
            1e-6,
            &format!(
                "{} S={} K={} T={} r={} vol={}",
                row.option_type, row.spot, row.strike, row.years_to_exp, row.rate, row.volatility
            ),
        );
    }
}

/// Black-Scholes call at S=K=100, T=1, r=5%, vol=20% is the textbook 10.45.
#[test]
fn test_textbook_call() {
    let price = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call).unwrap();
    assert_close(price, 10.45, 5e-3, "textbook call");
}

/// C − P = S − K·e^(−rT) for random inputs, including expired and zero-vol cases.
#[test]
fn test_put_call_parity() {
    for case in random_pricing_cases(2000) {
        let call = black_scholes_price(
            case.spot,
            case.strike,
            case.years,
            case.rate,
            case.vol,
            OptionType::Call,
        )
        .unwrap();
        let put = black_scholes_price(
            case.spot,
            case.strike,
            case.years,
            case.rate,
            case.vol,
            OptionType::Put,
        )
        .unwrap();

        let parity = case.spot - case.strike * (-case.rate * case.years).exp();
        // Scale the tolerance with the notional; prices go up to ~1500.
        let tol = 1e-4_f64.max(1e-10 * case.spot);
        assert_close(call - put, parity, tol, &format!("parity {:?}", case));
        assert!(call >= 0.0 && put >= 0.0, "negative premium for {:?}", case);
    }
}

/// Call premium is non-decreasing in spot and non-increasing in strike.
#[test]
fn test_call_monotonic_in_spot_and_strike() {
    for case in random_pricing_cases(300) {
        let price = |s: f64, k: f64| {
            black_scholes_price(s, k, case.years, case.rate, case.vol, OptionType::Call).unwrap()
        };
        let base = price(case.spot, case.strike);
        assert!(price(case.spot * 1.05, case.strike) >= base - 1e-9, "{:?}", case);
        assert!(price(case.spot, case.strike * 1.05) <= base + 1e-9, "{:?}", case);
    }
}

/// Invalid-input rejection for the pricer.
#[test]
fn test_rejects_invalid_inputs() {
    let err = black_scholes_price(0.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap_err();
    assert!(err.is_invalid_argument());

    for (s, k, t, sigma) in [
        (-100.0, 100.0, 0.25, 0.2),
        (100.0, 0.0, 0.25, 0.2),
        (100.0, 100.0, -0.25, 0.2),
        (100.0, 100.0, 0.25, -0.2),
        (f64::INFINITY, 100.0, 0.25, 0.2),
    ] {
        assert!(black_scholes_price(s, k, t, 0.05, sigma, OptionType::Put).is_err());
        assert!(black_scholes_greeks(s, k, t, 0.05, sigma, OptionType::Put).is_err());
    }
}

/// Φ(0) = 0.5, Φ(−x) = 1 − Φ(x), and agreement with statrs.
#[test]
fn test_normal_cdf_properties() {
    assert_eq!(normal_cdf(0.0), 0.5);

    let reference = Normal::new(0.0, 1.0).unwrap();
    let mut rng = rng();
    for _ in 0..5000 {
        let x: f64 = rng.gen_range(-8.0..8.0);
        assert_close(normal_cdf(-x), 1.0 - normal_cdf(x), 1e-6, "symmetry");
        assert_close(normal_cdf(x), reference.cdf(x), 1e-9, "statrs agreement");
        let p = normal_cdf(x);
        assert!((0.0..=1.0).contains(&p));
    }
}

/// Delta and vega match central finite differences of the price.
#[test]
fn test_greeks_match_finite_differences() {
    let (s, k, t, r, vol) = (100.0, 105.0, 0.5, 0.03, 0.25);
    for option_type in [OptionType::Call, OptionType::Put] {
        let greeks = black_scholes_greeks(s, k, t, r, vol, option_type).unwrap();
        let price = |s: f64, vol: f64| black_scholes_price(s, k, t, r, vol, option_type).unwrap();

        let h = 1e-3;
        let fd_delta = (price(s + h, vol) - price(s - h, vol)) / (2.0 * h);
        let fd_gamma = (price(s + h, vol) - 2.0 * price(s, vol) + price(s - h, vol)) / (h * h);
        let fd_vega = (price(s, vol + 1e-4) - price(s, vol - 1e-4)) / 2e-4 / 100.0;

        assert_close(greeks.delta, fd_delta, 1e-6, "delta");
        assert_close(greeks.gamma, fd_gamma, 1e-4, "gamma");
        assert_close(greeks.vega, fd_vega, 1e-6, "vega");

        let one_day = 1.0 / 365.0;
        let fd_theta = black_scholes_price(s, k, t - one_day, r, vol, option_type).unwrap()
            - price(s, vol);
        assert_close(greeks.theta, fd_theta, 1e-3, "theta");
    }
}
