#![cfg(feature = "serde")]


use chrono::{Duration, TimeZone, Utc};
use reco_targets::{
    calculate_full_targets, calculate_rank, EngineConfig, FullTargetsRequest, QualityMetrics,
    RankInputs, Side, TargetsError,
};
use test_utils::assert_close;

/// Loads the checked-in config file and checks overridden and defaulted keys.
#[test]
fn test_load_engine_config_file() {
    let config = EngineConfig::from_file("tests/data/engine.toml").expect("Failed to load config");

    assert_eq!(config.targets.tp1_multiplier, 0.5);
    assert_eq!(config.targets.tp2_multiplier, 1.25);
    assert_eq!(config.targets.risk_free_rate, 0.045);
    assert_eq!(config.ranking.fresh_minutes, 10.0);
    assert_eq!(config.ranking.half_life_minutes, 20.0);
    assert_eq!(config.ranking.freshness_floor, 0.1);
}

#[test]
fn test_missing_config_file() {
    let err = EngineConfig::from_file("tests/data/does_not_exist.toml").unwrap_err();
    assert!(matches!(err, TargetsError::Io(_)));
}

/// Loaded multipliers and ranking settings flow through to results.
#[test]
fn test_loaded_config_drives_workflow_and_rank() {
    let config = EngineConfig::from_file("tests/data/engine.toml").unwrap();

    let request = FullTargetsRequest::new(80.0, 0.40, Side::Long, 0.05);
    let bundle = calculate_full_targets(&request, &config.targets).unwrap();
    assert_close(bundle.underlying_targets.tp1, 96.0, 1e-9, "tp1");
    assert_close(bundle.underlying_targets.tp2, 120.0, 1e-9, "tp2");

    let asof = Utc.with_ymd_and_hms(2025, 6, 2, 15, 0, 0).unwrap();
    let inputs = RankInputs {
        confidence_overall: bundle.confidences.tp1,
        expected_move_pct: Some(20.0),
        quality: Some(QualityMetrics {
            liquidity_score: Some(0.9),
            ..Default::default()
        }),
        asof,
    };

    // Fresh for 10 minutes, then a 20 minute half-life.
    let fresh = calculate_rank(&inputs, asof + Duration::minutes(10), &config.ranking).unwrap();
    let decayed = calculate_rank(&inputs, asof + Duration::minutes(30), &config.ranking).unwrap();
    assert_close(fresh, bundle.confidences.tp1 * 20.0 * 0.9, 1e-12, "fresh rank");
    assert_close(decayed, fresh * 0.5, 1e-12, "decayed rank");
}
