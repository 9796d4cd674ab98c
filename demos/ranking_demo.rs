// demos/ranking_demo.rs

//! Ranking recommendations by confidence, expected move, liquidity and age
//!
//! Loads settings from a TOML file when one is passed as the first argument,
//! otherwise uses the defaults.

use anyhow::Result;
use chrono::{Duration, Utc};
use reco_targets::{
    calculate_rank, freshness_factor, DataQuality, EngineConfig, QualityMetrics, RankInputs,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    println!("Freshness Curve");
    println!("===============");
    for age in [0.0, 5.0, 15.0, 35.0, 65.0, 120.0, 240.0] {
        println!("{:>6.0} min  {:.3}", age, freshness_factor(age, &config.ranking));
    }

    let now = Utc::now();
    let ideas = vec![
        ("AAPL", 0.82, Some(3.5), Some(0.95), 2),
        ("TSLA", 0.71, Some(-8.0), Some(0.93), 40),
        ("XOM", 0.77, None, None, 12),
        ("PLTR", 0.66, Some(11.0), Some(0.78), 90),
    ];

    let mut ranked = Vec::with_capacity(ideas.len());
    for (symbol, confidence, expected_move_pct, liquidity, age_minutes) in ideas {
        let inputs = RankInputs {
            confidence_overall: confidence,
            expected_move_pct,
            quality: liquidity.map(|score| QualityMetrics {
                liquidity_score: Some(score),
                data_quality: Some(DataQuality::High),
                ..Default::default()
            }),
            asof: now - Duration::minutes(age_minutes),
        };
        ranked.push((symbol, calculate_rank(&inputs, now, &config.ranking)?));
    }

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    println!("\nRanked Recommendations");
    println!("======================");
    for (i, (symbol, rank)) in ranked.iter().enumerate() {
        println!("{}. {:<5} {:.4}", i + 1, symbol, rank);
    }

    Ok(())
}
