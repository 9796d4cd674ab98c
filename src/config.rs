use crate::error::{Result, TargetsError};
use crate::models::targets::TargetLevels;

/// Settings for the target workflow.
///
/// Replaces the keyword defaults a caller would otherwise repeat at every call
/// site. Every field has a documented default and can be overridden from TOML.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetConfig {
    /// Sigma multiple for the first take-profit rung
    #[cfg_attr(feature = "serde", serde(default = "default_tp1_multiplier"))]
    pub tp1_multiplier: f64,

    /// Sigma multiple for the second take-profit rung
    #[cfg_attr(feature = "serde", serde(default = "default_tp2_multiplier"))]
    pub tp2_multiplier: f64,

    /// Annualized, continuously compounded risk-free rate used for option repricing
    #[cfg_attr(feature = "serde", serde(default = "default_risk_free_rate"))]
    pub risk_free_rate: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            tp1_multiplier: default_tp1_multiplier(),
            tp2_multiplier: default_tp2_multiplier(),
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

impl TargetConfig {
    /// The target-level descriptor carried by this config.
    pub fn levels(&self) -> TargetLevels {
        TargetLevels {
            tp1_multiplier: self.tp1_multiplier,
            tp2_multiplier: self.tp2_multiplier,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_config(
            "tp1_multiplier",
            self.tp1_multiplier,
            self.tp1_multiplier > 0.0,
        )?;
        check_config(
            "tp2_multiplier",
            self.tp2_multiplier,
            self.tp2_multiplier > 0.0,
        )?;
        check_config("risk_free_rate", self.risk_free_rate, true)
    }
}

/// Settings for recommendation ranking and freshness decay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingConfig {
    /// Age in minutes during which a recommendation keeps full freshness
    #[cfg_attr(feature = "serde", serde(default = "default_fresh_minutes"))]
    pub fresh_minutes: f64,

    /// Half-life in minutes of the exponential decay that starts after `fresh_minutes`
    #[cfg_attr(feature = "serde", serde(default = "default_half_life_minutes"))]
    pub half_life_minutes: f64,

    /// Lower bound on the freshness factor
    #[cfg_attr(feature = "serde", serde(default = "default_freshness_floor"))]
    pub freshness_floor: f64,

    /// Liquidity score assumed when a recommendation has none
    #[cfg_attr(feature = "serde", serde(default = "default_liquidity_score"))]
    pub default_liquidity_score: f64,

    /// Expected move (percent) assumed when a recommendation has none
    #[cfg_attr(feature = "serde", serde(default = "default_expected_move_pct"))]
    pub default_expected_move_pct: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            fresh_minutes: default_fresh_minutes(),
            half_life_minutes: default_half_life_minutes(),
            freshness_floor: default_freshness_floor(),
            default_liquidity_score: default_liquidity_score(),
            default_expected_move_pct: default_expected_move_pct(),
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        check_config(
            "fresh_minutes",
            self.fresh_minutes,
            self.fresh_minutes >= 0.0,
        )?;
        check_config(
            "half_life_minutes",
            self.half_life_minutes,
            self.half_life_minutes > 0.0,
        )?;
        check_config(
            "freshness_floor",
            self.freshness_floor,
            (0.0..=1.0).contains(&self.freshness_floor),
        )?;
        check_config(
            "default_liquidity_score",
            self.default_liquidity_score,
            (0.0..=1.0).contains(&self.default_liquidity_score),
        )?;
        check_config(
            "default_expected_move_pct",
            self.default_expected_move_pct,
            true,
        )
    }
}

/// Top-level configuration, one table per concern.
///
/// ```toml
/// [targets]
/// tp1_multiplier = 0.5
/// risk_free_rate = 0.045
///
/// [ranking]
/// half_life_minutes = 45.0
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub targets: TargetConfig,

    #[cfg_attr(feature = "serde", serde(default))]
    pub ranking: RankingConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.targets.validate()?;
        self.ranking.validate()
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded engine configuration");
        Ok(config)
    }
}

fn check_config(name: &str, value: f64, in_range: bool) -> Result<()> {
    if value.is_finite() && in_range {
        Ok(())
    } else {
        Err(TargetsError::Config(format!("{name} out of range: {value}")))
    }
}

fn default_tp1_multiplier() -> f64 {
    0.6
}

fn default_tp2_multiplier() -> f64 {
    1.0
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_fresh_minutes() -> f64 {
    5.0
}

fn default_half_life_minutes() -> f64 {
    30.0
}

fn default_freshness_floor() -> f64 {
    0.1
}

fn default_liquidity_score() -> f64 {
    0.8
}

fn default_expected_move_pct() -> f64 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.targets.tp1_multiplier, 0.6);
        assert_eq!(config.targets.tp2_multiplier, 1.0);
        assert_eq!(config.targets.risk_free_rate, 0.05);
        assert_eq!(config.ranking.fresh_minutes, 5.0);
        assert_eq!(config.ranking.half_life_minutes, 30.0);
        assert_eq!(config.ranking.freshness_floor, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let targets = TargetConfig {
            tp1_multiplier: 0.0,
            ..Default::default()
        };
        assert!(matches!(targets.validate(), Err(TargetsError::Config(_))));

        let ranking = RankingConfig {
            freshness_floor: 1.5,
            ..Default::default()
        };
        assert!(ranking.validate().is_err());

        let ranking = RankingConfig {
            half_life_minutes: f64::NAN,
            ..Default::default()
        };
        assert!(ranking.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [targets]
            tp1_multiplier = 0.5

            [ranking]
            half_life_minutes = 45.0
            "#,
        )
        .unwrap();

        assert_eq!(config.targets.tp1_multiplier, 0.5);
        assert_eq!(config.targets.tp2_multiplier, 1.0);
        assert_eq!(config.targets.risk_free_rate, 0.05);
        assert_eq!(config.ranking.half_life_minutes, 45.0);
        assert_eq!(config.ranking.default_liquidity_score, 0.8);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_empty_toml_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_invalid_toml_values() {
        let err = EngineConfig::from_toml_str("[targets]\ntp2_multiplier = -1.0\n").unwrap_err();
        assert!(matches!(err, TargetsError::Config(_)));

        let err = EngineConfig::from_toml_str("[targets]\ntp2_multiplier = \"wide\"\n").unwrap_err();
        assert!(matches!(err, TargetsError::Toml(_)));
    }
}
