use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TargetsError};

/// Direction of the position the targets are built for.
///
/// Serialized as `LONG`/`SHORT`; the order-side spellings `BUY`/`SELL` are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Side {
    #[cfg_attr(feature = "serde", serde(alias = "BUY", alias = "buy", alias = "long"))]
    Long,
    #[cfg_attr(feature = "serde", serde(alias = "SELL", alias = "sell", alias = "short"))]
    Short,
}

impl Side {
    /// +1 for long, -1 for short.
    pub fn sign(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => f.pad("LONG"),
            Side::Short => f.pad("SHORT"),
        }
    }
}

impl FromStr for Side {
    type Err = TargetsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LONG" | "BUY" => Ok(Side::Long),
            "SHORT" | "SELL" => Ok(Side::Short),
            _ => Err(TargetsError::invalid(format!(
                "side must be LONG/BUY or SHORT/SELL, got {s:?}"
            ))),
        }
    }
}

/// How many sigma units away from entry each take-profit rung sits.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetLevels {
    /// Default 0.6
    pub tp1_multiplier: f64,
    /// Default 1.0
    pub tp2_multiplier: f64,
}

impl Default for TargetLevels {
    fn default() -> Self {
        Self {
            tp1_multiplier: 0.6,
            tp2_multiplier: 1.0,
        }
    }
}

impl TargetLevels {
    pub fn multipliers(&self) -> [f64; 2] {
        [self.tp1_multiplier, self.tp2_multiplier]
    }
}

/// A value attached to each of the two take-profit rungs.
///
/// Used both for prices and for confidences.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetPair {
    pub tp1: f64,
    pub tp2: f64,
}

impl TargetPair {
    pub fn new(tp1: f64, tp2: f64) -> Self {
        Self { tp1, tp2 }
    }

    pub fn to_vec(self) -> Vec<f64> {
        vec![self.tp1, self.tp2]
    }

    /// Apply `f` to both rungs, stopping at the first error.
    pub fn try_map<F>(self, mut f: F) -> Result<TargetPair>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        Ok(TargetPair {
            tp1: f(self.tp1)?,
            tp2: f(self.tp2)?,
        })
    }
}

impl From<(f64, f64)> for TargetPair {
    fn from((tp1, tp2): (f64, f64)) -> Self {
        Self { tp1, tp2 }
    }
}

impl From<TargetPair> for (f64, f64) {
    fn from(pair: TargetPair) -> Self {
        (pair.tp1, pair.tp2)
    }
}
