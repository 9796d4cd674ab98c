//! Error types for target and option-premium calculations.
//!
//! Every calculation in this crate is pure, so a rejected input fails the same
//! way on every call. There is one error kind for bad arguments; the remaining
//! variants only occur while loading configuration.

use thiserror::Error;

/// Errors returned by the target, pricing and ranking functions.
#[derive(Debug, Error)]
pub enum TargetsError {
    /// A precondition on a function argument was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file is not valid TOML for [`crate::EngineConfig`].
    #[cfg(feature = "serde")]
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl TargetsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TargetsError::InvalidArgument(msg.into())
    }

    /// True for precondition violations (as opposed to configuration failures).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TargetsError::InvalidArgument(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TargetsError>;

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TargetsError::invalid(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Require `value > 0` and finite.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(TargetsError::invalid(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Require `value >= 0` and finite.
pub(crate) fn ensure_non_negative(name: &str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(TargetsError::invalid(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    Ok(())
}
