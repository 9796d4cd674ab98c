//! Standard normal distribution helpers.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Standard normal cumulative distribution function, Φ(x).
///
/// Computed as `0.5 * erfc(-x / sqrt(2))`, which keeps full relative precision
/// in the left tail. Defined for every real input and saturates to 0 and 1 in
/// the tails. NaN propagates.
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
}

/// Standard normal probability density function, φ(x).
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_standard_values() {
        assert_eq!(normal_cdf(0.0), 0.5);
        assert!((normal_cdf(1.0) - 0.841_344_746).abs() < 1e-8);
        assert!((normal_cdf(-1.0) - 0.158_655_254).abs() < 1e-8);
        assert!((normal_cdf(2.0) - 0.977_249_868).abs() < 1e-8);
        assert!((normal_cdf(-1.96) - 0.024_997_895).abs() < 1e-8);
    }

    #[test]
    fn test_cdf_saturates() {
        assert!(normal_cdf(40.0) == 1.0);
        assert!(normal_cdf(-40.0) >= 0.0);
        assert!(normal_cdf(-40.0) < 1e-300);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_cdf_left_tail_relative_precision() {
        for (x, expected) in [
            (-8.0, 6.220_960_574_271_785e-16),
            (-10.0, 7.619_853_024_160_527e-24),
            (-20.0, 2.753_624_118_606_233_6e-89),
        ] {
            let p = normal_cdf(x);
            assert!(((p - expected) / expected).abs() < 1e-9, "x = {x}: {p}");
        }
    }

    #[test]
    fn test_pdf_peak() {
        assert!((normal_pdf(0.0) - 0.398_942_280).abs() < 1e-9);
        assert_eq!(normal_pdf(1.3), normal_pdf(-1.3));
    }
}
