//! Standard normal CDF via the Abramowitz–Stegun 7.1.26 erf approximation
//! (max absolute error about 1.5e-7). The constants are fixed so scores
//! match other implementations of the quiz bit for bit.

use std::f64::consts::SQRT_2;

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Error function.
pub fn erf(x: f64) -> f64 {
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let ax = x.abs();

    let t = 1.0 / (1.0 + P * ax);
    let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-ax * ax).exp();

    sign * y
}

/// Φ(x) = ½ (1 + erf(x / √2)).
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erf_reference_values() {
        // Tabulated erf values; the approximation is within 1.5e-7.
        for (x, expected) in [
            (0.5, 0.520_499_877_8),
            (1.0, 0.842_700_792_9),
            (2.0, 0.995_322_265_0),
            (3.0, 0.999_977_909_5),
        ] {
            assert!((erf(x) - expected).abs() < 1.5e-7, "erf({x}) = {}", erf(x));
        }
    }

    #[test]
    fn erf_saturates() {
        assert!((erf(10.0) - 1.0).abs() < 1e-12);
        assert!((erf(-10.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn cdf_at_one_sigma() {
        assert!((norm_cdf(1.0) - 0.841_344_746).abs() < 1e-6);
        assert!((norm_cdf(-1.96) - 0.024_997_895).abs() < 1e-6);
    }
}
