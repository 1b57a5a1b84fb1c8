//! Analytic term tables for the bending model variants.
//!
//! Each variant contributes six pure functions of the mount angles: the value
//! coefficients for the azimuth and elevation corrections, plus the exact
//! partial derivatives of each with respect to azimuth (`phi`) and elevation
//! (`theta`). Angles are in radians; the coefficients are dimensionless and
//! multiply fitted parameters expressed in degrees.
//!
//! The derivative tables must be the calculus derivatives of the value tables,
//! never independent re-derivations. Downstream consumers (sensitivity
//! analysis, derivative checks) assume the two stay consistent term by term.

pub(super) mod basic4;
pub(super) mod basic8;

use std::collections::BTreeMap;

/// Coefficients keyed by fitted parameter name.
///
/// A `BTreeMap` keeps the key order deterministic, so the union of the value
/// tables doubles as the sorted parameter name list of a variant.
pub(crate) type TermSet = BTreeMap<&'static str, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    /// Step for the centered finite differences, in radians.
    const STEP: f64 = 1e-6;

    /// Sample grid covering the full azimuth range and elevations away from
    /// the poles, where `tan` and `sec` blow up.
    fn angle_grid() -> Vec<(f64, f64)> {
        let mut grid = Vec::new();
        let mut az_deg = -360.0_f64;
        while az_deg <= 360.0 {
            let mut el_deg = -80.0_f64;
            while el_deg <= 80.0 {
                grid.push((az_deg.to_radians(), el_deg.to_radians()));
                el_deg += 20.0;
            }
            az_deg += 45.0;
        }
        grid
    }

    /// Checks one derivative table against centered finite differences of its
    /// value table, term by term over the sample grid.
    fn assert_matches_finite_difference(
        value: fn(f64, f64) -> TermSet,
        derivative: fn(f64, f64) -> TermSet,
        wrt_azimuth: bool,
    ) {
        for (az, el) in angle_grid() {
            let (hi, lo) = if wrt_azimuth {
                (value(az + STEP, el), value(az - STEP, el))
            } else {
                (value(az, el + STEP), value(az, el - STEP))
            };
            let analytic = derivative(az, el);
            assert_eq!(hi.keys().collect::<Vec<_>>(), analytic.keys().collect::<Vec<_>>());

            for (name, coefficient) in &analytic {
                let numeric = (hi[name] - lo[name]) / (2.0 * STEP);
                assert_abs_diff_eq!(*coefficient, numeric, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn basic4_azimuth_derivatives_match_finite_differences() {
        assert_matches_finite_difference(basic4::azimuth, basic4::azimuth_d_phi, true);
        assert_matches_finite_difference(basic4::azimuth, basic4::azimuth_d_theta, false);
    }

    #[test]
    fn basic4_elevation_derivatives_match_finite_differences() {
        assert_matches_finite_difference(basic4::elevation, basic4::elevation_d_phi, true);
        assert_matches_finite_difference(basic4::elevation, basic4::elevation_d_theta, false);
    }

    #[test]
    fn basic8_azimuth_derivatives_match_finite_differences() {
        assert_matches_finite_difference(basic8::azimuth, basic8::azimuth_d_phi, true);
        assert_matches_finite_difference(basic8::azimuth, basic8::azimuth_d_theta, false);
    }

    #[test]
    fn basic8_elevation_derivatives_match_finite_differences() {
        assert_matches_finite_difference(basic8::elevation, basic8::elevation_d_phi, true);
        assert_matches_finite_difference(basic8::elevation, basic8::elevation_d_theta, false);
    }

    #[test]
    fn basic8_tables_extend_basic4_tables() {
        let (az, el) = (0.7_f64, 0.4_f64);

        let four = basic4::azimuth(az, el);
        let eight = basic8::azimuth(az, el);
        for (name, coefficient) in &four {
            assert_abs_diff_eq!(eight[name], *coefficient);
        }
        assert_eq!(eight.len(), four.len() + 3);

        let four = basic4::elevation(az, el);
        let eight = basic8::elevation(az, el);
        for (name, coefficient) in &four {
            assert_abs_diff_eq!(eight[name], *coefficient);
        }
        assert_eq!(eight.len(), four.len() + 1);
    }
}
