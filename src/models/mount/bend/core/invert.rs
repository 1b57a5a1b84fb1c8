//! Numerical inversion of a bending model.
//!
//! The forward model maps uncorrected mount coordinates to the corrected
//! direction `(az0 + Δaz(az0, el0), el0 + Δel(az0, el0))`. Tracking needs the
//! opposite: the uncorrected coordinates that, once corrected, land on a
//! desired direction. That mapping has no closed form, so each pair is solved
//! independently by minimizing the L1 pointing residual, seeded at the desired
//! direction itself (corrections are small perturbations, so the seed is
//! already close).
//!
//! Non-convergence is forgiving by design: if neither the simplex search nor
//! the quasi-Newton fallback reports convergence, the best point seen is still
//! returned as an approximate result, flagged through [`Inversion::converged`].

use argmin::core::{CostFunction, Error, Gradient};
use uom::si::{
    angle::degree,
    f64::Angle,
};

use crate::support::optimize::{self, MinimizeOptions, Minimum};

use super::{BendError, BendModel};

/// Step for the fallback's central-difference gradient, in degrees.
const GRADIENT_STEP: f64 = 1e-7;

/// Tuning knobs for the inversion optimizer chain.
#[derive(Debug, Clone, Copy)]
pub struct InverterConfig {
    /// Convergence tolerance on the solution simplex, in degrees.
    pub tolerance: f64,

    /// Hard iteration cap per optimizer run.
    pub max_iters: u64,

    /// Initial simplex offset around the seed, in degrees.
    pub simplex_step: f64,

    /// Residual (degrees) above which a converged primary run still triggers
    /// the fallback. `None` retries only on non-convergence.
    pub retry_residual: Option<f64>,
}

impl Default for InverterConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iters: 500,
            simplex_step: 0.1,
            retry_residual: None,
        }
    }
}

/// Batched inverse solver for a configured [`BendModel`].
#[derive(Debug, Clone, Copy)]
pub struct Inverter<'a> {
    model: &'a BendModel,
    config: InverterConfig,
}

/// Uncorrected coordinates recovered by [`Inverter::invert`], one entry per
/// input pair, in input order.
#[derive(Debug, Clone)]
pub struct Inversion {
    /// Uncorrected azimuths.
    pub azimuth: Vec<Angle>,

    /// Uncorrected elevations.
    pub elevation: Vec<Angle>,

    /// Whether an optimizer reported convergence for each pair. A `false`
    /// entry marks an approximate result, not a failure.
    pub converged: Vec<bool>,
}

impl<'a> Inverter<'a> {
    /// Creates an inverter with the default configuration.
    #[must_use]
    pub fn new(model: &'a BendModel) -> Self {
        Self::with_config(model, InverterConfig::default())
    }

    /// Creates an inverter with an explicit configuration.
    #[must_use]
    pub fn with_config(model: &'a BendModel, config: InverterConfig) -> Self {
        Self { model, config }
    }

    /// Solves every desired pair for its uncorrected coordinates.
    ///
    /// Pairs are independent: one pair failing to converge never aborts the
    /// rest, and output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns [`BendError::LengthMismatch`] for unequal inputs,
    /// [`BendError::MissingParameter`] if the model's parameter map is short
    /// (detected before any optimizer runs), and [`BendError::Optimizer`] if
    /// the primary search aborts without producing a best point.
    pub fn invert(&self, azimuth: &[Angle], elevation: &[Angle]) -> Result<Inversion, BendError> {
        if azimuth.len() != elevation.len() {
            return Err(BendError::LengthMismatch {
                azimuths: azimuth.len(),
                elevations: elevation.len(),
            });
        }

        // Surface a short parameter map once, up front, instead of through
        // every optimizer evaluation.
        if let (Some(az), Some(el)) = (azimuth.first(), elevation.first()) {
            self.model.delta_azimuth(*az, *el)?;
            self.model.delta_elevation(*az, *el)?;
        }

        let mut result = Inversion {
            azimuth: Vec::with_capacity(azimuth.len()),
            elevation: Vec::with_capacity(elevation.len()),
            converged: Vec::with_capacity(azimuth.len()),
        };

        for (az, el) in azimuth.iter().zip(elevation) {
            let minimum = self.invert_pair(az.get::<degree>(), el.get::<degree>())?;
            result.azimuth.push(Angle::new::<degree>(minimum.point[0]));
            result.elevation.push(Angle::new::<degree>(minimum.point[1]));
            result.converged.push(minimum.converged);
        }

        Ok(result)
    }

    /// Runs the simplex search for one pair, falling back to L-BFGS when it
    /// does not converge (or converges above the retry residual). Both runs
    /// minimize the same loss bound to the same model instance; the lower-cost
    /// point wins.
    fn invert_pair(&self, az_deg: f64, el_deg: f64) -> Result<Minimum, BendError> {
        let loss = ResidualLoss {
            model: self.model,
            desired_az: az_deg,
            desired_el: el_deg,
        };
        let seed = [az_deg, el_deg];
        let options = MinimizeOptions {
            tolerance: self.config.tolerance,
            max_iters: self.config.max_iters,
            simplex_step: self.config.simplex_step,
        };

        let mut best = optimize::nelder_mead(loss, &seed, &options)
            .map_err(|err| BendError::Optimizer(err.to_string()))?;

        let poor_residual = self
            .config
            .retry_residual
            .is_some_and(|threshold| best.cost > threshold);
        if !best.converged || poor_residual {
            // The fallback is best-effort; if its line search aborts, the
            // primary's point stands.
            if let Ok(fallback) = optimize::lbfgs(loss, &seed, &options) {
                if fallback.cost < best.cost {
                    best.point = fallback.point;
                    best.cost = fallback.cost;
                }
                best.converged = best.converged || fallback.converged;
            }
        }

        Ok(best)
    }
}

/// L1 pointing residual for one desired direction, in degrees.
#[derive(Debug, Clone, Copy)]
struct ResidualLoss<'a> {
    model: &'a BendModel,
    desired_az: f64,
    desired_el: f64,
}

impl CostFunction for ResidualLoss<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, point: &Self::Param) -> Result<Self::Output, Error> {
        let az0 = Angle::new::<degree>(point[0]);
        let el0 = Angle::new::<degree>(point[1]);

        let corrected_az = point[0] + self.model.delta_azimuth(az0, el0)?.get::<degree>();
        let corrected_el = point[1] + self.model.delta_elevation(az0, el0)?.get::<degree>();

        Ok((self.desired_az - corrected_az).abs() + (self.desired_el - corrected_el).abs())
    }
}

impl Gradient for ResidualLoss<'_> {
    type Param = Vec<f64>;
    type Gradient = Vec<f64>;

    fn gradient(&self, point: &Self::Param) -> Result<Self::Gradient, Error> {
        optimize::central_difference(self, point, GRADIENT_STEP)
    }
}
