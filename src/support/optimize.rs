//! Minimization helpers over [`argmin`].
//!
//! Thin wrappers around the `argmin` executors that handle the recurring
//! chores: building an initial simplex around a seed point, capping
//! iterations, and reducing a run to a [`Minimum`] (best point, best cost,
//! converged flag). Callers that need the fallback chain of a derivative-free
//! search plus a quasi-Newton retry compose these directly.

use argmin::{
    core::{CostFunction, Error, Executor, Gradient, State, TerminationReason, TerminationStatus},
    solver::{linesearch::MoreThuenteLineSearch, neldermead::NelderMead, quasinewton::LBFGS},
};

/// Shared settings for a single minimization run.
#[derive(Debug, Clone, Copy)]
pub struct MinimizeOptions {
    /// Convergence tolerance, in the cost's native units.
    ///
    /// For Nelder–Mead this bounds the standard deviation of the cost across
    /// the simplex vertices.
    pub tolerance: f64,

    /// Hard iteration cap; the run reports non-convergence when it is hit.
    pub max_iters: u64,

    /// Offset added to the seed along each coordinate to build the initial
    /// simplex for Nelder–Mead.
    pub simplex_step: f64,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iters: 500,
            simplex_step: 0.1,
        }
    }
}

/// Outcome of one minimization run.
#[derive(Debug, Clone)]
pub struct Minimum {
    /// Best point found, converged or not.
    pub point: Vec<f64>,

    /// Cost at the best point.
    pub cost: f64,

    /// Whether the solver reported convergence rather than hitting a cap.
    pub converged: bool,
}

/// Minimizes a cost with derivative-free Nelder–Mead simplex search.
///
/// The initial simplex is the seed plus one vertex per coordinate, offset by
/// [`MinimizeOptions::simplex_step`].
///
/// # Errors
///
/// Returns `Err` when the cost function fails or the solver aborts without a
/// best point; hitting the iteration cap is reported through
/// [`Minimum::converged`] instead.
pub fn nelder_mead<C>(cost: C, seed: &[f64], options: &MinimizeOptions) -> Result<Minimum, Error>
where
    C: CostFunction<Param = Vec<f64>, Output = f64>,
{
    let mut simplex = vec![seed.to_vec()];
    for axis in 0..seed.len() {
        let mut vertex = seed.to_vec();
        vertex[axis] += options.simplex_step;
        simplex.push(vertex);
    }

    let solver = NelderMead::new(simplex).with_sd_tolerance(options.tolerance)?;
    let run = Executor::new(cost, solver)
        .configure(|state| state.max_iters(options.max_iters))
        .run()?;

    Ok(minimum_from_state(run.state(), seed))
}

/// Minimizes a cost with L-BFGS from the given seed.
///
/// The caller's [`Gradient`] implementation supplies the gradient; see
/// [`central_difference`] when no analytic gradient is available.
///
/// # Errors
///
/// Returns `Err` when the cost, gradient, or line search fails; hitting the
/// iteration cap is reported through [`Minimum::converged`] instead.
pub fn lbfgs<C>(cost: C, seed: &[f64], options: &MinimizeOptions) -> Result<Minimum, Error>
where
    C: CostFunction<Param = Vec<f64>, Output = f64>
        + Gradient<Param = Vec<f64>, Gradient = Vec<f64>>,
{
    let linesearch = MoreThuenteLineSearch::new();
    let solver = LBFGS::new(linesearch, 7).with_tolerance_cost(options.tolerance)?;
    let run = Executor::new(cost, solver)
        .configure(|state| state.param(seed.to_vec()).max_iters(options.max_iters))
        .run()?;

    Ok(minimum_from_state(run.state(), seed))
}

/// Central-difference gradient of a cost function.
///
/// # Errors
///
/// Propagates any cost evaluation failure.
pub fn central_difference<C>(cost: &C, point: &[f64], step: f64) -> Result<Vec<f64>, Error>
where
    C: CostFunction<Param = Vec<f64>, Output = f64>,
{
    let mut gradient = vec![0.0; point.len()];
    for axis in 0..point.len() {
        let mut high = point.to_vec();
        let mut low = point.to_vec();
        high[axis] += step;
        low[axis] -= step;
        gradient[axis] = (cost.cost(&high)? - cost.cost(&low)?) / (2.0 * step);
    }
    Ok(gradient)
}

fn minimum_from_state<S>(state: &S, seed: &[f64]) -> Minimum
where
    S: State<Param = Vec<f64>, Float = f64>,
{
    let converged = matches!(
        state.get_termination_status(),
        TerminationStatus::Terminated(TerminationReason::SolverConverged)
    );

    Minimum {
        point: state
            .get_best_param()
            .cloned()
            .unwrap_or_else(|| seed.to_vec()),
        cost: state.get_best_cost(),
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use argmin::core::{CostFunction, Error, Gradient};

    /// Smooth bowl with its minimum at (1, -2).
    struct Bowl;

    impl CostFunction for Bowl {
        type Param = Vec<f64>;
        type Output = f64;

        fn cost(&self, p: &Self::Param) -> Result<Self::Output, Error> {
            Ok((p[0] - 1.0).powi(2) + (p[1] + 2.0).powi(2))
        }
    }

    impl Gradient for Bowl {
        type Param = Vec<f64>;
        type Gradient = Vec<f64>;

        fn gradient(&self, p: &Self::Param) -> Result<Self::Gradient, Error> {
            central_difference(self, p, 1e-6)
        }
    }

    #[test]
    fn nelder_mead_finds_the_bowl_minimum() {
        let options = MinimizeOptions::default();
        let minimum = nelder_mead(Bowl, &[0.0, 0.0], &options).unwrap();

        assert!(minimum.converged);
        assert_abs_diff_eq!(minimum.point[0], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(minimum.point[1], -2.0, epsilon = 1e-4);
    }

    #[test]
    fn lbfgs_finds_the_bowl_minimum() {
        let options = MinimizeOptions::default();
        let minimum = lbfgs(Bowl, &[0.0, 0.0], &options).unwrap();

        assert_abs_diff_eq!(minimum.point[0], 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(minimum.point[1], -2.0, epsilon = 1e-4);
    }

    #[test]
    fn iteration_cap_reports_non_convergence_with_a_best_point() {
        let options = MinimizeOptions {
            max_iters: 2,
            ..MinimizeOptions::default()
        };
        let minimum = nelder_mead(Bowl, &[50.0, 50.0], &options).unwrap();

        assert!(!minimum.converged);
        assert!(minimum.cost.is_finite());
    }

    #[test]
    fn central_difference_matches_the_analytic_gradient() {
        let gradient = central_difference(&Bowl, &[3.0, 1.0], 1e-6).unwrap();
        assert_abs_diff_eq!(gradient[0], 4.0, epsilon = 1e-5);
        assert_abs_diff_eq!(gradient[1], 6.0, epsilon = 1e-5);
    }
}
