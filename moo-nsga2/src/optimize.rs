use crate::{Nsga2, Nsga2Config, Nsga2Error, Nsga2Report, Result};
use ndarray::Array1;

/// Runs NSGA-II optimization on a multi-objective function.
///
/// This is a convenience function that creates an optimizer with the
/// given bounds and configuration and runs it to completion.
///
/// # Arguments
///
/// * `func` - Objective function mapping a genome to its objective
///   tuple, all objectives minimized
/// * `bounds` - Vector of (lower, upper) bound pairs for each dimension
/// * `config` - NSGA-II configuration (use `Nsga2ConfigBuilder` to construct)
///
/// # Returns
///
/// Returns `Ok(Nsga2Report)` with the final population and logbook.
///
/// # Errors
///
/// Returns `Nsga2Error::InvalidBounds` if any bound pair has upper <
/// lower, and propagates any run-time error from the evolutionary loop.
///
/// # Example
///
/// ```rust
/// use moo_nsga2::{nsga2_optimize, Nsga2ConfigBuilder};
/// use ndarray::array;
///
/// let report = nsga2_optimize(
///     &|x| array![x[0] * x[0], (x[0] - 2.0) * (x[0] - 2.0)],
///     &[(-5.0, 5.0)],
///     Nsga2ConfigBuilder::new().pop_size(16).ngen(20).seed(42).build().unwrap(),
/// ).expect("optimization failed");
///
/// assert_eq!(report.population.len(), 16);
/// ```
pub fn nsga2_optimize<F>(
    func: &F,
    bounds: &[(f64, f64)],
    config: Nsga2Config,
) -> Result<Nsga2Report>
where
    F: Fn(&Array1<f64>) -> Array1<f64> + Sync,
{
    let n = bounds.len();
    let mut lower = Array1::<f64>::zeros(n);
    let mut upper = Array1::<f64>::zeros(n);
    for (i, (lo, hi)) in bounds.iter().enumerate() {
        lower[i] = *lo;
        upper[i] = *hi;
        if hi < lo {
            return Err(Nsga2Error::InvalidBounds {
                index: i,
                lower: *lo,
                upper: *hi,
            });
        }
    }
    let mut opt = Nsga2::new(func, lower, upper)?;
    *opt.config_mut() = config;
    opt.solve()
}
