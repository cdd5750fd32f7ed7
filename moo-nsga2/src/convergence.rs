//! Convergence metric: mean distance to a reference front.

use crate::error::{Nsga2Error, Result};
use ndarray::Array1;

/// Mean over the population of the Euclidean distance to the nearest
/// reference front point, in objective space. Zero means every attained
/// point lies on the reference front.
///
/// An empty population yields 0.0.
///
/// # Errors
///
/// Returns `Nsga2Error::EmptyReferenceFront` when the reference front
/// has no points, since the metric is undefined there.
pub fn convergence(
    population: &[Array1<f64>],
    reference: &[Array1<f64>],
) -> Result<f64> {
    if reference.is_empty() {
        return Err(Nsga2Error::EmptyReferenceFront);
    }
    if population.is_empty() {
        return Ok(0.0);
    }

    let total: f64 = population
        .iter()
        .map(|p| {
            reference
                .iter()
                .map(|r| {
                    p.iter()
                        .zip(r.iter())
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum::<f64>()
                        .sqrt()
                })
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    Ok(total / population.len() as f64)
}
