//! Batched objective evaluation.
//!
//! Only individuals whose fitness is invalid are evaluated; everything
//! else is left untouched, which is what avoids redundant work across
//! generations. Evaluation is the one stage that may run in parallel:
//! each call is pure and independent, and results are scattered back to
//! the same individuals they were computed for so downstream sorting and
//! statistics are unaffected. The random generator is never touched here.

use crate::error::{Nsga2Error, Result};
use crate::individual::Individual;
use ndarray::Array1;
use rayon::prelude::*;

/// Parallel evaluation configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            num_threads: None,
        }
    }
}

/// Evaluates every individual with an invalid fitness and stores the
/// result, leaving valid individuals untouched.
///
/// # Arguments
/// * `pop` - The individuals to (re-)evaluate
/// * `func` - Objective function mapping a genome to its objective tuple
/// * `n_obj` - Expected arity of the objective tuple
/// * `config` - Parallel configuration
///
/// # Returns
/// The number of evaluations performed.
///
/// # Errors
///
/// Returns `Nsga2Error::ObjectiveArityMismatch` if the function returns a
/// tuple of the wrong length; the run is aborted with the offending
/// genome reported.
pub fn evaluate_invalid<F>(
    pop: &mut [Individual],
    func: &F,
    n_obj: usize,
    config: &ParallelConfig,
) -> Result<usize>
where
    F: Fn(&Array1<f64>) -> Array1<f64> + Sync,
{
    let pending: Vec<usize> = pop
        .iter()
        .enumerate()
        .filter(|(_, ind)| !ind.valid)
        .map(|(i, _)| i)
        .collect();

    if pending.is_empty() {
        return Ok(0);
    }

    // Index-preserving join: results carry the index they were computed
    // for, regardless of completion order.
    let results: Vec<(usize, Array1<f64>)> = if !config.enabled || pending.len() < 4 {
        pending.iter().map(|&i| (i, func(&pop[i].x))).collect()
    } else {
        pending.par_iter().map(|&i| (i, func(&pop[i].x))).collect()
    };

    for (i, f) in results {
        if f.len() != n_obj {
            return Err(Nsga2Error::ObjectiveArityMismatch {
                expected: n_obj,
                got: f.len(),
                x: pop[i].x.to_vec(),
            });
        }
        pop[i].set_fitness(f);
    }

    Ok(pending.len())
}
