//! Candidate solution representation.

use ndarray::Array1;
use rand::Rng;

/// A candidate solution: a real-valued genome inside box bounds, its
/// objective values, and the transient annotations NSGA-II attaches
/// during ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    /// Decision variables, each inside `[lower_i, upper_i]`.
    pub x: Array1<f64>,
    /// Objective values (one per objective); meaningful only when `valid`.
    pub f: Array1<f64>,
    /// Whether `f` reflects the current genome. Cleared by every
    /// variation operator, set by evaluation.
    pub valid: bool,
    /// Non-domination rank (0 = first front). Recomputed every generation.
    pub rank: usize,
    /// Crowding distance within the individual's front. Recomputed every
    /// generation; `f64::INFINITY` for boundary points.
    pub crowding: f64,
}

impl Individual {
    /// Creates an unevaluated individual from a genome.
    pub fn new(x: Array1<f64>) -> Self {
        Self {
            x,
            f: Array1::zeros(0),
            valid: false,
            rank: usize::MAX,
            crowding: 0.0,
        }
    }

    /// Samples a random individual uniformly inside the bounds.
    pub fn random<R: Rng + ?Sized>(
        lower: &Array1<f64>,
        upper: &Array1<f64>,
        rng: &mut R,
    ) -> Self {
        let n = lower.len();
        let mut x = Array1::<f64>::zeros(n);
        for j in 0..n {
            let u: f64 = rng.random::<f64>();
            x[j] = lower[j] + u * (upper[j] - lower[j]);
        }
        Self::new(x)
    }

    /// Stores objective values and marks the fitness valid.
    pub fn set_fitness(&mut self, f: Array1<f64>) {
        self.f = f;
        self.valid = true;
    }

    /// Clears the validity flag; the individual must be re-evaluated
    /// before it can be ranked or compared again.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Pareto dominance under minimization: `self` dominates `other` iff
    /// it is no worse in every objective and strictly better in at least
    /// one. Mutually non-dominating pairs return `false` both ways.
    pub fn dominates(&self, other: &Individual) -> bool {
        let mut strictly_better = false;
        for (a, b) in self.f.iter().zip(other.f.iter()) {
            if a > b {
                return false;
            }
            if a < b {
                strictly_better = true;
            }
        }
        strictly_better
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_dominance() {
        let mut a = Individual::new(array![0.0, 0.0]);
        a.set_fitness(array![1.0, 2.0]);
        let mut b = Individual::new(array![0.0, 0.0]);
        b.set_fitness(array![2.0, 3.0]);

        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_equal_fitness_no_dominance() {
        let mut a = Individual::new(array![0.0]);
        a.set_fitness(array![1.0, 2.0]);
        let b = a.clone();

        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_trade_off_no_dominance() {
        let mut a = Individual::new(array![0.0]);
        a.set_fitness(array![1.0, 3.0]);
        let mut b = Individual::new(array![0.0]);
        b.set_fitness(array![2.0, 1.0]);

        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_random_respects_bounds() {
        let lower = array![-2.0, 0.0, 5.0];
        let upper = array![-1.0, 0.0, 10.0];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let ind = Individual::random(&lower, &upper, &mut rng);
            for j in 0..3 {
                assert!(ind.x[j] >= lower[j] && ind.x[j] <= upper[j]);
            }
            assert!(!ind.valid);
        }
    }
}
