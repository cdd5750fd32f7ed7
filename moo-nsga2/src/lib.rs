//! NSGA-II multi-objective optimization library.
//!
//! This crate provides a Rust implementation of the elitist
//! Non-dominated Sorting Genetic Algorithm II (NSGA-II), a
//! population-based optimizer for problems with several conflicting
//! objectives over box-bounded real variables. Instead of a single
//! optimum it evolves an approximation of the Pareto front, the set of
//! solutions no other solution beats on every objective at once.
//!
//! # Features
//!
//! - Fast non-dominated sorting and crowding-distance diversity
//! - Crowded binary tournament mating selection
//! - Simulated binary crossover and polynomial mutation, both bounded
//! - Elitist environmental selection over parents plus offspring
//! - Hypervolume, convergence and diversity quality indicators
//! - Parallel objective evaluation
//! - Bit-for-bit reproducible runs from a seed
//!
//! # Example
//!
//! ```rust
//! use moo_nsga2::{nsga2_optimize, Nsga2ConfigBuilder};
//! use ndarray::array;
//!
//! // Two objectives pulling x[0] in opposite directions.
//! let bounds = vec![(0.0, 1.0), (0.0, 1.0)];
//! let config = Nsga2ConfigBuilder::new()
//!     .pop_size(12)
//!     .ngen(5)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! let report = nsga2_optimize(
//!     &|x| array![x[0], 1.0 - x[0] + x[1]],
//!     &bounds,
//!     config,
//! ).expect("optimization should succeed");
//!
//! assert_eq!(report.population.len(), 12);
//! assert!(!report.pareto_front().is_empty());
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{Nsga2Error, Result};

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Candidate solution representation with fitness and ranking annotations.
pub mod individual;
/// Random uniform population initialization.
mod init_random;

/// Fast non-dominated sorting into Pareto fronts.
pub mod non_dominated_sort;
/// Crowding distance within a front.
pub mod crowding_distance;
/// Elitist environmental selection (fronts plus crowding truncation).
pub mod select_nsga2;
/// Crowded-comparison binary tournament for mating selection.
pub mod select_tournament;

/// Simulated binary crossover, bounded variant.
pub mod crossover_sbx;
/// Bounded polynomial mutation.
pub mod mutation_polynomial;

/// Batched, optionally parallel objective evaluation.
pub mod evaluate;
/// Per-generation statistics logbook.
pub mod statistics;

/// Hypervolume quality indicator.
pub mod hypervolume;
/// Convergence metric against a reference front.
pub mod convergence;
/// Diversity (spread) metric along the attained front.
pub mod diversity;
/// Reference front loading from JSON.
pub mod reference_front;

/// Convenience entry point wrapping the optimizer.
pub mod optimize;


pub use crossover_sbx::sbx_bounded;
pub use crowding_distance::crowding_distance;
pub use evaluate::{ParallelConfig, evaluate_invalid};
pub use hypervolume::hypervolume;
pub use individual::Individual;
pub use mutation_polynomial::mutate_polynomial_bounded;
pub use non_dominated_sort::non_dominated_sort;
pub use optimize::nsga2_optimize;
pub use reference_front::load_reference_front;
pub use select_nsga2::select_nsga2;
pub use select_tournament::select_tournament_dcd;
pub use statistics::{GenerationRecord, Logbook};

/// Configuration for the NSGA-II optimizer.
///
/// Holds all parameters controlling the evolutionary run: population
/// size, generation count, variation operator settings and execution
/// options. Defaults follow the standard NSGA-II setup for the ZDT
/// benchmark family.
#[derive(Debug, Clone)]
pub struct Nsga2Config {
    /// Population size N. Must be >= 4 and a multiple of 4.
    pub pop_size: usize,
    /// Number of generations to run after initialization.
    pub ngen: usize,
    /// Number of objectives the function returns.
    pub n_objectives: usize,
    /// Per-pair crossover probability in [0, 1].
    pub cxpb: f64,
    /// Crossover distribution index (larger keeps children nearer parents).
    pub eta_c: f64,
    /// Mutation distribution index.
    pub eta_m: f64,
    /// Per-gene mutation probability; `None` means 1/D at solve time.
    pub indpb: Option<f64>,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
    /// Print per-generation progress to stderr.
    pub disp: bool,
    /// Parallel evaluation configuration.
    pub parallel: ParallelConfig,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            pop_size: 100,
            ngen: 250,
            n_objectives: 2,
            cxpb: 0.9,
            eta_c: 20.0,
            eta_m: 20.0,
            indpb: None,
            seed: None,
            disp: false,
            parallel: ParallelConfig::default(),
        }
    }
}

/// Fluent builder for `Nsga2Config` for ergonomic configuration.
///
/// # Example
///
/// ```rust
/// use moo_nsga2::Nsga2ConfigBuilder;
///
/// let config = Nsga2ConfigBuilder::new()
///     .pop_size(100)
///     .ngen(250)
///     .cxpb(0.9)
///     .eta_c(20.0)
///     .seed(42)
///     .build();
/// ```
pub struct Nsga2ConfigBuilder {
    cfg: Nsga2Config,
}

impl Default for Nsga2ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Nsga2ConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: Nsga2Config::default(),
        }
    }
    /// Sets the population size.
    pub fn pop_size(mut self, v: usize) -> Self {
        self.cfg.pop_size = v;
        self
    }
    /// Sets the number of generations.
    pub fn ngen(mut self, v: usize) -> Self {
        self.cfg.ngen = v;
        self
    }
    /// Sets the number of objectives.
    pub fn n_objectives(mut self, v: usize) -> Self {
        self.cfg.n_objectives = v;
        self
    }
    /// Sets the per-pair crossover probability.
    pub fn cxpb(mut self, v: f64) -> Self {
        self.cfg.cxpb = v;
        self
    }
    /// Sets the crossover distribution index.
    pub fn eta_c(mut self, v: f64) -> Self {
        self.cfg.eta_c = v;
        self
    }
    /// Sets the mutation distribution index.
    pub fn eta_m(mut self, v: f64) -> Self {
        self.cfg.eta_m = v;
        self
    }
    /// Sets the per-gene mutation probability.
    pub fn indpb(mut self, v: f64) -> Self {
        self.cfg.indpb = Some(v);
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Enables/disables progress display.
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    /// Sets the parallel evaluation configuration.
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.cfg.parallel = parallel;
        self
    }
    /// Enables/disables parallel evaluation.
    pub fn enable_parallel(mut self, enable: bool) -> Self {
        self.cfg.parallel.enabled = enable;
        self
    }
    /// Sets the number of parallel threads.
    pub fn parallel_threads(mut self, num_threads: usize) -> Self {
        self.cfg.parallel.num_threads = Some(num_threads);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// Rejects a population size below 4 or not a multiple of 4,
    /// probabilities outside [0, 1], non-positive distribution indices
    /// and a zero objective count.
    pub fn build(self) -> Result<Nsga2Config> {
        let cfg = self.cfg;
        if cfg.pop_size < 4 {
            return Err(Nsga2Error::PopulationTooSmall {
                pop_size: cfg.pop_size,
            });
        }
        if cfg.pop_size % 4 != 0 {
            return Err(Nsga2Error::PopulationNotMultipleOfFour {
                pop_size: cfg.pop_size,
            });
        }
        if !(0.0..=1.0).contains(&cfg.cxpb) {
            return Err(Nsga2Error::InvalidProbability {
                name: "cxpb",
                value: cfg.cxpb,
            });
        }
        if let Some(indpb) = cfg.indpb {
            if !(0.0..=1.0).contains(&indpb) {
                return Err(Nsga2Error::InvalidProbability {
                    name: "indpb",
                    value: indpb,
                });
            }
        }
        if cfg.eta_c <= 0.0 {
            return Err(Nsga2Error::InvalidDistributionIndex {
                name: "eta_c",
                value: cfg.eta_c,
            });
        }
        if cfg.eta_m <= 0.0 {
            return Err(Nsga2Error::InvalidDistributionIndex {
                name: "eta_m",
                value: cfg.eta_m,
            });
        }
        if cfg.n_objectives == 0 {
            return Err(Nsga2Error::InvalidObjectiveCount { n_objectives: 0 });
        }
        Ok(cfg)
    }
}

/// Result/report of an NSGA-II run.
///
/// Contains the final population with its ranking annotations, the
/// per-generation logbook and run statistics.
#[derive(Debug, Clone)]
pub struct Nsga2Report {
    /// Final population, annotated with rank and crowding distance.
    pub population: Vec<Individual>,
    /// Per-generation statistics.
    pub logbook: Logbook,
    /// Number of generations performed.
    pub ngen: usize,
    /// Number of objective evaluations performed.
    pub nfev: usize,
    /// Human-readable status message.
    pub message: String,
}

impl Nsga2Report {
    /// Objective vectors of the whole final population.
    pub fn objectives(&self) -> Vec<Array1<f64>> {
        self.population.iter().map(|ind| ind.f.clone()).collect()
    }

    /// The non-dominated members of the final population.
    pub fn pareto_front(&self) -> Vec<&Individual> {
        self.population.iter().filter(|ind| ind.rank == 0).collect()
    }
}

/// NSGA-II optimizer.
///
/// A population-based optimizer for multi-objective problems over box
/// bounds, all objectives minimized. Use [`Nsga2::new`] to create an
/// instance, configure with [`config_mut`](Self::config_mut), then call
/// [`solve`](Self::solve).
pub struct Nsga2<'a, F>
where
    F: Fn(&Array1<f64>) -> Array1<f64> + Sync,
{
    func: &'a F,
    lower: Array1<f64>,
    upper: Array1<f64>,
    config: Nsga2Config,
}

impl<F> std::fmt::Debug for Nsga2<'_, F>
where
    F: Fn(&Array1<f64>) -> Array1<f64> + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nsga2")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, F> Nsga2<'a, F>
where
    F: Fn(&Array1<f64>) -> Array1<f64> + Sync,
{
    /// Creates a new optimizer with objective `func` and bounds [lower, upper].
    ///
    /// # Errors
    ///
    /// Returns `Nsga2Error::BoundsMismatch` if `lower` and `upper` have
    /// different lengths, `Nsga2Error::InvalidBounds` if any lower bound
    /// exceeds its corresponding upper bound.
    pub fn new(func: &'a F, lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Nsga2Error::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        for i in 0..lower.len() {
            if lower[i] > upper[i] {
                return Err(Nsga2Error::InvalidBounds {
                    index: i,
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }

        Ok(Self {
            func,
            lower,
            upper,
            config: Nsga2Config::default(),
        })
    }

    /// Mutable access to configuration
    pub fn config_mut(&mut self) -> &mut Nsga2Config {
        &mut self.config
    }

    /// Runs the evolutionary loop and returns a report.
    ///
    /// Generation 0 is the evaluated and ranked initial population; each
    /// later generation mates, varies, evaluates the offspring and keeps
    /// the best N of parents plus offspring. The single seeded generator
    /// drives every stochastic step in a fixed order, so two runs with
    /// the same seed produce identical reports.
    ///
    /// # Errors
    ///
    /// Returns `Nsga2Error::ObjectiveArityMismatch` if the objective
    /// function returns the wrong number of values.
    pub fn solve(&mut self) -> Result<Nsga2Report> {
        use crossover_sbx::sbx_bounded;
        use evaluate::evaluate_invalid;
        use init_random::init_random;
        use mutation_polynomial::mutate_polynomial_bounded;
        use select_nsga2::select_nsga2;
        use select_tournament::select_tournament_dcd;

        let n = self.lower.len();
        let npop = self.config.pop_size;
        let n_obj = self.config.n_objectives;
        let indpb = self.config.indpb.unwrap_or(1.0 / n as f64);

        if self.config.disp {
            eprintln!(
                "NSGA-II Init: {} dimensions, {} objectives, population={}, ngen={}",
                n, n_obj, npop, self.config.ngen
            );
            eprintln!(
                "  Operators: cxpb={:.3}, eta_c={:.1}, eta_m={:.1}, indpb={:.4}",
                self.config.cxpb, self.config.eta_c, self.config.eta_m, indpb
            );
        }

        // Configure global rayon thread pool once if requested
        if let Some(threads) = self.config.parallel.num_threads {
            // Ignore error if global pool already set
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global();
        }

        // RNG: evaluation is the only parallel stage and never draws, so
        // a single sequential generator keeps runs reproducible.
        let mut rng: StdRng = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        let mut pop = init_random(npop, &self.lower, &self.upper, &mut rng);
        let mut nfev = evaluate_invalid(&mut pop, self.func, n_obj, &self.config.parallel)?;
        let mut pop = select_nsga2(pop, npop);

        let mut logbook = Logbook::new();
        logbook.record(0, nfev, &pop);
        if self.config.disp {
            eprintln!("  gen 0: {} evaluations", nfev);
        }

        for gen in 1..self.config.ngen {
            let mut offspring = select_tournament_dcd(&pop, &mut rng)?;

            for pair in offspring.chunks_mut(2) {
                if pair.len() < 2 {
                    continue;
                }
                let (left, right) = pair.split_at_mut(1);
                let (a, b) = (&mut left[0], &mut right[0]);

                if rng.random::<f64>() <= self.config.cxpb {
                    sbx_bounded(a, b, &self.lower, &self.upper, self.config.eta_c, &mut rng);
                }
                mutate_polynomial_bounded(
                    a,
                    &self.lower,
                    &self.upper,
                    self.config.eta_m,
                    indpb,
                    &mut rng,
                );
                mutate_polynomial_bounded(
                    b,
                    &self.lower,
                    &self.upper,
                    self.config.eta_m,
                    indpb,
                    &mut rng,
                );
            }

            let nevals =
                evaluate_invalid(&mut offspring, self.func, n_obj, &self.config.parallel)?;
            nfev += nevals;

            pop.extend(offspring);
            pop = select_nsga2(pop, npop);
            logbook.record(gen, nevals, &pop);

            if self.config.disp {
                let r = &logbook.records()[logbook.len() - 1];
                eprintln!("  gen {}: {} evaluations, min={:?}", gen, nevals, r.min);
            }
        }

        Ok(Nsga2Report {
            population: pop,
            logbook,
            ngen: self.config.ngen,
            nfev,
            message: format!("Completed {} generations", self.config.ngen),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_builder_defaults_are_valid() {
        let cfg = Nsga2ConfigBuilder::new().build().unwrap();
        assert_eq!(cfg.pop_size, 100);
        assert_eq!(cfg.ngen, 250);
        assert_eq!(cfg.n_objectives, 2);
        assert!((cfg.cxpb - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_builder_rejects_bad_pop_size() {
        assert!(matches!(
            Nsga2ConfigBuilder::new().pop_size(2).build(),
            Err(Nsga2Error::PopulationTooSmall { pop_size: 2 })
        ));
        assert!(matches!(
            Nsga2ConfigBuilder::new().pop_size(30).build(),
            Err(Nsga2Error::PopulationNotMultipleOfFour { pop_size: 30 })
        ));
    }

    #[test]
    fn test_builder_rejects_bad_probabilities() {
        let err = Nsga2ConfigBuilder::new().cxpb(1.5).build().unwrap_err();
        assert!(matches!(
            err,
            Nsga2Error::InvalidProbability { name: "cxpb", .. }
        ));
        let err = Nsga2ConfigBuilder::new().indpb(-0.1).build().unwrap_err();
        assert!(matches!(
            err,
            Nsga2Error::InvalidProbability { name: "indpb", .. }
        ));
        let err = Nsga2ConfigBuilder::new().eta_c(0.0).build().unwrap_err();
        assert!(matches!(
            err,
            Nsga2Error::InvalidDistributionIndex { name: "eta_c", .. }
        ));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        let f = |x: &Array1<f64>| array![x[0], -x[0]];
        let err = Nsga2::new(&f, array![0.0, 0.0], array![1.0]).unwrap_err();
        assert!(err.is_bounds_error());

        let err = Nsga2::new(&f, array![2.0], array![1.0]).unwrap_err();
        assert!(matches!(err, Nsga2Error::InvalidBounds { index: 0, .. }));
    }
}
