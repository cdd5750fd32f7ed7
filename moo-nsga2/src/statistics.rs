//! Per-generation statistics and the logbook that collects them.

use crate::individual::Individual;
use ndarray::Array1;
use std::fmt;

/// Snapshot of one generation: evaluation count plus the per-objective
/// minimum and maximum over the surviving population.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// Generation index, 0 for the initial population
    pub gen: usize,
    /// Objective evaluations performed this generation
    pub nevals: usize,
    /// Component-wise minimum of the objective values
    pub min: Array1<f64>,
    /// Component-wise maximum of the objective values
    pub max: Array1<f64>,
}

/// Chronological record of a run, one entry per generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logbook {
    records: Vec<GenerationRecord>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record computed from the current population.
    pub fn record(&mut self, gen: usize, nevals: usize, pop: &[Individual]) {
        if pop.is_empty() {
            return;
        }
        let n_obj = pop[0].f.len();
        let mut min = Array1::from_elem(n_obj, f64::INFINITY);
        let mut max = Array1::from_elem(n_obj, f64::NEG_INFINITY);
        for ind in pop {
            for m in 0..n_obj {
                if ind.f[m] < min[m] {
                    min[m] = ind.f[m];
                }
                if ind.f[m] > max[m] {
                    max[m] = ind.f[m];
                }
            }
        }
        self.records.push(GenerationRecord {
            gen,
            nevals,
            min,
            max,
        });
    }

    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Display for Logbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5} {:>6}  {:<32} {:<32}", "gen", "evals", "min", "max")?;
        for r in &self.records {
            writeln!(
                f,
                "{:>5} {:>6}  {:<32} {:<32}",
                r.gen,
                r.nevals,
                format_vec(&r.min),
                format_vec(&r.max)
            )?;
        }
        Ok(())
    }
}

fn format_vec(v: &Array1<f64>) -> String {
    let parts: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn ind(f: [f64; 2]) -> Individual {
        let mut i = Individual::new(array![0.0]);
        i.set_fitness(array![f[0], f[1]]);
        i
    }

    #[test]
    fn test_record_tracks_extremes() {
        let pop = vec![ind([0.1, 0.9]), ind([0.5, 0.5]), ind([0.9, 0.1])];
        let mut log = Logbook::new();
        log.record(0, 3, &pop);

        assert_eq!(log.len(), 1);
        let r = &log.records()[0];
        assert_eq!(r.gen, 0);
        assert_eq!(r.nevals, 3);
        assert_eq!(r.min, array![0.1, 0.1]);
        assert_eq!(r.max, array![0.9, 0.9]);
    }

    #[test]
    fn test_empty_population_records_nothing() {
        let mut log = Logbook::new();
        log.record(0, 0, &[]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_display_has_header_and_rows() {
        let mut log = Logbook::new();
        log.record(0, 4, &[ind([1.0, 2.0])]);
        log.record(1, 4, &[ind([0.5, 1.5])]);

        let text = log.to_string();
        assert!(text.starts_with("  gen  evals"));
        assert_eq!(text.lines().count(), 3);
    }
}
