//! Elitist environmental selection.

use crate::crowding_distance::crowding_distance;
use crate::individual::Individual;
use crate::non_dominated_sort::non_dominated_sort;
use std::cmp::Ordering;

/// Selects the next generation from a pool of up to 2N individuals.
///
/// The pool is sorted into fronts; whole fronts are kept in rank order
/// while they fit, and the first front that would overflow `k` is
/// truncated by crowding distance, most isolated members first. Every
/// survivor comes back annotated with its rank and crowding distance
/// (the annotations the crowded tournament reads next generation).
///
/// A non-dominated individual is never discarded in favor of a dominated
/// one. When the pool already has exactly `k` members the call only
/// sorts and annotates.
pub fn select_nsga2(pool: Vec<Individual>, k: usize) -> Vec<Individual> {
    let mut pool = pool;
    let fronts = non_dominated_sort(&pool);

    for (rank, front) in fronts.iter().enumerate() {
        let dist = crowding_distance(&pool, front);
        for (j, &i) in front.iter().enumerate() {
            pool[i].rank = rank;
            pool[i].crowding = dist[j];
        }
    }

    let mut chosen: Vec<Individual> = Vec::with_capacity(k);
    for front in &fronts {
        if chosen.len() + front.len() <= k {
            chosen.extend(front.iter().map(|&i| pool[i].clone()));
        } else {
            let remaining = k - chosen.len();
            let mut by_crowding: Vec<usize> = front.clone();
            by_crowding.sort_by(|&a, &b| {
                pool[b]
                    .crowding
                    .partial_cmp(&pool[a].crowding)
                    .unwrap_or(Ordering::Equal)
            });
            chosen.extend(by_crowding[..remaining].iter().map(|&i| pool[i].clone()));
            break;
        }
    }

    chosen
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

    fn line_front(n: usize, offset: f64) -> Vec<Individual> {
        (0..n)
            .map(|i| {
                let t = i as f64 / (n - 1) as f64;
                ind([t + offset, 1.0 - t + offset])
            })
            .collect()
    }

    #[test]
    fn test_exact_pool_only_annotates() {
        let pop = line_front(8, 0.0);
        let selected = select_nsga2(pop, 8);

        assert_eq!(selected.len(), 8);
        assert!(selected.iter().all(|i| i.rank == 0));
        assert!(selected.iter().all(|i| i.crowding > 0.0));
    }

    #[test]
    fn test_truncates_to_k() {
        let mut pool = line_front(10, 0.0);
        pool.extend(line_front(10, 0.5));
        let selected = select_nsga2(pool, 10);

        assert_eq!(selected.len(), 10);
        // The dominated copy of the line never displaces the first front.
        assert!(selected.iter().all(|i| i.rank == 0));
    }

    #[test]
    fn test_boundary_front_cut_by_crowding() {
        // First front of 2 fits whole; second front of 4 must drop one.
        let mut pool = vec![ind([0.0, 0.1]), ind([0.1, 0.0])];
        pool.extend(vec![
            ind([1.0, 4.0]),
            ind([1.1, 3.9]), // most crowded interior member
            ind([2.5, 2.5]),
            ind([4.0, 1.0]),
        ]);
        let selected = select_nsga2(pool, 5);

        assert_eq!(selected.len(), 5);
        let second: Vec<&Individual> = selected.iter().filter(|i| i.rank == 1).collect();
        assert_eq!(second.len(), 3);
        // The cut removes the least isolated member, never an extreme.
        assert!(second.iter().all(|i| (i.f[0] - 1.1).abs() > 1e-12));
    }

    #[test]
    fn test_elitism_over_dominated() {
        let mut pool = line_front(4, 0.0);
        pool.extend(line_front(12, 2.0));
        let selected = select_nsga2(pool, 8);

        // All 4 non-dominated members survive.
        assert_eq!(selected.iter().filter(|i| i.rank == 0).count(), 4);
        assert_eq!(selected.len(), 8);
    }
}
