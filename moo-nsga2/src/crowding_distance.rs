//! Crowding distance, the diversity measure NSGA-II uses inside a front.
//!
//! Distances are only ever meaningful within a single front; they are
//! never compared across fronts.

use crate::individual::Individual;
use std::cmp::Ordering;

/// Computes the crowding distance of every member of one front.
///
/// `front` holds indices into `pop`; the returned distances are aligned
/// with `front`'s order. Boundary members on each objective receive
/// `f64::INFINITY`; interior members accumulate the normalized gap
/// between their neighbours, summed over objectives. An objective whose
/// values are all equal across the front contributes zero rather than
/// dividing by zero. Fronts of size <= 2 are all boundary.
pub fn crowding_distance(pop: &[Individual], front: &[usize]) -> Vec<f64> {
    let n = front.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let n_obj = pop[front[0]].f.len();
    let mut dist = vec![0.0_f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for m in 0..n_obj {
        order.sort_by(|&a, &b| {
            pop[front[a]].f[m]
                .partial_cmp(&pop[front[b]].f[m])
                .unwrap_or(Ordering::Equal)
        });

        dist[order[0]] = f64::INFINITY;
        dist[order[n - 1]] = f64::INFINITY;

        let f_min = pop[front[order[0]]].f[m];
        let f_max = pop[front[order[n - 1]]].f[m];
        let range = f_max - f_min;
        if range <= 0.0 {
            continue;
        }

        for k in 1..(n - 1) {
            let prev = pop[front[order[k - 1]]].f[m];
            let next = pop[front[order[k + 1]]].f[m];
            dist[order[k]] += (next - prev) / range;
        }
    }

    dist
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
    fn test_small_front_all_infinite() {
        let pop = vec![ind([0.0, 1.0]), ind([1.0, 0.0])];
        assert_eq!(
            crowding_distance(&pop, &[0, 1]),
            vec![f64::INFINITY, f64::INFINITY]
        );
        assert_eq!(crowding_distance(&pop, &[0]), vec![f64::INFINITY]);
        assert!(crowding_distance(&pop, &[]).is_empty());
    }

    #[test]
    fn test_boundary_infinite_interior_finite() {
        let pop = vec![
            ind([0.0, 1.0]),
            ind([0.25, 0.75]),
            ind([0.5, 0.5]),
            ind([1.0, 0.0]),
        ];
        let d = crowding_distance(&pop, &[0, 1, 2, 3]);

        assert!(d[0].is_infinite());
        assert!(d[3].is_infinite());
        assert!(d[1].is_finite());
        assert!(d[2].is_finite());
        // Both objectives contribute (0.5 - 0.0) / 1.0 for the member at 0.25.
        assert!((d[1] - 1.0).abs() < 1e-12);
        assert!((d[2] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_objective_contributes_zero() {
        // Second objective is constant across the front.
        let pop = vec![
            ind([0.0, 3.0]),
            ind([0.4, 3.0]),
            ind([0.6, 3.0]),
            ind([1.0, 3.0]),
        ];
        let d = crowding_distance(&pop, &[0, 1, 2, 3]);

        assert!(d[0].is_infinite() && d[3].is_infinite());
        assert!((d[1] - 0.6).abs() < 1e-12);
        assert!((d[2] - 0.6).abs() < 1e-12);
    }
}
