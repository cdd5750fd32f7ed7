//! Fast non-dominated sorting.
//!
//! Partitions a population into fronts of equal non-domination rank:
//! front 0 holds individuals dominated by nobody, each later front is
//! dominated only by earlier ones. O(M * N^2) comparisons with O(N^2)
//! auxiliary storage, which is fine for the population sizes this
//! algorithm targets (tens to low hundreds).

use crate::individual::Individual;

/// Sorts the population into fronts, returned as lists of indices into
/// `pop` in rank order. Every individual appears in exactly one front.
/// Mutually non-dominating individuals may share a front; ties never
/// impose an ordering preference.
pub fn non_dominated_sort(pop: &[Individual]) -> Vec<Vec<usize>> {
    let n = pop.len();
    let mut domination_count: Vec<usize> = vec![0; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            if pop[i].dominates(&pop[j]) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if pop[j].dominates(&pop[i]) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current.is_empty() {
        let mut next: Vec<usize> = Vec::new();
        for &i in &current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        fronts.push(current);
        current = next;
    }

    fronts
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
    fn test_three_layer_population() {
        // (1,1) dominates (2,2) dominates (3,3); (0.5,3.5) trades off with all.
        let pop = vec![ind([2.0, 2.0]), ind([1.0, 1.0]), ind([3.0, 3.0]), ind([0.5, 3.5])];
        let fronts = non_dominated_sort(&pop);

        assert_eq!(fronts.len(), 3);
        assert_eq!(fronts[0], vec![1, 3]);
        assert_eq!(fronts[1], vec![0]);
        assert_eq!(fronts[2], vec![2]);
    }

    #[test]
    fn test_rank_zero_is_non_dominated() {
        let pop: Vec<Individual> = (0..20)
            .map(|i| {
                let t = i as f64 / 19.0;
                // Half the points are shifted off the line and dominated.
                let shift = if i % 2 == 0 { 0.0 } else { 0.5 };
                ind([t + shift, 1.0 - t + shift])
            })
            .collect();
        let fronts = non_dominated_sort(&pop);

        for &i in &fronts[0] {
            for (j, other) in pop.iter().enumerate() {
                if i != j {
                    assert!(!other.dominates(&pop[i]));
                }
            }
        }
        // Dominating individuals never get a worse rank than the dominated.
        let mut rank = vec![0; pop.len()];
        for (r, front) in fronts.iter().enumerate() {
            for &i in front {
                rank[i] = r;
            }
        }
        for i in 0..pop.len() {
            for j in 0..pop.len() {
                if pop[i].dominates(&pop[j]) {
                    assert!(rank[i] <= rank[j]);
                }
            }
        }
    }

    #[test]
    fn test_mutually_non_dominated_line() {
        // Points on the line f2 = 1 - f1 are mutually non-dominated.
        let pop: Vec<Individual> = (0..10)
            .map(|i| {
                let t = i as f64 / 9.0;
                ind([t, 1.0 - t])
            })
            .collect();
        let fronts = non_dominated_sort(&pop);

        assert_eq!(fronts.len(), 1);
        assert_eq!(fronts[0].len(), 10);
    }

    #[test]
    fn test_duplicate_points_share_rank() {
        let pop = vec![ind([1.0, 1.0]), ind([1.0, 1.0]), ind([2.0, 2.0])];
        let fronts = non_dominated_sort(&pop);

        assert_eq!(fronts[0], vec![0, 1]);
        assert_eq!(fronts[1], vec![2]);
    }

    #[test]
    fn test_empty_population() {
        assert!(non_dominated_sort(&[]).is_empty());
    }
}
