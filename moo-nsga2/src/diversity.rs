//! Diversity metric: spread of an attained front between two extremes.

use crate::error::{Nsga2Error, Result};
use ndarray::Array1;
use std::cmp::Ordering;

/// Deb's spread indicator over the attained front.
///
/// The population is ordered lexicographically in objective space; `df`
/// and `dl` are the distances from the supplied extremes to the first
/// and last attained points, and the remaining terms measure how far the
/// consecutive gaps deviate from their mean. 0 is a perfectly uniform
/// spread reaching both extremes; larger values mean clustering or
/// missing ends. A degenerate front where every distance is zero yields
/// 0.0.
pub fn diversity(
    population: &[Array1<f64>],
    first: &Array1<f64>,
    last: &Array1<f64>,
) -> f64 {
    if population.is_empty() {
        return 0.0;
    }

    let mut sorted: Vec<&Array1<f64>> = population.iter().collect();
    sorted.sort_by(|a, b| lex_cmp(a, b));

    let df = euclidean(first, sorted[0]);
    let dl = euclidean(last, sorted[sorted.len() - 1]);

    let gaps: Vec<f64> = sorted
        .windows(2)
        .map(|w| euclidean(w[0], w[1]))
        .collect();
    let mean = if gaps.is_empty() {
        0.0
    } else {
        gaps.iter().sum::<f64>() / gaps.len() as f64
    };
    let deviation: f64 = gaps.iter().map(|d| (d - mean).abs()).sum();

    let denom = df + dl + gaps.len() as f64 * mean;
    if denom <= 0.0 {
        return 0.0;
    }
    (df + dl + deviation) / denom
}

/// Lexicographically smallest and largest points of a reference front,
/// used as the extremes the diversity metric measures against.
///
/// # Errors
///
/// Returns `Nsga2Error::EmptyReferenceFront` when the front is empty.
pub fn front_extremes(
    reference: &[Array1<f64>],
) -> Result<(&Array1<f64>, &Array1<f64>)> {
    let first = reference.iter().min_by(|a, b| lex_cmp(a, b));
    let last = reference.iter().max_by(|a, b| lex_cmp(a, b));
    match (first, last) {
        (Some(f), Some(l)) => Ok((f, l)),
        _ => Err(Nsga2Error::EmptyReferenceFront),
    }
}

fn lex_cmp(a: &Array1<f64>, b: &Array1<f64>) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.partial_cmp(y) {
            Some(Ordering::Equal) | None => continue,
            Some(ord) => return ord,
        }
    }
    Ordering::Equal
}

fn euclidean(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_uniform_front_touching_extremes_is_zero() {
        let pop = vec![
            array![0.0, 1.0],
            array![0.25, 0.75],
            array![0.5, 0.5],
            array![0.75, 0.25],
            array![1.0, 0.0],
        ];
        let d = diversity(&pop, &array![0.0, 1.0], &array![1.0, 0.0]);
        assert!(d.abs() < 1e-12);
    }

    #[test]
    fn test_clustered_front_is_positive() {
        let pop = vec![
            array![0.0, 1.0],
            array![0.05, 0.95],
            array![0.1, 0.9],
            array![1.0, 0.0],
        ];
        let d = diversity(&pop, &array![0.0, 1.0], &array![1.0, 0.0]);
        assert!(d > 0.3);
    }

    #[test]
    fn test_missing_extremes_penalized() {
        let centered = vec![array![0.4, 0.6], array![0.5, 0.5], array![0.6, 0.4]];
        let d = diversity(&centered, &array![0.0, 1.0], &array![1.0, 0.0]);
        assert!(d > 0.5);
    }

    #[test]
    fn test_single_duplicate_point_is_zero() {
        let pop = vec![array![0.5, 0.5]];
        let d = diversity(&pop, &array![0.5, 0.5], &array![0.5, 0.5]);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_front_extremes_lexicographic() {
        let front = vec![array![0.5, 0.5], array![0.0, 1.0], array![1.0, 0.0]];
        let (first, last) = front_extremes(&front).unwrap();
        assert_eq!(first, &array![0.0, 1.0]);
        assert_eq!(last, &array![1.0, 0.0]);
    }

    #[test]
    fn test_front_extremes_empty_errors() {
        assert!(matches!(
            front_extremes(&[]),
            Err(Nsga2Error::EmptyReferenceFront)
        ));
    }
}
