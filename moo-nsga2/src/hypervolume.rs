//! Hypervolume indicator.
//!
//! Measures the volume of objective space dominated by a point set and
//! bounded above by a reference point, with all objectives minimized.
//! Computed by slicing along the first objective and recursing on the
//! remaining ones, which is exact and fast enough for the two or three
//! objectives this crate targets.

use ndarray::Array1;

/// Hypervolume of `points` relative to `reference`.
///
/// Points that do not strictly dominate the reference point contribute
/// nothing and are dropped up front; an empty set has hypervolume 0.
/// Dominated points are filtered at every slicing level, so duplicates
/// and interior points never inflate the result.
pub fn hypervolume(points: &[Array1<f64>], reference: &Array1<f64>) -> f64 {
    let relevant: Vec<Array1<f64>> = points
        .iter()
        .filter(|p| p.iter().zip(reference.iter()).all(|(a, r)| a < r))
        .cloned()
        .collect();
    hv_slice(&non_dominated(relevant), reference)
}

fn hv_slice(points: &[Array1<f64>], reference: &Array1<f64>) -> f64 {
    if points.is_empty() {
        return 0.0;
    }

    if reference.len() == 1 {
        let best = points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
        return (reference[0] - best).max(0.0);
    }

    let mut sorted: Vec<&Array1<f64>> = points.iter().collect();
    sorted.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap_or(std::cmp::Ordering::Equal));

    // Sweep along the first objective; each slab spans from one point to
    // the next and is filled by the projection of everything seen so far.
    let mut volume = 0.0;
    for (k, p) in sorted.iter().enumerate() {
        let next = if k + 1 < sorted.len() {
            sorted[k + 1][0]
        } else {
            reference[0]
        };
        let width = next - p[0];
        if width <= 0.0 {
            continue;
        }

        let projected: Vec<Array1<f64>> = sorted[..=k]
            .iter()
            .map(|q| q.slice(ndarray::s![1..]).to_owned())
            .collect();
        let sub_ref = reference.slice(ndarray::s![1..]).to_owned();
        volume += width * hv_slice(&non_dominated(projected), &sub_ref);
    }

    volume
}

/// Keeps only points not weakly dominated by another point in the set.
fn non_dominated(points: Vec<Array1<f64>>) -> Vec<Array1<f64>> {
    let mut kept: Vec<Array1<f64>> = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let dominated = points.iter().enumerate().any(|(j, q)| {
            j != i
                && q.iter().zip(p.iter()).all(|(a, b)| a <= b)
                && (q.iter().zip(p.iter()).any(|(a, b)| a < b) || j < i)
        });
        if !dominated {
            kept.push(p.clone());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_single_point() {
        let hv = hypervolume(&[array![1.0, 1.0]], &array![2.0, 2.0]);
        assert!((hv - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_point_staircase() {
        // Union of [1,4]x[3,4] and [2,4]x[2,4] minus overlap = 3 + 4 - 2 = 5.
        let pts = vec![array![1.0, 3.0], array![2.0, 2.0]];
        let hv = hypervolume(&pts, &array![4.0, 4.0]);
        assert!((hv - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dominated_point_adds_nothing() {
        let base = vec![array![1.0, 1.0]];
        let with_dominated = vec![array![1.0, 1.0], array![1.5, 1.5]];
        let reference = array![3.0, 3.0];
        assert_eq!(
            hypervolume(&base, &reference),
            hypervolume(&with_dominated, &reference)
        );
    }

    #[test]
    fn test_duplicate_points_counted_once() {
        let pts = vec![array![1.0, 1.0], array![1.0, 1.0]];
        let hv = hypervolume(&pts, &array![2.0, 2.0]);
        assert!((hv - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_outside_reference_ignored() {
        let pts = vec![array![1.0, 5.0], array![1.0, 1.0]];
        let hv = hypervolume(&pts, &array![2.0, 2.0]);
        assert!((hv - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(hypervolume(&[], &array![1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_three_objectives_box() {
        let hv = hypervolume(&[array![0.0, 0.0, 0.0]], &array![1.0, 2.0, 3.0]);
        assert!((hv - 6.0).abs() < 1e-12);
    }
}
