//! ZDT1 test function

use ndarray::{Array1, array};

/// ZDT1 function - N-dimensional, two objectives, convex Pareto front
/// Front: f2 = 1 - sqrt(f1) with f1 in [0, 1], reached when x_2..x_n = 0
/// Bounds: x_i in [0, 1]
pub fn zdt1(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let f1 = x[0];
    let g = 1.0 + 9.0 * x.iter().skip(1).sum::<f64>() / (n as f64 - 1.0);
    let f2 = g * (1.0 - (f1 / g).sqrt());
    array![f1, f2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zdt1_on_the_front() {
        // Tail at zero puts the point on the front: f2 = 1 - sqrt(f1).
        let x = Array1::from_vec(vec![0.25, 0.0, 0.0, 0.0]);
        let f = zdt1(&x);
        assert!((f[0] - 0.25).abs() < 1e-12);
        assert!((f[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zdt1_off_the_front() {
        let x = Array1::from_vec(vec![0.0, 1.0, 1.0, 1.0]);
        let f = zdt1(&x);
        assert_eq!(f[0], 0.0);
        // g = 1 + 9 * 3/3 = 10, f2 = 10 * (1 - 0) = 10.
        assert!((f[1] - 10.0).abs() < 1e-12);
    }
}
