//! ZDT2 test function

use ndarray::{Array1, array};

/// ZDT2 function - N-dimensional, two objectives, concave Pareto front
/// Front: f2 = 1 - f1^2 with f1 in [0, 1], reached when x_2..x_n = 0
/// Bounds: x_i in [0, 1]
pub fn zdt2(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let f1 = x[0];
    let g = 1.0 + 9.0 * x.iter().skip(1).sum::<f64>() / (n as f64 - 1.0);
    let ratio = f1 / g;
    let f2 = g * (1.0 - ratio * ratio);
    array![f1, f2]
}
