//! ZDT3 test function

use ndarray::{Array1, array};

/// ZDT3 function - N-dimensional, two objectives, disconnected Pareto front
/// Front: f2 = 1 - sqrt(f1) - f1 sin(10 pi f1) restricted to its
/// non-dominated segments, reached when x_2..x_n = 0
/// Bounds: x_i in [0, 1]
pub fn zdt3(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let f1 = x[0];
    let g = 1.0 + 9.0 * x.iter().skip(1).sum::<f64>() / (n as f64 - 1.0);
    let ratio = f1 / g;
    let f2 = g * (1.0 - ratio.sqrt() - ratio * (10.0 * std::f64::consts::PI * f1).sin());
    array![f1, f2]
}
