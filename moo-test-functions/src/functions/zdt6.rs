//! ZDT6 test function

use ndarray::{Array1, array};

/// ZDT6 function - N-dimensional, two objectives, nonuniform front density
/// Front: f2 = 1 - f1^2 with f1 in [about 0.2808, 1], reached when
/// x_2..x_n = 0
/// Bounds: x_i in [0, 1]
pub fn zdt6(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let s = (6.0 * std::f64::consts::PI * x[0]).sin();
    let f1 = 1.0 - (-4.0 * x[0]).exp() * s.powi(6);
    let g = 1.0 + 9.0 * (x.iter().skip(1).sum::<f64>() / (n as f64 - 1.0)).powf(0.25);
    let ratio = f1 / g;
    let f2 = g * (1.0 - ratio * ratio);
    array![f1, f2]
}
