//! ZDT4 test function

use ndarray::{Array1, array};

/// ZDT4 function - N-dimensional, two objectives, highly multimodal
/// 21^(n-1) local fronts; the global front is f2 = 1 - sqrt(f1),
/// reached when x_2..x_n = 0
/// Bounds: x_1 in [0, 1], x_i in [-5, 5] for i >= 2
pub fn zdt4(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    let f1 = x[0];
    let g = 1.0
        + 10.0 * (n as f64 - 1.0)
        + x.iter()
            .skip(1)
            .map(|&xi| xi * xi - 10.0 * (4.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>();
    let f2 = g * (1.0 - (f1 / g).sqrt());
    array![f1, f2]
}
