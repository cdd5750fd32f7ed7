//! Schaffer N.1 test function

use ndarray::{Array1, array};

/// Schaffer N.1 function - 1-dimensional, two objectives
/// Front: f = (t^2, (t - 2)^2) for t in [0, 2]
/// Bounds: x in [-10, 10]
pub fn schaffer_n1(x: &Array1<f64>) -> Array1<f64> {
    let t = x[0];
    array![t * t, (t - 2.0) * (t - 2.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schaffer_extremes() {
        let f = schaffer_n1(&Array1::from_vec(vec![0.0]));
        assert_eq!(f[0], 0.0);
        assert_eq!(f[1], 4.0);

        let f = schaffer_n1(&Array1::from_vec(vec![2.0]));
        assert_eq!(f[0], 4.0);
        assert_eq!(f[1], 0.0);
    }
}
