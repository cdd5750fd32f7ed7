//! Bounded polynomial mutation.

use crate::individual::Individual;
use ndarray::Array1;
use rand::Rng;

/// Mutates `ind` in place and invalidates its fitness.
///
/// Each gene independently mutates with probability `indpb`. The
/// perturbation follows a polynomial distribution whose tails are shaped
/// by the distance to each bound, so a gene near a boundary cannot
/// overshoot it. A gene whose bounds coincide is pinned and never moves.
pub fn mutate_polynomial_bounded<R: Rng + ?Sized>(
    ind: &mut Individual,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    eta_m: f64,
    indpb: f64,
    rng: &mut R,
) {
    let dim = ind.x.len();
    let mut_pow = 1.0 / (eta_m + 1.0);

    for i in 0..dim {
        if rng.random::<f64>() > indpb {
            continue;
        }

        let xl = lower[i];
        let xu = upper[i];
        if xu - xl <= 0.0 {
            continue;
        }

        let y = ind.x[i];
        let delta_1 = (y - xl) / (xu - xl);
        let delta_2 = (xu - y) / (xu - xl);
        let u: f64 = rng.random();

        let delta_q = if u < 0.5 {
            let xy = 1.0 - delta_1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(eta_m + 1.0);
            val.powf(mut_pow) - 1.0
        } else {
            let xy = 1.0 - delta_2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(eta_m + 1.0);
            1.0 - val.powf(mut_pow)
        };

        ind.x[i] = (y + delta_q * (xu - xl)).clamp(xl, xu);
    }

    ind.invalidate();
}
