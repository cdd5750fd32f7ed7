//! Simulated binary crossover, bounded variant.
//!
//! Recombines two parents in place, coordinate by coordinate. The spread
//! factor is drawn from a polynomial distribution centred on the parents:
//! a large distribution index `eta_c` keeps children close to their
//! parents, a small one spreads them out. Each side of the pair uses the
//! boundary nearest to it so children always land inside the box.

use crate::individual::Individual;
use ndarray::Array1;
use rand::Rng;

const SBX_EPS: f64 = 1e-14;

/// Recombines `ind1` and `ind2` in place and invalidates both.
///
/// Every coordinate is recombined; the single uniform draw per coordinate
/// happens before the degeneracy check so two runs with the same seed
/// stay aligned whether or not parents coincide on some coordinate.
/// Coordinates where the parents are closer than an absolute epsilon are
/// left as they are.
pub fn sbx_bounded<R: Rng + ?Sized>(
    ind1: &mut Individual,
    ind2: &mut Individual,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    eta_c: f64,
    rng: &mut R,
) {
    let dim = ind1.x.len();
    for i in 0..dim {
        let u: f64 = rng.random();

        let x1 = ind1.x[i];
        let x2 = ind2.x[i];
        if (x2 - x1).abs() < SBX_EPS {
            continue;
        }

        let (y1, y2) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
        let xl = lower[i];
        let xu = upper[i];

        // Child on the lower side, contracted toward the lower bound.
        let beta = 1.0 + 2.0 * (y1 - xl) / (y2 - y1);
        let alpha = 2.0 - beta.powf(-(eta_c + 1.0));
        let beta_q = if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / (eta_c + 1.0))
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / (eta_c + 1.0))
        };
        let c1 = 0.5 * ((y1 + y2) - beta_q * (y2 - y1));

        // Child on the upper side, same draw, boundary term from above.
        let beta = 1.0 + 2.0 * (xu - y2) / (y2 - y1);
        let alpha = 2.0 - beta.powf(-(eta_c + 1.0));
        let beta_q = if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / (eta_c + 1.0))
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / (eta_c + 1.0))
        };
        let c2 = 0.5 * ((y1 + y2) + beta_q * (y2 - y1));

        ind1.x[i] = c1.clamp(xl, xu);
        ind2.x[i] = c2.clamp(xl, xu);
    }

    ind1.invalidate();
    ind2.invalidate();
}
