use crate::individual::Individual;
use ndarray::Array1;
use rand::Rng;

pub(crate) fn init_random<R: Rng + ?Sized>(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut R,
) -> Vec<Individual> {
    (0..npop)
        .map(|_| Individual::random(lower, upper, rng))
        .collect()
}
