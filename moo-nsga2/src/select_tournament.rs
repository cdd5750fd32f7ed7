//! Crowded-comparison binary tournament (mating selection).
//!
//! One pass draws two random permutations of the population and plays
//! disjoint pairs of consecutive entries, four winners at a time, so
//! every individual enters exactly two tournaments and exactly N parents
//! come out (with repetition). The winner of a pair has the lower rank;
//! equal ranks fall back to the higher crowding distance; a full tie
//! picks the first member of the pair, deterministically.

use crate::error::{Nsga2Error, Result};
use crate::individual::Individual;
use rand::Rng;
use rand::seq::SliceRandom;

/// Runs one full tournament pass over `pop` and returns N parent clones.
///
/// # Errors
///
/// Returns `Nsga2Error::PopulationNotMultipleOfFour` when the population
/// size cannot be split into the four-winner blocks of a pass.
pub fn select_tournament_dcd<R: Rng + ?Sized>(
    pop: &[Individual],
    rng: &mut R,
) -> Result<Vec<Individual>> {
    let n = pop.len();
    if n % 4 != 0 {
        return Err(Nsga2Error::PopulationNotMultipleOfFour { pop_size: n });
    }

    let mut perm1: Vec<usize> = (0..n).collect();
    let mut perm2: Vec<usize> = (0..n).collect();
    perm1.shuffle(rng);
    perm2.shuffle(rng);

    let mut chosen: Vec<Individual> = Vec::with_capacity(n);
    let mut i = 0;
    while i < n {
        chosen.push(pop[crowded_winner(pop, perm1[i], perm1[i + 1])].clone());
        chosen.push(pop[crowded_winner(pop, perm1[i + 2], perm1[i + 3])].clone());
        chosen.push(pop[crowded_winner(pop, perm2[i], perm2[i + 1])].clone());
        chosen.push(pop[crowded_winner(pop, perm2[i + 2], perm2[i + 3])].clone());
        i += 4;
    }

    Ok(chosen)
}

/// Crowded-comparison operator between two members of an annotated
/// population: rank first, crowding distance second, first entry on a
/// full tie.
fn crowded_winner(pop: &[Individual], a: usize, b: usize) -> usize {
    if pop[a].rank < pop[b].rank {
        a
    } else if pop[b].rank < pop[a].rank {
        b
    } else if pop[b].crowding > pop[a].crowding {
        b
    } else {
        a
    }
}
