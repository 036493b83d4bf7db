//! Easy tier: uniform random choice.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks one of `available` uniformly at random.
///
/// Returns `None` only when `available` is empty.
pub fn random_move<R: Rng + ?Sized>(available: &[usize], rng: &mut R) -> Option<usize> {
    available.choose(rng).copied()
}
