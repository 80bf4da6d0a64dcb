//! In-place Fisher-Yates shuffling.

use rand::Rng;

use super::cards::Card;

/// Unbiased Fisher-Yates permutation: walk from the last index down to 1,
/// swapping each position with a uniformly chosen earlier-or-equal index.
pub fn fisher_yates<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// Shuffle with the calling thread's own generator. Each thread owns an
/// independently seeded RNG, so concurrent shuffles never race on shared
/// generator state.
pub fn shuffle(cards: &mut [Card]) {
    fisher_yates(cards, &mut rand::rng());
}
