//! Mine placement
//!
//! Mines are drawn uniformly without replacement from every index except the
//! first revealed one, so the opening move can never hit a mine.

use rand::Rng;

/// Pick `count` distinct mine indices from `0..len`, never choosing `safe`.
///
/// Samples from the `len - 1` candidate slots and shifts every slot at or
/// past `safe` up by one, which keeps the distribution uniform without
/// rejection loops.
///
/// # Panics
///
/// Panics if `count >= len` or `safe >= len`.
pub fn random_mines<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize, safe: usize) -> Vec<usize> {
    assert!(safe < len, "safe index {} out of range for {} cells", safe, len);
    assert!(count < len, "cannot place {} mines in {} cells", count, len);

    rand::seq::index::sample(rng, len - 1, count)
        .into_iter()
        .map(|slot| if slot >= safe { slot + 1 } else { slot })
        .collect()
}
