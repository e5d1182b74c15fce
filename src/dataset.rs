//! # Dataset generation and growth.
//!
//! Datasets are plain `Vec<u32>` filled with uniform pseudo-random values.
//! The randomness source is injected as a [`rand::Rng`], so callers (and
//! tests) control determinism.
//!
//! Growth copies the existing prefix verbatim and draws only the appended
//! tail; it never reads uninitialized positions of the new sequence.

use rand::Rng;

/// Creates a dataset of `n` elements, each drawn uniformly from `[0, n)`.
///
/// `n == 0` yields an empty dataset without consuming the random source.
pub fn create<R: Rng>(n: usize, rng: &mut R) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let bound = n as u32;
    (0..n).map(|_| rng.random_range(0..bound)).collect()
}

/// Extends `items` by `by` elements.
///
/// The first `items.len()` entries of the result equal the input unchanged;
/// the trailing `by` entries are drawn uniformly from `[0, items.len() + by)`.
pub fn grow<R: Rng>(items: &[u32], by: usize, rng: &mut R) -> Vec<u32> {
    let total = items.len() + by;
    let mut grown = Vec::with_capacity(total);
    grown.extend_from_slice(items);
    let bound = total as u32;
    grown.extend((0..by).map(|_| rng.random_range(0..bound)));
    grown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn create_has_requested_length_and_range() {
        let items = create(1_000, &mut rng(1));
        assert_eq!(items.len(), 1_000);
        assert!(items.iter().all(|&v| v < 1_000));
    }

    #[test]
    fn create_zero_is_empty() {
        assert!(create(0, &mut rng(1)).is_empty());
    }

    #[test]
    fn create_is_deterministic_per_seed() {
        assert_eq!(create(64, &mut rng(7)), create(64, &mut rng(7)));
    }

    #[test]
    fn grow_preserves_prefix_and_extends() {
        let grown = grow(&[1, 2, 3], 2, &mut rng(2));
        assert_eq!(grown.len(), 5);
        assert_eq!(&grown[..3], &[1, 2, 3]);
        assert!(grown[3..].iter().all(|&v| v < 5));
    }

    #[test]
    fn grow_by_zero_is_identity() {
        let items = vec![9, 8, 7];
        assert_eq!(grow(&items, 0, &mut rng(3)), items);
    }

    #[test]
    fn grow_from_empty() {
        let grown = grow(&[], 4, &mut rng(4));
        assert_eq!(grown.len(), 4);
        assert!(grown.iter().all(|&v| v < 4));
    }
}
