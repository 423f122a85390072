//! Deterministic random number generation for stick throws.
//!
//! The throw generator is the only source of randomness in the crate, and it
//! must be re-seedable so games and tests can be replayed exactly. ChaCha8
//! keeps the sequence deterministic across platforms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for stick throws.
///
/// Same seed produces the identical throw sequence.
#[derive(Clone, Debug)]
pub struct ThrowRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ThrowRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// One 50/50 coin flip: true = flat side up.
    pub fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = ThrowRng::new(42);
        let mut rng2 = ThrowRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.flip(), rng2.flip());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = ThrowRng::new(1);
        let mut rng2 = ThrowRng::new(2);

        let seq1: Vec<_> = (0..64).map(|_| rng1.flip()).collect();
        let seq2: Vec<_> = (0..64).map(|_| rng2.flip()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_flip_hits_both_faces() {
        let mut rng = ThrowRng::new(7);
        let flips: Vec<_> = (0..64).map(|_| rng.flip()).collect();

        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }

    #[test]
    fn test_seed_is_recorded() {
        assert_eq!(ThrowRng::new(99).seed(), 99);
    }
}
