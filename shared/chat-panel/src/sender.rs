//! Random-source capability used to pick who "sent" a submitted message.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Chooses a roster index for each new message.
pub trait SenderSource: Send {
    /// Returns an index in `0..roster_len`. `roster_len` is never zero.
    fn pick(&mut self, roster_len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl SenderSource for ThreadRngSource {
    fn pick(&mut self, roster_len: usize) -> usize {
        rand::thread_rng().gen_range(0..roster_len)
    }
}

/// Uniform choice from a seeded ChaCha stream, reproducible across runs.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha20Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl SenderSource for SeededSource {
    fn pick(&mut self, roster_len: usize) -> usize {
        self.rng.gen_range(0..roster_len)
    }
}

/// Round-robin over the roster starting at `next`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclingSource {
    next: usize,
}

impl CyclingSource {
    pub fn starting_at(index: usize) -> Self {
        Self { next: index }
    }
}

impl SenderSource for CyclingSource {
    fn pick(&mut self, roster_len: usize) -> usize {
        let index = self.next % roster_len;
        self.next = index + 1;
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = SeededSource::new(7);
        let mut b = SeededSource::new(7);
        let first: Vec<usize> = (0..32).map(|_| a.pick(5)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.pick(5)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 5));
    }

    #[test]
    fn thread_rng_stays_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..100 {
            assert!(source.pick(3) < 3);
        }
        assert_eq!(source.pick(1), 0);
    }

    #[test]
    fn cycling_wraps_around() {
        let mut source = CyclingSource::starting_at(3);
        let picks: Vec<usize> = (0..5).map(|_| source.pick(4)).collect();
        assert_eq!(picks, vec![3, 0, 1, 2, 3]);
    }
}
