//! Source of randomness for the sampler.
//!
//! Every draw advances the stream, so the order in which the sampler draws is part of
//! its contract: the same seed and topology always give the same trajectory.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub trait RandomStream {
    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]`, inclusive at both ends.
    fn uniform_int_in_range(&mut self, lo: usize, hi: usize) -> usize;
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomStream`].
#[derive(Debug, Clone)]
pub struct RngStream<R> {
    rng: R,
}

impl<R: Rng> RngStream<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngStream<Pcg64> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStream for RngStream<R> {
    #[inline]
    fn uniform_real(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    #[inline]
    fn uniform_int_in_range(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }
}
