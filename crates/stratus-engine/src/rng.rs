//! Deterministic RNG wrapper using PCG32.
//!
//! All randomness in the engine MUST flow through this module. The RNG
//! is a per-render instance threaded explicitly through the pipeline
//! stages — there is no ambient or process-global random state — so
//! that equal seeds reproduce posters bit-for-bit, including under
//! concurrent renders.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct PosterRng {
    inner: Pcg32,
    gauss_spare: Option<f64>,
}

impl PosterRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits, so a
    /// small seed space still spreads over the full PCG state.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
            gauss_spare: None,
        }
    }

    /// Create an RNG from process entropy, returning the drawn seed so
    /// the render can be reproduced after the fact.
    pub fn from_entropy() -> (Self, u32) {
        let seed: u32 = rand::random();
        (Self::new(seed), seed)
    }

    /// Derive an independent sub-seed for a pipeline stage using BLAKE3.
    ///
    /// Stages consume their own derived stream, so adding draws to one
    /// stage cannot perturb another stage's output.
    pub fn derive_stage_seed(base_seed: u32, stage: &str) -> u32 {
        let mut input = Vec::with_capacity(4 + stage.len());
        input.extend_from_slice(&base_seed.to_le_bytes());
        input.extend_from_slice(stage.as_bytes());
        let hash = blake3::hash(&input);
        let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
        u32::from_le_bytes(bytes)
    }

    /// Generate a random f64 in the range [0.0, 1.0).
    #[inline]
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// Pick a uniformly random element of a non-empty slice.
    #[inline]
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.gen_range(0..items.len())]
    }

    /// Sample a zero-mean Gaussian with the given standard deviation.
    ///
    /// Box–Muller over the PCG stream; the second variate of each pair
    /// is cached, so two consecutive calls cost one pair of uniforms.
    pub fn gen_gaussian(&mut self, stddev: f64) -> f64 {
        if let Some(z) = self.gauss_spare.take() {
            return z * stddev;
        }

        // u must be in (0, 1] to keep ln(u) finite.
        let u = 1.0 - self.gen_f64();
        let v = self.gen_f64();
        let r = (-2.0 * u.ln()).sqrt();
        let theta = 2.0 * std::f64::consts::PI * v;
        self.gauss_spare = Some(r * theta.sin());
        r * theta.cos() * stddev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_seeds_produce_equal_streams() {
        let mut a = PosterRng::new(42);
        let mut b = PosterRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.gen_f64(), b.gen_f64());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PosterRng::new(42);
        let mut b = PosterRng::new(43);
        let diverged = (0..10).any(|_| a.gen_f64() != b.gen_f64());
        assert!(diverged);
    }

    #[test]
    fn stage_seeds_are_stable_and_distinct() {
        let decor = PosterRng::derive_stage_seed(42, "decor");
        let grain = PosterRng::derive_stage_seed(42, "grain");
        assert_ne!(decor, grain);
        assert_eq!(decor, PosterRng::derive_stage_seed(42, "decor"));
    }

    #[test]
    fn gaussian_is_deterministic_and_roughly_centered() {
        let mut a = PosterRng::new(7);
        let mut b = PosterRng::new(7);
        let xs: Vec<f64> = (0..1000).map(|_| a.gen_gaussian(10.0)).collect();
        let ys: Vec<f64> = (0..1000).map(|_| b.gen_gaussian(10.0)).collect();
        assert_eq!(xs, ys);

        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!(mean.abs() < 1.5, "mean {mean} too far from zero");
    }

    #[test]
    fn zero_stddev_gaussian_is_zero() {
        let mut rng = PosterRng::new(1);
        for _ in 0..10 {
            assert_eq!(rng.gen_gaussian(0.0), 0.0);
        }
    }
}
