use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random choices the generator makes.
///
/// Any [`rand::Rng`] is a source; tests implement this directly to replay a
/// fixed sequence of choices.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Returns an integer in `min..=max`.
    fn int_in(&mut self, min: u32, max: u32) -> u32;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len.max(1))
    }

    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max.max(min))
    }
}

/// Random source for one client's workload file.
///
/// With a seed, client `k` draws from `seed + k` so every file is
/// reproducible on its own; without one, each client is seeded from entropy.
#[must_use]
pub fn client_source(seed: Option<u64>, client: usize) -> StdRng {
    match seed {
        Some(seed) => {
            let offset = u64::try_from(client).unwrap_or(u64::MAX);
            StdRng::seed_from_u64(seed.wrapping_add(offset))
        }
        None => StdRng::from_entropy(),
    }
}
