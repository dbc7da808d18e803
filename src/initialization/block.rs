use rand::rngs::StdRng;
use rand_distr::Distribution;

use super::{ParamGen, Sampler};

/// The values of one contiguous block of a layer's parameters: its weights or its biases.
#[derive(Debug, Clone)]
pub struct ParamBlock {
    sampler: Sampler,
    remaining: usize,
}

impl ParamBlock {
    /// A block of `len` values drawn from `sampler`.
    pub fn new(sampler: Sampler, len: usize) -> Self {
        Self {
            sampler,
            remaining: len,
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl ParamGen for ParamBlock {
    fn sample(&mut self, rng: &mut StdRng, n: usize) -> Option<Vec<f32>> {
        if self.remaining == 0 {
            return None;
        }

        let n = n.min(self.remaining);
        self.remaining -= n;
        Some(self.sampler.sample_iter(rng).take(n).collect())
    }
}
