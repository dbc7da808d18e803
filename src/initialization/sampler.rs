use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// The distribution a block of parameters is drawn from once its layer's shape is resolved.
#[derive(Debug, Clone, Copy)]
pub enum Sampler {
    Const(f32),
    Uniform(Uniform<f32>),
    Normal(Normal<f32>),
}

impl Sampler {
    /// Samples from `[low, high)`, or `[low, high]` when `inclusive`.
    pub fn uniform(low: f32, high: f32, inclusive: bool) -> Result<Self, String> {
        let uniform = if inclusive {
            Uniform::new_inclusive(low, high)
        } else {
            Uniform::new(low, high)
        };

        uniform.map(Sampler::Uniform).map_err(|e| e.to_string())
    }

    /// Samples from `[-limit, limit)`.
    pub fn symmetric(limit: f32) -> Result<Self, String> {
        Self::uniform(-limit, limit, false)
    }

    pub fn normal(mean: f32, std_dev: f32) -> Result<Self, String> {
        Normal::new(mean, std_dev)
            .map(Sampler::Normal)
            .map_err(|e| e.to_string())
    }
}

impl Distribution<f32> for Sampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        match self {
            Sampler::Const(value) => *value,
            Sampler::Uniform(uniform) => uniform.sample(rng),
            Sampler::Normal(normal) => normal.sample(rng),
        }
    }
}
