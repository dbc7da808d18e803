use serde::{Deserialize, Serialize};

use super::Sampler;

/// How a block of parameters is generated once the layer's shape is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitSpec {
    Const { value: f32 },
    Uniform { low: f32, high: f32 },
    UniformInclusive { low: f32, high: f32 },
    XavierUniform,
    LecunUniform,
    Normal { mean: f32, std_dev: f32 },
    Kaiming,
    Xavier,
    Lecun,
}

impl InitSpec {
    /// The default for a layer's weight matrix.
    pub const KERNEL: InitSpec = InitSpec::XavierUniform;

    /// The default for a layer's biases.
    pub const BIAS: InitSpec = InitSpec::Const { value: 0.0 };

    /// Resolves this spec into a distribution for a layer of the given shape.
    ///
    /// The fan-based variants scale with the layer:
    /// * Xavier uniform: `[-r, r)`, `r = sqrt(6 / (fan_in + fan_out))`.
    /// * LeCun uniform: `[-r, r)`, `r = sqrt(3 / fan_in)`.
    /// * Kaiming: `N(0, 2 / fan_in)`.
    /// * Xavier: `N(0, 2 / (fan_in + fan_out))`.
    /// * Lecun: `N(0, 1 / fan_in)`.
    ///
    /// `fan_in + fan_out` never exceeds the layer's parameter count, which the caller has
    /// already checked to fit in a `usize`.
    ///
    /// # Errors
    /// The reason the distribution is invalid (empty range, non finite deviation, ...).
    pub fn sampler(self, (fan_in, fan_out): (usize, usize)) -> Result<Sampler, String> {
        let fan_in = fan_in as f32;
        let fans = fan_in + fan_out as f32;

        match self {
            InitSpec::Const { value } => Ok(Sampler::Const(value)),
            InitSpec::Uniform { low, high } => Sampler::uniform(low, high, false),
            InitSpec::UniformInclusive { low, high } => Sampler::uniform(low, high, true),
            InitSpec::XavierUniform => Sampler::symmetric((6. / fans).sqrt()),
            InitSpec::LecunUniform => Sampler::symmetric((3. / fan_in).sqrt()),
            InitSpec::Normal { mean, std_dev } => Sampler::normal(mean, std_dev),
            InitSpec::Kaiming => Sampler::normal(0., (2. / fan_in).sqrt()),
            InitSpec::Xavier => Sampler::normal(0., (2. / fans).sqrt()),
            InitSpec::Lecun => Sampler::normal(0., (1. / fan_in).sqrt()),
        }
    }
}
