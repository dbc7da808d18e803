use ndarray::{ArrayView1, ArrayView2};
use rand::{SeedableRng, rngs::StdRng};

use super::Sequential;
use crate::{
    ModelErr, Result,
    initialization::{ChainedParamGen, ParamBlock, ParamGen},
};

/// A `Sequential` whose layer shapes are resolved and whose parameters are allocated.
///
/// All the parameters live in a single flat buffer. Layer `i` with shape `(n, m)` owns
/// `(n + 1) * m` consecutive values: the `n x m` row-major weights followed by the `m` biases.
#[derive(Debug, Clone)]
pub struct InitializedSequential {
    model: Sequential,
    input_width: usize,
    shapes: Vec<(usize, usize)>,
    offsets: Vec<usize>,
    params: Vec<f32>,
}

impl InitializedSequential {
    pub(super) fn new(model: Sequential, input_width: usize, seed: Option<u64>) -> Result<Self> {
        if input_width == 0 {
            return Err(ModelErr::ZeroInputWidth);
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let shapes: Vec<_> = model
            .iter()
            .scan(input_width, |fan_in, layer| {
                let shape = (*fan_in, layer.output_width());
                *fan_in = layer.output_width();
                Some(shape)
            })
            .collect();

        let mut sizes = Vec::with_capacity(shapes.len());
        let mut total: usize = 0;

        for (i, (layer, &shape)) in model.iter().zip(&shapes).enumerate() {
            let overflow = || ModelErr::SizeOverflow { layer: i, shape };

            let size = layer.size(shape.0).ok_or_else(overflow)?;
            total = total.checked_add(size).ok_or_else(overflow)?;
            sizes.push(size);
        }

        let mut param_gens: Vec<Box<dyn ParamGen>> = Vec::with_capacity(2 * shapes.len());
        for (i, (layer, &(n, m))) in model.iter().zip(&shapes).enumerate() {
            let invalid = |reason: String| ModelErr::InvalidInit { layer: i, reason };

            let kernel = layer.kernel_init().sampler((n, m)).map_err(invalid)?;
            let bias = layer.bias_init().sampler((n, m)).map_err(invalid)?;

            param_gens.push(Box::new(ParamBlock::new(kernel, n * m)));
            param_gens.push(Box::new(ParamBlock::new(bias, m)));
        }

        let mut params = Vec::new();
        params
            .try_reserve_exact(total)
            .map_err(|e| ModelErr::ParamAlloc {
                size: total,
                reason: e.to_string(),
            })?;

        let mut param_gen = ChainedParamGen::new(param_gens);
        let mut offsets = Vec::with_capacity(shapes.len());

        // The blocks of layer `i` hold `n * m + m == sizes[i]` values, the chain never runs dry.
        for (i, (&size, &(n, m))) in sizes.iter().zip(&shapes).enumerate() {
            offsets.push(params.len());
            params.extend(param_gen.sample(&mut rng, size).into_iter().flatten());

            log::debug!("layer {i}: resolved shape ({n}, {m}), {size} parameter(s)");
        }

        debug_assert_eq!(params.len(), total);

        log::info!(
            "initialized sequential model with {} parameter(s) over {} layer(s)",
            params.len(),
            shapes.len()
        );

        Ok(Self {
            model,
            input_width,
            shapes,
            offsets,
            params,
        })
    }

    /// The declaration this model was initialized from.
    pub fn model(&self) -> &Sequential {
        &self.model
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// The width of the model's output, the input width for a model without layers.
    pub fn output_width(&self) -> usize {
        self.shapes.last().map_or(self.input_width, |&(_, m)| m)
    }

    /// The resolved `(fan_in, fan_out)` shape of every layer.
    pub fn shapes(&self) -> &[(usize, usize)] {
        &self.shapes
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.params.len()
    }

    pub fn params(&self) -> &[f32] {
        &self.params
    }

    /// Returns the raw parameters of the `i`-th layer.
    pub fn layer_params(&self, i: usize) -> Option<&[f32]> {
        let start = *self.offsets.get(i)?;
        let end = self.offsets.get(i + 1).copied().unwrap_or(self.params.len());
        Some(&self.params[start..end])
    }

    /// Gives a view of the `i`-th layer's parameters as its weights and biases.
    ///
    /// # Returns
    /// A tuple containing the weights and biases, or `None` if there's no such layer.
    pub fn view_params(&self, i: usize) -> Option<(ArrayView2<'_, f32>, ArrayView1<'_, f32>)> {
        let (n, m) = *self.shapes.get(i)?;
        let (w_raw, b_raw) = self.layer_params(i)?.split_at(n * m);

        let weights = ArrayView2::from_shape((n, m), w_raw).ok()?;
        let biases = ArrayView1::from_shape(m, b_raw).ok()?;
        Some((weights, biases))
    }
}
