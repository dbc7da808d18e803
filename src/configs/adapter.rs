use super::{LayerConfig, ModelConfig};
use crate::{
    ModelErr, Result,
    arch::{Sequential, activations::ActFn, layers::LayerSpec},
    initialization::InitSpec,
};

/// Turns model configs into built models.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adapter;

impl Adapter {
    pub fn new() -> Self {
        Self
    }

    /// Validates a model config and builds the model it describes.
    ///
    /// # Errors
    /// * A validation error if a width isn't positive or an activation is unknown.
    /// * A configuration error if two layers share a name.
    pub fn adapt_model(&self, model: &ModelConfig) -> Result<Sequential> {
        log::info!("adapting model config");

        match model {
            ModelConfig::Sequential { layers } => {
                let layers = layers
                    .iter()
                    .enumerate()
                    .map(|(i, layer)| self.adapt_layer(i, layer))
                    .collect::<Result<Vec<_>>>()?;

                Sequential::new(layers)
            }
        }
    }

    fn adapt_layer(&self, i: usize, layer: &LayerConfig) -> Result<LayerSpec> {
        match layer {
            LayerConfig::Dense {
                width,
                activation,
                name,
                kernel_init,
                bias_init,
            } => {
                let width = self.adapt_width(i, *width)?;

                let act_fn = self.adapt_act_fn(i, activation.as_deref())?;

                let mut spec = LayerSpec::dense(width, act_fn)
                    .with_kernel_init(kernel_init.unwrap_or(InitSpec::KERNEL))
                    .with_bias_init(bias_init.unwrap_or(InitSpec::BIAS));

                if let Some(name) = name {
                    spec = spec.named(name.as_str());
                }

                Ok(spec)
            }
        }
    }

    fn adapt_width(&self, i: usize, width: i64) -> Result<usize> {
        if width <= 0 {
            return Err(ModelErr::NonPositiveWidth {
                layer: i,
                got: width,
            });
        }

        usize::try_from(width).map_err(|_| ModelErr::WidthOutOfRange {
            layer: i,
            got: width,
        })
    }

    fn adapt_act_fn(&self, i: usize, activation: Option<&str>) -> Result<ActFn> {
        let Some(activation) = activation else {
            return Ok(ActFn::Linear);
        };

        activation.parse().map_err(|_| ModelErr::UnknownActivation {
            layer: Some(i),
            got: activation.to_string(),
        })
    }
}
