use std::collections::HashMap;

use super::{Sequential, layers::LayerSpec};
use crate::{ModelErr, Result};

/// Collects layer declarations and validates them into a `Sequential`.
///
/// `build` consumes the builder, a declaration is either still being assembled or already a model.
#[derive(Debug, Default, Clone)]
pub struct SequentialBuilder {
    layers: Vec<LayerSpec>,
}

impl SequentialBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer after the ones already declared.
    pub fn layer(mut self, layer: LayerSpec) -> Self {
        self.layers.push(layer);
        self
    }

    /// Appends several layers, keeping their order.
    pub fn layers<I>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = LayerSpec>,
    {
        self.layers.extend(layers);
        self
    }

    /// Validates the declared layers and composes them in declaration order.
    ///
    /// # Errors
    /// * `ModelErr::NonPositiveWidth` if a layer has no output units.
    /// * `ModelErr::DuplicateName` if two layers share a name.
    ///
    /// Layers are checked in order, the first offending one determines the error.
    pub fn build(self) -> Result<Sequential> {
        validate(&self.layers)?;

        log::info!("built sequential model with {} layer(s)", self.layers.len());
        Ok(Sequential::from_validated(self.layers))
    }
}

fn validate(layers: &[LayerSpec]) -> Result<()> {
    let mut names: HashMap<&str, usize> = HashMap::with_capacity(layers.len());

    for (i, layer) in layers.iter().enumerate() {
        if layer.output_width() == 0 {
            return Err(ModelErr::NonPositiveWidth { layer: i, got: 0 });
        }

        if let Some(name) = layer.name() {
            if let Some(&first) = names.get(name) {
                return Err(ModelErr::DuplicateName {
                    name: name.to_string(),
                    first,
                    second: i,
                });
            }
            names.insert(name, i);
        }

        log::debug!(
            "layer {i}: {} units, {} activation, name {:?}",
            layer.output_width(),
            layer.act_fn(),
            layer.name()
        );
    }

    Ok(())
}
