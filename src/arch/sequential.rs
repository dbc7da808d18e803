use std::fmt;

use super::{InitializedSequential, SequentialBuilder, layers::LayerSpec};
use crate::Result;

/// A sequential model: an ordered, non-branching composition of dense layers. Data flows from
/// the first declared layer to the last.
///
/// Once built a `Sequential` is never mutated, cloning it yields an independent, structurally
/// equal model.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequential {
    layers: Vec<LayerSpec>,
}

impl Sequential {
    /// Starts declaring a new model.
    pub fn builder() -> SequentialBuilder {
        SequentialBuilder::new()
    }

    /// Builds a model from its layers.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of, in forward order.
    ///
    /// # Returns
    /// The model, or the first validation or configuration error found.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = LayerSpec>,
    {
        SequentialBuilder::new().layers(layers).build()
    }

    pub(super) fn from_validated(layers: Vec<LayerSpec>) -> Self {
        Self { layers }
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerSpec> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Finds a layer by its name.
    pub fn get(&self, name: &str) -> Option<&LayerSpec> {
        self.position(name).map(|i| &self.layers[i])
    }

    /// Returns the index of the layer with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|layer| layer.name() == Some(name))
    }

    /// The width of the model's output, `None` for a model without layers.
    pub fn output_width(&self) -> Option<usize> {
        self.layers.last().map(LayerSpec::output_width)
    }

    /// Returns the amount of parameters the model would have for a given input width, `None` if
    /// it doesn't fit in a `usize`.
    pub fn size(&self, input_width: usize) -> Option<usize> {
        let mut fan_in = input_width;

        self.layers.iter().try_fold(0usize, |total, layer| {
            let size = layer.size(fan_in)?;
            fan_in = layer.output_width();
            total.checked_add(size)
        })
    }

    /// Resolves the shape of every layer and allocates its parameters.
    ///
    /// # Arguments
    /// * `input_width` - The width of the samples the model will be fed.
    /// * `seed` - Seeds the random initializers, `None` draws a seed from the OS.
    ///
    /// # Returns
    /// The initialized model, this one stays untouched.
    pub fn initialize(
        &self,
        input_width: usize,
        seed: Option<u64>,
    ) -> Result<InitializedSequential> {
        InitializedSequential::new(self.clone(), input_width, seed)
    }
}

impl<'a> IntoIterator for &'a Sequential {
    type Item = &'a LayerSpec;
    type IntoIter = std::slice::Iter<'a, LayerSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequential[")?;

        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            if let Some(name) = layer.name() {
                write!(f, "{name}: ")?;
            }

            write!(f, "dense({}, {})", layer.output_width(), layer.act_fn())?;
        }

        write!(f, "]")
    }
}
