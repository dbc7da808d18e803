use crate::{arch::activations::ActFn, initialization::InitSpec};

/// The declaration of a single dense stage of a sequential model.
///
/// A `LayerSpec` only knows its own output width, the input width gets resolved when the model
/// it belongs to is initialized.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    output_width: usize,
    act_fn: ActFn,
    name: Option<String>,
    kernel_init: InitSpec,
    bias_init: InitSpec,
}

impl LayerSpec {
    /// Declares a new dense layer.
    ///
    /// # Arguments
    /// * `output_width` - The amount of output units.
    /// * `act_fn` - The activation applied after the linear transformation.
    ///
    /// # Returns
    /// An unnamed layer with the default initializers.
    pub fn dense(output_width: usize, act_fn: ActFn) -> Self {
        Self {
            output_width,
            act_fn,
            name: None,
            kernel_init: InitSpec::KERNEL,
            bias_init: InitSpec::BIAS,
        }
    }

    /// Gives this layer a name, it must be unique within its model.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kernel_init(mut self, init: InitSpec) -> Self {
        self.kernel_init = init;
        self
    }

    pub fn with_bias_init(mut self, init: InitSpec) -> Self {
        self.bias_init = init;
        self
    }

    pub fn output_width(&self) -> usize {
        self.output_width
    }

    pub fn act_fn(&self) -> ActFn {
        self.act_fn
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kernel_init(&self) -> InitSpec {
        self.kernel_init
    }

    pub fn bias_init(&self) -> InitSpec {
        self.bias_init
    }

    /// Returns the amount of parameters this layer has once its input width is known.
    ///
    /// # Arguments
    /// * `input_width` - The output width of the previous layer, or the model's input width.
    ///
    /// # Returns
    /// `None` if the count doesn't fit in a `usize`.
    pub fn size(&self, input_width: usize) -> Option<usize> {
        input_width.checked_add(1)?.checked_mul(self.output_width)
    }
}
