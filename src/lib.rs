pub mod arch;
pub mod configs;
pub mod error;
pub mod initialization;

use arch::{Sequential, activations::ActFn, layers::LayerSpec};

pub use error::{ErrorKind, ModelErr, Result};

/// Builds the two layer model the binary declares: `relu` layers of 2 and 3 units named
/// `layer1` and `layer2`.
pub fn build_model() -> Result<Sequential> {
    Sequential::builder()
        .layer(LayerSpec::dense(2, ActFn::Relu).named("layer1"))
        .layer(LayerSpec::dense(3, ActFn::Relu).named("layer2"))
        .build()
}
