mod adapter;
mod model;

pub use adapter::Adapter;
pub use model::{LayerConfig, ModelConfig};
