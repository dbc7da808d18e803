mod layer_spec;

pub use layer_spec::LayerSpec;
