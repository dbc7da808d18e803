pub mod activations;
mod builder;
mod initialized;
pub mod layers;
mod sequential;

pub use builder::SequentialBuilder;
pub use initialized::InitializedSequential;
pub use sequential::Sequential;
