mod block;
mod chained;
mod init_spec;
mod param_gen;
mod sampler;

pub use block::ParamBlock;
pub use chained::ChainedParamGen;
pub use init_spec::InitSpec;
pub use param_gen::ParamGen;
pub use sampler::Sampler;
