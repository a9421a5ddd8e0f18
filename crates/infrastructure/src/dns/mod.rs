pub mod codec;
pub mod upstream;
pub mod wire;

pub use codec::HickoryWireCodec;
pub use upstream::DohUpstreamResolver;
