pub mod gate;
pub mod upstream;

pub use gate::GateConfig;
pub use upstream::UpstreamConfig;
