pub mod client;
pub mod domain;
pub mod identity;

pub use client::UpstreamClient;
pub use domain::PreferenceListRequest;
