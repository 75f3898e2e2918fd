use crate::config::gate::GateConfig;
use crate::state::security_config::SecurityConfig;
use crate::upstream::client::UpstreamClient;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including session token settings
    pub security: SecurityConfig,
    /// Path tables and cookie settings for the request gate
    pub gate: GateConfig,
    /// Client for the identity and domain services
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(security: SecurityConfig, gate: GateConfig, upstream: UpstreamClient) -> Self {
        Self {
            security,
            gate,
            upstream,
        }
    }
}
