use std::env;
use std::time::Duration;

/// Where the backend services live.
///
/// The identity and domain endpoints are served from one API host, so a
/// single base URL covers both.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Read upstream settings from the environment, falling back to the
    /// local development defaults.
    pub fn from_env() -> Self {
        let base_url = env::var("UPSTREAM_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
