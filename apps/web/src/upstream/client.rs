use serde_json::Value;

use crate::config::gate::SESSION_COOKIE;
use crate::config::upstream::UpstreamConfig;
use crate::error::AppError;

/// HTTP client for the identity and domain services.
///
/// Payloads are treated as opaque JSON; the backend owns the schemas and
/// this layer only fetches and forwards them.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Format the session cookie header value for cookie-authenticated
    /// upstream calls.
    pub(crate) fn session_cookie(token: &str) -> String {
        format!("{SESSION_COOKIE}={token}")
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, AppError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::json_or_upstream_error(path, resp).await
    }

    pub(crate) async fn json_or_upstream_error(
        path: &str,
        resp: reqwest::Response,
    ) -> Result<Value, AppError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::upstream(format!(
                "{path} returned {status}"
            )));
        }
        Ok(resp.json().await?)
    }
}
