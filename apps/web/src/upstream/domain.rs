//! Domain API endpoints: colleges, exams, and the preference-list
//! scoring tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::upstream::client::UpstreamClient;

/// Input to the preference-list scoring endpoint. The scoring algorithm
/// itself is remote; this is just its wire contract.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PreferenceListRequest {
    pub percentile: f64,
    pub category: String,
    pub branches: Vec<String>,
    pub places: Vec<String>,
}

impl UpstreamClient {
    /// `GET /colleges`.
    pub async fn colleges(&self) -> Result<Value, AppError> {
        self.get_json("/colleges").await
    }

    /// `GET /colleges/slug/{slug}`.
    pub async fn college_by_slug(&self, slug: &str) -> Result<Value, AppError> {
        self.get_json(&format!("/colleges/slug/{slug}")).await
    }

    /// `GET /exams`.
    pub async fn exams(&self) -> Result<Value, AppError> {
        self.get_json("/exams").await
    }

    /// `POST /tools/generate-preference-list`, authenticated by the
    /// session cookie.
    pub async fn generate_preference_list(
        &self,
        token: &str,
        request: &PreferenceListRequest,
    ) -> Result<Value, AppError> {
        let resp = self
            .http
            .post(self.url("/tools/generate-preference-list"))
            .header(reqwest::header::COOKIE, Self::session_cookie(token))
            .json(request)
            .send()
            .await?;
        Self::json_or_upstream_error("/tools/generate-preference-list", resp).await
    }
}
