//! Identity service endpoints: profile lookup and the auth flows the
//! login/signup pages post through.

use serde_json::Value;

use crate::error::AppError;
use crate::upstream::client::UpstreamClient;

impl UpstreamClient {
    /// `GET /users/profile`, authenticated by the session cookie.
    pub async fn profile(&self, token: &str) -> Result<Value, AppError> {
        let resp = self
            .http
            .get(self.url("/users/profile"))
            .header(reqwest::header::COOKIE, Self::session_cookie(token))
            .send()
            .await?;
        Self::json_or_upstream_error("/users/profile", resp).await
    }

    /// `POST /auth/login`. Returns the raw response so the handler can
    /// forward the Set-Cookie header the identity service mints.
    pub async fn login(&self, payload: &Value) -> Result<reqwest::Response, AppError> {
        Ok(self
            .http
            .post(self.url("/auth/login"))
            .json(payload)
            .send()
            .await?)
    }

    /// `POST /auth/signup`. Returns the raw response so validation
    /// failures from the identity service reach the form unchanged.
    pub async fn signup(&self, payload: &Value) -> Result<reqwest::Response, AppError> {
        Ok(self
            .http
            .post(self.url("/auth/signup"))
            .json(payload)
            .send()
            .await?)
    }

    /// `POST /auth/logout`, authenticated by the session cookie. Returns
    /// the raw response so the handler can forward the cookie-clearing
    /// Set-Cookie header.
    pub async fn logout(&self, token: &str) -> Result<reqwest::Response, AppError> {
        Ok(self
            .http
            .post(self.url("/auth/logout"))
            .header(reqwest::header::COOKIE, Self::session_cookie(token))
            .send()
            .await?)
    }
}
