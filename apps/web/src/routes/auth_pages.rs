//! Auth form endpoints. Login, signup, and logout are passthroughs to
//! the identity service; Set-Cookie headers it mints (or clears) are
//! forwarded to the browser unchanged.

use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::error::AppError;
use crate::extractors::session_token::SessionToken;
use crate::routes::pages::PageData;
use crate::state::app_state::AppState;

/// Forward an identity-service response: status, session cookies, body.
async fn forward(resp: reqwest::Response) -> Result<HttpResponse, AppError> {
    let status =
        StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    let mut builder = HttpResponse::build(status);
    for value in resp.headers().get_all(reqwest::header::SET_COOKIE) {
        if let Ok(value) = value.to_str() {
            builder.append_header((header::SET_COOKIE, value));
        }
    }

    let body: Value = resp.json().await?;
    Ok(builder.json(body))
}

async fn profile(state: web::Data<AppState>, token: SessionToken) -> HttpResponse {
    match state.upstream.profile(&token.0).await {
        Ok(data) => HttpResponse::Ok().json(PageData::ok(data)),
        Err(err) => HttpResponse::Ok().json(PageData::degraded(&err)),
    }
}

async fn login(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let resp = state.upstream.login(&payload).await?;
    forward(resp).await
}

async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let resp = state.upstream.signup(&payload).await?;
    forward(resp).await
}

async fn logout(state: web::Data<AppState>, token: SessionToken) -> Result<HttpResponse, AppError> {
    let resp = state.upstream.logout(&token.0).await?;
    forward(resp).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(profile))
        .route("/login", web::post().to(login))
        .route("/signup", web::post().to(signup))
        .route("/logout", web::post().to(logout));
}
