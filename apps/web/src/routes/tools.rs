//! Preference-list generator: validates the form input shape, then
//! proxies to the remote scoring endpoint with the caller's session.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::extractors::session_token::SessionToken;
use crate::state::app_state::AppState;
use crate::upstream::domain::PreferenceListRequest;

async fn generate_preference_list(
    state: web::Data<AppState>,
    _user: CurrentUser,
    token: SessionToken,
    payload: web::Json<PreferenceListRequest>,
) -> Result<HttpResponse, AppError> {
    if !(0.0..=100.0).contains(&payload.percentile) {
        return Err(AppError::bad_request(
            "INVALID_PERCENTILE",
            "percentile must be between 0 and 100".to_string(),
        ));
    }
    if payload.branches.is_empty() {
        return Err(AppError::bad_request(
            "NO_BRANCHES",
            "select at least one branch".to_string(),
        ));
    }

    let data = state
        .upstream
        .generate_preference_list(&token.0, &payload)
        .await?;

    Ok(HttpResponse::Ok().json(data))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/generate-preference-list",
        web::post().to(generate_preference_list),
    );
}
