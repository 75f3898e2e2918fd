use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Raw session token from the cookie, unverified.
///
/// Used by handlers that forward the cookie to an upstream service,
/// which performs its own verification.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl FromRequest for SessionToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = (|| {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let cookie = req
                .cookie(app_state.gate.cookie_name)
                .ok_or_else(AppError::unauthorized)?;

            Ok(SessionToken(cookie.value().to_string()))
        })();

        ready(result)
    }
}
