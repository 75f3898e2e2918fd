use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::{AccountType, SessionClaims};
use crate::auth::token::verify_session_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Verified session claims for the current request.
///
/// On gated page paths the request gate has already verified the token
/// and stored the claims in request extensions; on `/api` paths (which
/// bypass the gate) the cookie is verified here instead.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub sub: String,
    pub account_type: AccountType,
}

impl From<SessionClaims> for CurrentUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            sub: claims.sub,
            account_type: claims.account_type,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<SessionClaims>().cloned() {
            return ready(Ok(claims.into()));
        }

        let result = (|| {
            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available".to_string()))?;

            let cookie = req
                .cookie(app_state.gate.cookie_name)
                .ok_or_else(AppError::unauthorized)?;

            let claims = verify_session_token(cookie.value(), &app_state.security)
                .map_err(|_| AppError::unauthorized())?;

            Ok(claims.into())
        })();

        ready(result)
    }
}
