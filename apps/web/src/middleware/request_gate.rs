//! Request gate middleware
//!
//! Runs on every inbound request, classifies the path, verifies the
//! session cookie when one is present, and either forwards the request
//! (storing verified claims in request extensions) or short-circuits
//! with a redirect. Static assets and backend API paths bypass the gate
//! entirely.

use std::sync::Arc;

use actix_web::body::{BoxBody, EitherBody};
use actix_web::cookie::time::{Duration, OffsetDateTime};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpMessage, HttpResponse};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::config::gate::GateConfig;
use crate::gate::decision::{decide, GateDecision};
use crate::gate::paths::classify;
use crate::state::security_config::SecurityConfig;

pub struct RequestGate {
    config: Arc<GateConfig>,
    security: Arc<SecurityConfig>,
}

impl RequestGate {
    pub fn new(config: GateConfig, security: SecurityConfig) -> Self {
        Self {
            config: Arc::new(config),
            security: Arc::new(security),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestGateMiddleware {
            service,
            config: Arc::clone(&self.config),
            security: Arc::clone(&self.security),
        }))
    }
}

pub struct RequestGateMiddleware<S> {
    service: S,
    config: Arc<GateConfig>,
    security: Arc<SecurityConfig>,
}

impl<S, B> Service<ServiceRequest> for RequestGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        let class = classify(&path, &self.config);
        let token = req.cookie(self.config.cookie_name).map(|c| c.value().to_string());

        let decision = match decide(&path, class, token.as_deref(), &self.security) {
            Ok(decision) => decision,
            Err(err) => return Box::pin(async move { Err(err.into()) }),
        };

        match decision {
            GateDecision::Continue { claims } => {
                if let Some(claims) = claims {
                    req.extensions_mut().insert(claims);
                }
                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }

            GateDecision::ContinueClearCookie => {
                debug!(url.path = %path, reason = "invalid_token_on_auth_page", message = "clearing session cookie");
                let removal = removal_cookie(self.config.cookie_name, self.config.secure_cookies);
                let fut = self.service.call(req);
                Box::pin(async move {
                    let mut res = fut.await?;
                    res.response_mut()
                        .add_cookie(&removal)
                        .map_err(actix_web::error::ErrorInternalServerError)?;
                    Ok(res.map_into_left_body())
                })
            }

            GateDecision::RedirectToLogin {
                redirected_from,
                session_expired,
                clear_cookie,
            } => {
                debug!(url.path = %path, session_expired, message = "redirecting to login");
                let mut location = format!(
                    "{}?redirectedFrom={}",
                    self.config.login_path, redirected_from
                );
                if session_expired {
                    location.push_str("&error=session_expired");
                }

                let mut builder = HttpResponse::build(StatusCode::SEE_OTHER);
                builder.insert_header((header::LOCATION, location));
                if clear_cookie {
                    builder.cookie(removal_cookie(
                        self.config.cookie_name,
                        self.config.secure_cookies,
                    ));
                }
                let res = req.into_response(builder.finish());
                Box::pin(async move { Ok(res.map_into_right_body()) })
            }

            GateDecision::RedirectToHome => {
                debug!(url.path = %path, message = "redirecting to home");
                let res = req.into_response(
                    HttpResponse::build(StatusCode::SEE_OTHER)
                        .insert_header((header::LOCATION, self.config.home_path))
                        .finish(),
                );
                Box::pin(async move { Ok(res.map_into_right_body()) })
            }
        }
    }
}

/// An immediately-expired overwrite of the session cookie, matching the
/// attributes the identity service sets at login so browsers replace it.
fn removal_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, "");
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(secure);
    cookie.set_max_age(Duration::ZERO);
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie
}
