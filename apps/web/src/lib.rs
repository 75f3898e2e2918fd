#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod gate;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod upstream;

// Re-exports for public API
pub use auth::claims::{AccountType, SessionClaims};
pub use auth::token::{mint_session_token, verify_session_token, TokenError};
pub use config::gate::{GateConfig, SESSION_COOKIE};
pub use config::upstream::UpstreamConfig;
pub use error::AppError;
pub use extractors::current_user::CurrentUser;
pub use extractors::session_token::SessionToken;
pub use gate::decision::{decide, GateDecision};
pub use gate::paths::{classify, PathClass, PathRule};
pub use middleware::cors::cors_middleware;
pub use middleware::request_gate::RequestGate;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use upstream::client::UpstreamClient;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    web_test_support::logging::init();
}
