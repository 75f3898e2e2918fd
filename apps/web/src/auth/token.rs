use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::auth::claims::{AccountType, SessionClaims};
use crate::state::security_config::SecurityConfig;

/// Session lifetime for minted tokens (seven days).
const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Why a session token failed verification.
///
/// The gate treats every variant except `MissingSecret` as "no token";
/// `MissingSecret` is a deployment error and must fail closed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed")]
    Malformed,
}

/// Mint an HS256 session token.
///
/// The identity service owns minting in production; this exists for tests
/// and local tooling.
pub fn mint_session_token(
    sub: &str,
    account_type: AccountType,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    if security.jwt_secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Malformed)?
        .as_secs() as i64;

    let claims = SessionClaims {
        sub: sub.to_string(),
        account_type,
        iat,
        exp: iat + SESSION_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|_| TokenError::Malformed)
}

/// Verify a session token and return its claims.
///
/// Never panics; every decode failure maps to a `TokenError` so callers
/// can degrade to "unauthenticated" instead of erroring the request.
pub fn verify_session_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<SessionClaims, TokenError> {
    if security.jwt_secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}
